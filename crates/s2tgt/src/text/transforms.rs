use regex::Regex;

use crate::{
    errors::{S2tgtError, S2tgtResult},
    text::TextTransform,
};

/// Passes text through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTransform;

impl TextTransform for IdentityTransform {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        text.to_string()
    }
}

/// Lowercases text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

impl TextTransform for Lowercase {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        text.to_lowercase()
    }
}

/// Trims text and collapses whitespace runs to a single space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceNormalizer;

impl TextTransform for WhitespaceNormalizer {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// The default punctuation pattern; keeps word-internal apostrophes and hyphens.
pub const DEFAULT_PUNCTUATION_PATTERN: &str = r"[\p{P}&&[^'\-]]";

/// Splits punctuation off into standalone pieces.
///
/// ``"Hello, world!"`` becomes ``"Hello , world !"``.
#[derive(Debug, Clone)]
pub struct PunctuationSplitter {
    pattern: Regex,
}

impl PunctuationSplitter {
    /// Build a splitter for [`DEFAULT_PUNCTUATION_PATTERN`].
    pub fn new() -> S2tgtResult<Self> {
        Self::with_pattern(DEFAULT_PUNCTUATION_PATTERN)
    }

    /// Build a splitter for a custom single-character pattern.
    pub fn with_pattern(pattern: &str) -> S2tgtResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| S2tgtError::Parse(format!("punctuation pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// The regex pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl TextTransform for PunctuationSplitter {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        let spaced = self.pattern.replace_all(text, " $0 ");
        WhitespaceNormalizer.apply(&spaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_transforms() {
        assert_eq!(IdentityTransform.apply(" A  b "), " A  b ");
        assert_eq!(Lowercase.apply("Guten Tag"), "guten tag");
        assert_eq!(WhitespaceNormalizer.apply("  a \t b\n c "), "a b c");
        assert_eq!(WhitespaceNormalizer.apply("   "), "");
    }

    #[test]
    fn test_punctuation_splitter() {
        let splitter = PunctuationSplitter::new().unwrap();
        assert_eq!(splitter.apply("Hello, world!"), "Hello , world !");
        assert_eq!(splitter.apply("it's well-known."), "it's well-known .");
        assert_eq!(splitter.apply("«Ja»"), "« Ja »");

        assert!(PunctuationSplitter::with_pattern("(").is_err());
    }
}
