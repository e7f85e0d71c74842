//! # Encoded Targets

use core::ops::Deref;

use crate::types::TokenType;

/// An immutable target token sequence.
///
/// Layout: ``[tag?] body.. eos``. It is never empty; the trailing
/// end-of-sentence token is always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedTarget<T: TokenType> {
    tokens: Vec<T>,
    tagged: bool,
}

impl<T: TokenType> EncodedTarget<T> {
    /// Assemble a target from its parts.
    pub fn from_parts(
        tag: Option<T>,
        body: &[T],
        eos: T,
    ) -> Self {
        let mut tokens = Vec::with_capacity(body.len() + 2);
        tokens.extend(tag);
        tokens.extend_from_slice(body);
        tokens.push(eos);
        Self {
            tokens,
            tagged: tag.is_some(),
        }
    }

    /// Wrap an eos-terminated sequence, optionally prefixed by a tag.
    pub(crate) fn from_encoded_line(
        tag: Option<T>,
        line: Vec<T>,
    ) -> Self {
        let tokens = match tag {
            None => line,
            Some(tag) => {
                let mut tokens = Vec::with_capacity(line.len() + 1);
                tokens.push(tag);
                tokens.extend(line);
                tokens
            }
        };
        Self {
            tokens,
            tagged: tag.is_some(),
        }
    }

    /// The full token sequence.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// The prepended language tag, if any.
    pub fn tag(&self) -> Option<T> {
        if self.tagged {
            self.tokens.first().copied()
        } else {
            None
        }
    }

    /// The text tokens, without the tag and the trailing eos.
    pub fn body(&self) -> &[T] {
        let start = usize::from(self.tagged);
        let end = self.tokens.len().saturating_sub(1).max(start);
        &self.tokens[start..end]
    }

    /// The trailing end-of-sentence token.
    pub fn eos(&self) -> Option<T> {
        self.tokens.last().copied()
    }

    /// Consume the target, returning the token vector.
    pub fn into_vec(self) -> Vec<T> {
        self.tokens
    }
}

impl<T: TokenType> Deref for EncodedTarget<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<T: TokenType> AsRef<[T]> for EncodedTarget<T> {
    fn as_ref(&self) -> &[T] {
        &self.tokens
    }
}

impl<T: TokenType> From<EncodedTarget<T>> for Vec<T> {
    fn from(value: EncodedTarget<T>) -> Self {
        value.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let target = EncodedTarget::<u32>::from_parts(Some(9), &[5, 6], 2);
        assert_eq!(target.tokens(), &[9, 5, 6, 2]);
        assert_eq!(target.tag(), Some(9));
        assert_eq!(target.body(), &[5, 6]);
        assert_eq!(target.eos(), Some(2));
        assert_eq!(target.len(), 4);

        let untagged = EncodedTarget::<u32>::from_parts(None, &[], 2);
        assert_eq!(untagged.tokens(), &[2]);
        assert_eq!(untagged.tag(), None);
        assert!(untagged.body().is_empty());
    }

    #[test]
    fn test_from_encoded_line() {
        let target = EncodedTarget::<u16>::from_encoded_line(Some(9), vec![5, 2]);
        assert_eq!(target, EncodedTarget::from_parts(Some(9), &[5], 2));
        assert_eq!(Vec::from(target), vec![9, 5, 2]);
    }
}
