//! # Target Encoder

use core::fmt;
use std::sync::Arc;

use crate::{
    errors::S2tgtResult,
    targets::{EncodedTarget, TargetOptions},
    text::TextTransform,
    types::TokenType,
    vocab::{Dictionary, LangTagTemplate},
};

/// Maps ``(text, lang)`` pairs to [`EncodedTarget`]s.
///
/// Holds a text transform, a dictionary, and (when tag prepending is on)
/// a [`LangTagTemplate`]. Encoding is a pure function of these and
/// the inputs; the encoder may be shared freely across threads.
#[derive(Clone)]
pub struct TargetEncoder<T: TokenType> {
    vocab: Arc<Dictionary<T>>,
    transform: Arc<dyn TextTransform>,
    lang_tag: Option<LangTagTemplate>,
}

impl<T: TokenType> fmt::Debug for TargetEncoder<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("TargetEncoder")
            .field("vocab_len", &self.vocab.len())
            .field("lang_tag", &self.lang_tag)
            .finish()
    }
}

impl<T: TokenType> TargetEncoder<T> {
    /// Create a new encoder without tag prepending.
    ///
    /// ## Arguments
    /// * `vocab` - the target dictionary.
    /// * `transform` - the pre-tokenization transform.
    pub fn new(
        vocab: Arc<Dictionary<T>>,
        transform: Arc<dyn TextTransform>,
    ) -> Self {
        Self {
            vocab,
            transform,
            lang_tag: None,
        }
    }

    /// Create a new encoder configured by `options`.
    pub fn from_options(
        vocab: Arc<Dictionary<T>>,
        transform: Arc<dyn TextTransform>,
        options: &TargetOptions,
    ) -> Self {
        Self::new(vocab, transform).with_lang_tag(options.effective_lang_tag().cloned())
    }

    /// Set the language tag template; `None` disables tag prepending.
    pub fn with_lang_tag<L>(
        mut self,
        lang_tag: L,
    ) -> Self
    where
        L: Into<Option<LangTagTemplate>>,
    {
        self.lang_tag = lang_tag.into();
        self
    }

    /// The target dictionary.
    pub fn vocab(&self) -> &Arc<Dictionary<T>> {
        &self.vocab
    }

    /// The active language tag template, if tags are prepended.
    pub fn lang_tag(&self) -> Option<&LangTagTemplate> {
        self.lang_tag.as_ref()
    }

    /// Is tag prepending enabled?
    pub fn prepends_lang_tag(&self) -> bool {
        self.lang_tag.is_some()
    }

    /// Run the pre-tokenization transform.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> String {
        self.transform.apply(text)
    }

    /// Encode one target.
    ///
    /// ## Arguments
    /// * `text` - the raw target text.
    /// * `lang` - the target language; only read when tags are prepended.
    ///
    /// ## Returns
    /// The encoded target, or [`crate::errors::S2tgtError::UnknownToken`] if any
    /// piece, or the language tag, is absent from the dictionary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
        lang: &str,
    ) -> S2tgtResult<EncodedTarget<T>> {
        let tokenized = self.tokenize(text);
        let line = self.vocab.encode_line(&tokenized, true)?;

        let tag = match &self.lang_tag {
            Some(template) => Some(template.lookup(&self.vocab, lang)?),
            None => None,
        };

        Ok(EncodedTarget::from_encoded_line(tag, line))
    }

    /// Encode a batch of ``(text, lang)`` pairs, in order.
    ///
    /// Fails on the first example that fails to encode.
    pub fn encode_batch<S, L>(
        &self,
        batch: &[(S, L)],
    ) -> S2tgtResult<Vec<EncodedTarget<T>>>
    where
        S: AsRef<str>,
        L: AsRef<str>,
    {
        batch
            .iter()
            .map(|(text, lang)| self.encode(text.as_ref(), lang.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::S2tgtError,
        text::{IdentityTransform, Lowercase, PunctuationSplitter, TextPipeline},
        types::{check_is_send, check_is_sync},
    };

    fn scenario_vocab() -> Arc<Dictionary<u32>> {
        Dictionary::from_entries(
            [
                ("<pad>", 0),
                ("</s>", 2),
                ("hello", 5),
                ("world", 6),
                ("<lang:de>", 9),
            ],
            "<pad>",
            "</s>",
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_encode_untagged() {
        let encoder = TargetEncoder::new(scenario_vocab(), Arc::new(IdentityTransform));
        check_is_send(&encoder);
        check_is_sync(&encoder);
        assert!(!encoder.prepends_lang_tag());

        let target = encoder.encode("hello world", "de").unwrap();
        assert_eq!(target.tokens(), &[5, 6, 2]);
        assert_eq!(target.tag(), None);

        // The language is ignored without tag prepending.
        assert_eq!(encoder.encode("hello world", "xx").unwrap(), target);
    }

    #[test]
    fn test_encode_tagged() {
        let encoder = TargetEncoder::new(scenario_vocab(), Arc::new(IdentityTransform))
            .with_lang_tag(LangTagTemplate::default());

        let target = encoder.encode("hello world", "de").unwrap();
        assert_eq!(target.tokens(), &[9, 5, 6, 2]);
        assert_eq!(target.tag(), Some(9));
        assert_eq!(target.body(), &[5, 6]);
    }

    #[test]
    fn test_unknown_tokens() {
        let encoder = TargetEncoder::new(scenario_vocab(), Arc::new(IdentityTransform))
            .with_lang_tag(LangTagTemplate::default());

        let err = encoder.encode("hello there", "de").unwrap_err();
        assert!(matches!(err, S2tgtError::UnknownToken { token } if token == "there"));

        let err = encoder.encode("hello", "fr").unwrap_err();
        assert!(matches!(err, S2tgtError::UnknownToken { token } if token == "<lang:fr>"));
    }

    #[test]
    fn test_encode_with_pipeline() {
        let pipeline = TextPipeline::new()
            .with_stage(Lowercase)
            .with_stage(PunctuationSplitter::new().unwrap());
        let vocab: Arc<Dictionary<u32>> =
            Dictionary::from_symbols(["hello", "world", ",", "!"]).unwrap().into();
        let options = TargetOptions::default();
        let encoder = TargetEncoder::from_options(vocab, pipeline.into_shared(), &options);

        assert_eq!(encoder.tokenize("Hello, World!"), "hello , world !");
        let target = encoder.encode("Hello, World!", "").unwrap();
        assert_eq!(target.tokens(), &[4, 6, 5, 7, 2]);
    }

    #[test]
    fn test_encode_batch() {
        let encoder = TargetEncoder::new(scenario_vocab(), Arc::new(IdentityTransform));
        let targets = encoder
            .encode_batch(&[("hello", "de"), ("world hello", "de")])
            .unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].tokens(), &[5, 2]);
        assert_eq!(targets[1].tokens(), &[6, 5, 2]);

        assert!(encoder.encode_batch(&[("hello", ""), ("nope", "")]).is_err());
    }
}
