//! # Vocabulary
//!
//! The [`Dictionary`] maps whitespace-separated symbols to tokens;
//! it carries the padding and end-of-sentence tokens used when
//! building and collating targets.
//!
//! Language tags (see [`lang_tags`]) are ordinary dictionary symbols
//! formed from a [`LangTagTemplate`].
pub mod dictionary;
pub mod io;
pub mod lang_tags;

#[doc(inline)]
pub use dictionary::{Dictionary, SpecialSymbols};
#[doc(inline)]
pub use lang_tags::{DEFAULT_LANG_TAG_TEMPLATE, LangTagTemplate, register_lang_tags};
