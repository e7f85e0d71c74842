//! # Text Transforms
//!
//! Targets are built from text which has been through a
//! pre-tokenization pipeline; the output is a whitespace-separated
//! line of dictionary symbols.
//!
//! * [`TextTransform`] is the single-stage trait; any
//!   ``Fn(&str) -> String + Send + Sync`` closure is a transform.
//! * [`TextPipeline`] applies an ordered list of stages.
mod pipeline;
mod transforms;

#[doc(inline)]
pub use pipeline::*;
#[doc(inline)]
pub use transforms::*;

/// A pure `&str -> String` text transformation.
pub trait TextTransform: Send + Sync {
    /// Apply the transform.
    fn apply(
        &self,
        text: &str,
    ) -> String;
}

impl<F> TextTransform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(
        &self,
        text: &str,
    ) -> String {
        self(text)
    }
}
