//! # Targets
//!
//! * [`TargetEncoder`] turns one ``(text, lang)`` pair into an [`EncodedTarget`].
//! * [`AuxiliaryBatchAssembler`] turns a batch of example ids into an
//!   [`AuxiliaryBatch`] for a second training objective.
//! * [`collate_tokens`] pads token sequences into [`PaddedTokens`].
pub mod assembler;
pub mod collate;
pub mod encoded;
pub mod encoder;
pub mod options;
pub mod transcripts;

#[doc(inline)]
pub use assembler::{AuxiliaryBatch, AuxiliaryBatchAssembler};
#[doc(inline)]
pub use collate::{CollateOptions, PaddedTokens, collate_tokens};
#[doc(inline)]
pub use encoded::EncodedTarget;
#[doc(inline)]
pub use encoder::TargetEncoder;
#[doc(inline)]
pub use options::TargetOptions;
#[doc(inline)]
pub use transcripts::{TranscriptLookup, TranscriptRecord, TranscriptTable};
