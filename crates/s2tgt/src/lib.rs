//! # `s2tgt` Speech Translation Targets
//!
//! Target construction for multi-task speech translation training:
//! a primary translation target plus an auxiliary transcript target.
//!
//! See:
//! * [`vocab`] for the symbol [`Dictionary`] and language tags.
//! * [`text`] for the pre-tokenization [`TextTransform`] pipeline.
//! * [`targets`] to encode targets and assemble auxiliary batches.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Building an Auxiliary Batch
//!
//! ```rust
//! use std::sync::Arc;
//! use s2tgt::targets::{AuxiliaryBatchAssembler, TargetEncoder, TranscriptRecord, TranscriptTable};
//! use s2tgt::text::WhitespaceNormalizer;
//! use s2tgt::vocab::Dictionary;
//!
//! let aux: Arc<Dictionary<u32>> = Dictionary::from_entries(
//!     [("<pad>", 0), ("</s>", 2), ("hello", 5), ("world", 6), ("bye", 7)],
//!     "<pad>",
//!     "</s>",
//! )?
//! .into();
//! let primary: Arc<Dictionary<u32>> =
//!     Dictionary::from_entries([("<pad>", 0), ("</s>", 2)], "<pad>", "</s>")?.into();
//!
//! let encoder = TargetEncoder::new(aux, Arc::new(WhitespaceNormalizer));
//! let assembler = AuxiliaryBatchAssembler::new(encoder, primary);
//!
//! let table: TranscriptTable = [
//!     TranscriptRecord::new("hello world", "en"),
//!     TranscriptRecord::new("bye", "en"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let batch = assembler.assemble(&[0, 1], &table)?;
//! assert_eq!(batch.target.to_nested(), vec![vec![5, 6, 2], vec![7, 2, 0]]);
//! assert_eq!(batch.prev_output_tokens.to_nested(), vec![vec![2, 5, 6], vec![2, 7, 0]]);
//! assert_eq!(batch.ntokens, 5);
//! # Ok::<(), s2tgt::S2tgtError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod targets;
pub mod text;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{S2tgtError, S2tgtResult};
#[doc(inline)]
pub use targets::{AuxiliaryBatch, AuxiliaryBatchAssembler, EncodedTarget, TargetEncoder, TargetOptions};
#[doc(inline)]
pub use text::{TextPipeline, TextTransform};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{Dictionary, LangTagTemplate};
