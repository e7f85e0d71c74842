//! # Auxiliary Batch Assembler
//!
//! Builds the second training objective's batch for a primary batch:
//! the auxiliary targets, their shifted decoder inputs,
//! lengths, and token count.
//!
//! Targets are padded with the auxiliary pad; the shifted decoder inputs
//! are padded and led with the primary dictionary's pad and eos.

use std::sync::Arc;

use crate::{
    errors::{S2tgtError, S2tgtResult},
    targets::{
        CollateOptions,
        EncodedTarget,
        PaddedTokens,
        TargetEncoder,
        TargetOptions,
        TranscriptLookup,
        collate_tokens,
        transcripts::DEFAULT_LANG,
    },
    types::TokenType,
    vocab::Dictionary,
};

/// The auxiliary-task training payload for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryBatch<T: TokenType> {
    /// Right-padded targets, padded with the auxiliary pad.
    pub target: PaddedTokens<T>,

    /// Targets shifted right behind the primary eos, padded with the primary pad.
    pub prev_output_tokens: PaddedTokens<T>,

    /// Unpadded target lengths, in id order.
    pub target_lengths: Vec<usize>,

    /// The sum of `target_lengths`.
    pub ntokens: usize,
}

impl<T: TokenType> AuxiliaryBatch<T> {
    /// The number of examples.
    pub fn nsentences(&self) -> usize {
        self.target_lengths.len()
    }
}

/// Assembles [`AuxiliaryBatch`]es.
#[derive(Debug, Clone)]
pub struct AuxiliaryBatchAssembler<T: TokenType> {
    encoder: TargetEncoder<T>,
    primary: Arc<Dictionary<T>>,
    parallel: bool,
}

impl<T: TokenType> AuxiliaryBatchAssembler<T> {
    /// Create a new assembler.
    ///
    /// ## Arguments
    /// * `encoder` - the encoder bound to the auxiliary dictionary.
    /// * `primary` - the primary task's dictionary; its pad and eos shape the decoder inputs.
    pub fn new(
        encoder: TargetEncoder<T>,
        primary: Arc<Dictionary<T>>,
    ) -> Self {
        if encoder.vocab().eos() != primary.eos() {
            log::warn!(
                "auxiliary eos ({}) differs from primary eos ({})",
                encoder.vocab().eos(),
                primary.eos()
            );
        }
        Self {
            encoder,
            primary,
            parallel: false,
        }
    }

    /// Create a new assembler configured by `options`.
    pub fn from_options(
        encoder: TargetEncoder<T>,
        primary: Arc<Dictionary<T>>,
        options: &TargetOptions,
    ) -> Self {
        Self::new(encoder, primary).with_parallel(options.parallel())
    }

    /// Sets the parallelism value and returns the assembler.
    ///
    /// Only honored when the ``rayon`` feature is enabled.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.parallel = parallel;
        self
    }

    /// Gets the parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// The auxiliary target encoder.
    pub fn encoder(&self) -> &TargetEncoder<T> {
        &self.encoder
    }

    /// The primary dictionary.
    pub fn primary(&self) -> &Arc<Dictionary<T>> {
        &self.primary
    }

    fn encode_one<L>(
        &self,
        id: usize,
        lookup: &L,
    ) -> S2tgtResult<EncodedTarget<T>>
    where
        L: TranscriptLookup + ?Sized,
    {
        let text = lookup.text(id).ok_or(S2tgtError::MissingExample { id })?;
        let lang = lookup.lang(id).unwrap_or(DEFAULT_LANG);
        self.encoder.encode(text, lang)
    }

    /// Encode the auxiliary targets for `ids`, in order.
    pub fn encode_targets<L>(
        &self,
        ids: &[usize],
        lookup: &L,
    ) -> S2tgtResult<Vec<EncodedTarget<T>>>
    where
        L: TranscriptLookup + ?Sized,
    {
        #[cfg(feature = "rayon")]
        {
            if self.parallel {
                use rayon::prelude::*;
                return ids
                    .par_iter()
                    .map(|&id| self.encode_one(id, lookup))
                    .collect();
            }
        }

        ids.iter().map(|&id| self.encode_one(id, lookup)).collect()
    }

    /// Assemble the auxiliary batch for `ids`.
    ///
    /// ## Arguments
    /// * `ids` - the example ids, in primary batch order.
    /// * `lookup` - the per-example text and language.
    ///
    /// ## Returns
    /// The batch; [`S2tgtError::EmptyBatch`] for no ids, or the first
    /// encoding error of any example.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, lookup)))]
    pub fn assemble<L>(
        &self,
        ids: &[usize],
        lookup: &L,
    ) -> S2tgtResult<AuxiliaryBatch<T>>
    where
        L: TranscriptLookup + ?Sized,
    {
        if ids.is_empty() {
            return Err(S2tgtError::EmptyBatch);
        }

        let targets = self.encode_targets(ids, lookup)?;
        let batch = self.collate(&targets)?;

        log::debug!(
            "assembled auxiliary batch: {} examples, {} tokens, width {}",
            batch.nsentences(),
            batch.ntokens,
            batch.target.cols()
        );
        Ok(batch)
    }

    /// Collate already-encoded auxiliary targets.
    pub fn collate(
        &self,
        targets: &[EncodedTarget<T>],
    ) -> S2tgtResult<AuxiliaryBatch<T>> {
        let target = collate_tokens(targets, &CollateOptions::new(self.encoder.vocab().pad()))?;

        let prev_output_tokens = collate_tokens(
            targets,
            &CollateOptions::new(self.primary.pad())
                .with_eos(self.primary.eos())
                .with_move_eos_to_beginning(true),
        )?;

        let target_lengths: Vec<usize> = targets.iter().map(|t| t.len()).collect();
        let ntokens = target_lengths.iter().sum();

        Ok(AuxiliaryBatch {
            target,
            prev_output_tokens,
            target_lengths,
            ntokens,
        })
    }
}
