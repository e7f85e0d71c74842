#![allow(missing_docs)]

use std::sync::Arc;

use proptest::prelude::*;
use s2tgt::{
    targets::{AuxiliaryBatchAssembler, TargetEncoder, TranscriptRecord, TranscriptTable},
    text::IdentityTransform,
    vocab::{Dictionary, LangTagTemplate, register_lang_tags},
};

const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
const LANGS: &[&str] = &["de", "en", "ja"];

fn vocab() -> Arc<Dictionary<u32>> {
    let mut dict: Dictionary<u32> = Dictionary::from_symbols(WORDS).unwrap();
    register_lang_tags(&mut dict, &LangTagTemplate::default(), LANGS).unwrap();
    dict.into()
}

fn sentence() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
}

fn record() -> impl Strategy<Value = TranscriptRecord> {
    (sentence(), proptest::sample::select(LANGS))
        .prop_map(|(text, lang)| TranscriptRecord::new(text, lang))
}

proptest! {
    #[test]
    fn encoded_targets_end_in_eos(text in sentence(), lang in proptest::sample::select(LANGS)) {
        let vocab = vocab();
        let encoder = TargetEncoder::new(vocab.clone(), Arc::new(IdentityTransform));
        let target = encoder.encode(&text, lang).unwrap();

        prop_assert_eq!(target.last().copied(), Some(vocab.eos()));
        prop_assert_eq!(target.len(), text.split_whitespace().count() + 1);
    }

    #[test]
    fn tagged_is_tag_then_untagged(text in sentence(), lang in proptest::sample::select(LANGS)) {
        let vocab = vocab();
        let template = LangTagTemplate::default();
        let plain = TargetEncoder::new(vocab.clone(), Arc::new(IdentityTransform));
        let tagged = plain.clone().with_lang_tag(template.clone());

        let plain_target = plain.encode(&text, lang).unwrap();
        let tagged_target = tagged.encode(&text, lang).unwrap();

        prop_assert_eq!(tagged_target[0], vocab.index(&template.format(lang)).unwrap());
        prop_assert_eq!(&tagged_target[1..], plain_target.tokens());
        prop_assert_eq!(tagged_target.len(), plain_target.len() + 1);
    }

    #[test]
    fn body_round_trips(text in sentence(), lang in proptest::sample::select(LANGS)) {
        let vocab = vocab();
        let encoder = TargetEncoder::new(vocab.clone(), Arc::new(IdentityTransform))
            .with_lang_tag(LangTagTemplate::default());
        let target = encoder.encode(&text, lang).unwrap();

        prop_assert_eq!(target.body().to_vec(), vocab.encode_line(&text, false).unwrap());
        prop_assert_eq!(vocab.decode_line(target.body()).unwrap(), text);
    }

    #[test]
    fn batch_shapes_are_consistent(records in proptest::collection::vec(record(), 1..16)) {
        let vocab = vocab();
        let encoder = TargetEncoder::new(vocab.clone(), Arc::new(IdentityTransform));
        let assembler = AuxiliaryBatchAssembler::new(encoder, vocab.clone());

        let ids: Vec<usize> = (0..records.len()).rev().collect();
        let table: TranscriptTable = records.into_iter().collect();
        let batch = assembler.assemble(&ids, &table).unwrap();

        let max_len = batch.target_lengths.iter().copied().max().unwrap();
        prop_assert_eq!(batch.target.shape(), (ids.len(), max_len));
        prop_assert_eq!(batch.prev_output_tokens.shape(), (ids.len(), max_len));
        prop_assert_eq!(batch.target_lengths.iter().sum::<usize>(), batch.ntokens);
        for row in batch.prev_output_tokens.iter_rows() {
            prop_assert_eq!(row[0], vocab.eos());
        }
    }
}
