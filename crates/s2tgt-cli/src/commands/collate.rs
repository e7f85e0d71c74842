use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use s2tgt::{
    AuxiliaryBatchAssembler,
    TargetEncoder,
    targets::{TranscriptRecord, TranscriptTable},
    vocab::io::load_dictionary_path,
};

use crate::{
    dictionary_args::DictionaryArgs,
    streams::{InputArgs, OutputArgs, write_token_block, write_token_line},
    target_args::TargetArgs,
};

/// Args for the collate command.
#[derive(clap::Args, Debug)]
pub struct CollateArgs {
    // The auxiliary dictionary.
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Primary dictionary, supplying the decoder input pad and eos.
    ///
    /// Defaults to the auxiliary dictionary.
    #[arg(long, default_value = None)]
    primary_dict: Option<String>,

    #[command(flatten)]
    target: TargetArgs,

    /// Language code of every input line.
    #[arg(long, default_value = "")]
    lang: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CollateArgs {
    /// Run the collate command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let aux = self.dictionary.load_dictionary()?;
        let primary = match &self.primary_dict {
            Some(path) => Arc::new(load_dictionary_path::<u32, _>(
                path,
                &self.dictionary.specials(),
            )?),
            None => aux.clone(),
        };

        let options = self.target.options()?;
        let encoder = TargetEncoder::from_options(aux, self.target.transform()?, &options);
        let assembler = AuxiliaryBatchAssembler::from_options(encoder, primary, &options);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_collate(&mut reader, &mut writer, &assembler, &self.lang)
    }
}

/// Assemble every input line into one batch and write its four blocks.
fn run_collate(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    assembler: &AuxiliaryBatchAssembler<u32>,
    lang: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = reader
        .lines()
        .map(|line| Ok(TranscriptRecord::new(line?, lang)))
        .collect::<std::io::Result<TranscriptTable>>()?;
    let ids: Vec<usize> = (0..table.len()).collect();

    let batch = assembler.assemble(&ids, &table)?;
    log::info!(
        "collated {} examples, {} tokens",
        batch.nsentences(),
        batch.ntokens
    );

    writeln!(writer, "# target")?;
    write_token_block(writer, &batch.target)?;
    writeln!(writer, "# prev_output_tokens")?;
    write_token_block(writer, &batch.prev_output_tokens)?;
    writeln!(writer, "# target_lengths")?;
    write_token_line(writer, batch.target_lengths.as_slice())?;
    writeln!(writer, "# ntokens")?;
    writeln!(writer, "{}", batch.ntokens)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use s2tgt::{Dictionary, text::WhitespaceNormalizer};

    use super::*;

    #[test]
    fn test_run_collate() {
        let aux: Arc<Dictionary<u32>> = Dictionary::from_entries(
            [("<pad>", 0), ("</s>", 2), ("hello", 5), ("world", 6), ("bye", 7)],
            "<pad>",
            "</s>",
        )
        .unwrap()
        .into();
        let primary: Arc<Dictionary<u32>> =
            Dictionary::from_entries([("<pad>", 1), ("</s>", 3)], "<pad>", "</s>")
                .unwrap()
                .into();
        let encoder = TargetEncoder::new(aux, Arc::new(WhitespaceNormalizer));
        let assembler = AuxiliaryBatchAssembler::new(encoder, primary);

        let mut reader: &[u8] = b"hello world\nbye\n";
        let mut out: Vec<u8> = Vec::new();
        run_collate(&mut reader, &mut out, &assembler, "").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# target\n5 6 2\n7 2 0\n\
             # prev_output_tokens\n3 5 6\n3 7 1\n\
             # target_lengths\n3 2\n\
             # ntokens\n5\n"
        );

        let mut reader: &[u8] = b"";
        let mut out: Vec<u8> = Vec::new();
        assert!(run_collate(&mut reader, &mut out, &assembler, "").is_err());
    }
}
