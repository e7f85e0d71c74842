use std::io::{BufRead, Write};

use s2tgt::Dictionary;

use crate::{
    dictionary_args::DictionaryArgs,
    streams::{InputArgs, OutputArgs, parse_token_line},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.dictionary.load_dictionary()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_decode(&mut reader, &mut writer, &vocab)
    }
}

fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    vocab: &Dictionary<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = parse_token_line(&line?)?;

        writeln!(writer, "{}", vocab.decode_line(&tokens)?)?;
    }
    writer.flush()?;
    Ok(())
}
