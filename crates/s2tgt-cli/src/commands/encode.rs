use std::io::{BufRead, Write};

use s2tgt::TargetEncoder;

use crate::{
    dictionary_args::DictionaryArgs,
    streams::{InputArgs, OutputArgs, write_token_line},
    target_args::TargetArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

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

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.dictionary.load_dictionary()?;
        let options = self.target.options()?;
        let encoder = TargetEncoder::from_options(vocab, self.target.transform()?, &options);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(&mut reader, &mut writer, &encoder, &self.lang)
    }
}

fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    encoder: &TargetEncoder<u32>,
    lang: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut count = 0;
    for line in reader.lines() {
        let target = encoder.encode(&line?, lang)?;
        write_token_line(writer, target.tokens())?;
        count += 1;
    }
    writer.flush()?;
    log::info!("encoded {count} lines");
    Ok(())
}
