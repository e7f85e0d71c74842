mod collate;
mod decode;
mod encode;

/// Subcommands for s2tgt-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text lines into target token lines.
    Encode(encode::EncodeArgs),

    /// Decode target token lines back into symbols.
    Decode(decode::DecodeArgs),

    /// Assemble text lines into one auxiliary batch.
    Collate(collate::CollateArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Collate(cmd) => cmd.run(),
        }
    }
}
