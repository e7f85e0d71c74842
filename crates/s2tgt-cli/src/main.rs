mod commands;
mod dictionary_args;
mod logging;
mod streams;
mod target_args;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// s2tgt-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    logging: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.init()?;

    args.command.run()
}
