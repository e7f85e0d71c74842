//! Stderr logging flags, shared by every subcommand.

use stderrlog::{LogLevelNum, Timestamp};

/// Crates whose log records reach stderr.
const LOGGED_MODULES: [&str; 2] = ["s2tgt", "s2tgt_cli"];

/// Timestamp precision of log lines.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogTimestamp {
    /// No timestamps.
    #[default]
    Off,

    /// Whole seconds.
    Sec,

    /// Milliseconds.
    Ms,
}

impl From<LogTimestamp> for Timestamp {
    fn from(value: LogTimestamp) -> Self {
        match value {
            LogTimestamp::Off => Timestamp::Off,
            LogTimestamp::Sec => Timestamp::Second,
            LogTimestamp::Ms => Timestamp::Millisecond,
        }
    }
}

/// Logging arg group; global, so it may follow any subcommand.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log more; warnings are shown by default (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Timestamp log lines.
    #[arg(long, global = true, value_enum, default_value_t = LogTimestamp::Off)]
    log_timestamps: LogTimestamp,
}

impl LogArgs {
    /// The stderr log level.
    pub fn level(&self) -> LogLevelNum {
        match self.verbose {
            0 => LogLevelNum::Warn,
            1 => LogLevelNum::Info,
            2 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger for the s2tgt crates.
    pub fn init(&self) -> Result<(), log::SetLoggerError> {
        stderrlog::new()
            .modules(LOGGED_MODULES)
            .quiet(self.quiet)
            .verbosity(self.level())
            .timestamp(self.log_timestamps.into())
            .init()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Flags {
        #[command(flatten)]
        logging: LogArgs,
    }

    fn parse(args: &[&str]) -> LogArgs {
        Flags::try_parse_from(std::iter::once("s2tgt-cli").chain(args.iter().copied()))
            .unwrap()
            .logging
    }

    #[test]
    fn test_levels() {
        assert!(matches!(parse(&[]).level(), LogLevelNum::Warn));
        assert!(matches!(parse(&["-v"]).level(), LogLevelNum::Info));
        assert!(matches!(parse(&["-vv"]).level(), LogLevelNum::Debug));
        assert!(matches!(parse(&["-vvvv"]).level(), LogLevelNum::Trace));
        assert!(parse(&["--quiet"]).quiet);
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(parse(&[]).log_timestamps, LogTimestamp::Off);
        let args = parse(&["--log-timestamps", "ms"]);
        assert!(matches!(
            Timestamp::from(args.log_timestamps),
            Timestamp::Millisecond
        ));
        assert!(Flags::try_parse_from(["s2tgt-cli", "--log-timestamps", "hours"]).is_err());
    }
}
