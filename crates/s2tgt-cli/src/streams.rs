//! Input/output stream selection and the token-line text format.
//!
//! Token lines are space-separated decimal ids, one sequence per line.

use std::{
    convert::Infallible,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
};

use s2tgt::targets::PaddedTokens;

/// A file path, or the standard stream when given as `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamPath {
    /// stdin or stdout.
    Std,

    /// A file.
    File(PathBuf),
}

impl FromStr for StreamPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => StreamPath::Std,
            path => StreamPath::File(path.into()),
        })
    }
}

/// Input arg group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; "-" reads stdin.
    #[arg(long, default_value = "-")]
    input: StreamPath,
}

impl InputArgs {
    /// Open a line reader on the input.
    pub fn open_reader(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match &self.input {
            StreamPath::Std => Box::new(BufReader::new(io::stdin().lock())),
            StreamPath::File(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Output arg group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file; "-" writes stdout.
    #[arg(long, default_value = "-")]
    output: StreamPath,
}

impl OutputArgs {
    /// Open a buffered writer on the output.
    pub fn open_writer(&self) -> io::Result<Box<dyn Write>> {
        Ok(match &self.output {
            StreamPath::Std => Box::new(BufWriter::new(io::stdout().lock())),
            StreamPath::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}

/// Parse one token line.
pub fn parse_token_line(line: &str) -> Result<Vec<u32>, ParseIntError> {
    line.split_whitespace().map(str::parse).collect()
}

/// Write one token line.
pub fn write_token_line<D: Display>(
    writer: &mut dyn Write,
    items: &[D],
) -> io::Result<()> {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{item}")?;
    }
    writeln!(writer)
}

/// Write a padded block as one token line per row.
pub fn write_token_block(
    writer: &mut dyn Write,
    block: &PaddedTokens<u32>,
) -> io::Result<()> {
    for row in block.iter_rows() {
        write_token_line(writer, row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Streams {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    }

    #[test]
    fn test_stream_paths() {
        let args = Streams::try_parse_from(["s2tgt-cli"]).unwrap();
        assert_eq!(args.input.input, StreamPath::Std);
        assert_eq!(args.output.output, StreamPath::Std);

        let args =
            Streams::try_parse_from(["s2tgt-cli", "--input", "a.txt", "--output", "-"]).unwrap();
        assert_eq!(args.input.input, StreamPath::File("a.txt".into()));
        assert_eq!(args.output.output, StreamPath::Std);
    }

    #[test]
    fn test_token_lines() {
        let mut buf: Vec<u8> = Vec::new();
        write_token_line(&mut buf, &[5u32, 6, 2]).unwrap();
        write_token_line::<u32>(&mut buf, &[]).unwrap();
        write_token_line(&mut buf, &[usize::MAX]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("5 6 2\n\n{}\n", usize::MAX));

        assert_eq!(parse_token_line(" 5 6\t2 ").unwrap(), vec![5, 6, 2]);
        assert_eq!(parse_token_line("").unwrap(), Vec::<u32>::new());
        assert!(parse_token_line("5 x").is_err());
    }
}
