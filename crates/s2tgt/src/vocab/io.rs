//! # Dictionary IO
//!
//! Reads and writes the plain-text dictionary format:
//! one ``<symbol> <count>`` pair per line, in token order,
//! with an optional trailing ``#fairseq:overwrite`` flag.
//!
//! Special symbols are not stored in the file; they are
//! supplied by the [`SpecialSymbols`] of the loading dictionary.
//! Tokens are positional, so only dictionaries laid out the way a
//! load lays them out (specials at ``0..4``, then dense symbols)
//! can be saved.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{S2tgtError, S2tgtResult},
    types::{S2HashSet, TokenType, token_to_usize},
    vocab::{Dictionary, SpecialSymbols},
};

/// Flag marking a line whose symbol may shadow an earlier entry.
pub const OVERWRITE_FLAG: &str = "#fairseq:overwrite";

/// Load a [`Dictionary`] from a dictionary file.
///
/// ## Arguments
/// * `path` - the path to the dictionary file.
/// * `specials` - the special symbols to seed the dictionary with.
pub fn load_dictionary_path<T, P>(
    path: P,
    specials: &SpecialSymbols,
) -> S2tgtResult<Dictionary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let dict = read_dictionary(reader, specials)?;
    log::info!("Loaded dictionary {:?} with {} symbols", path, dict.len());
    Ok(dict)
}

/// Read a [`Dictionary`] from a [`BufRead`] stream.
pub fn read_dictionary<T, R>(
    reader: R,
    specials: &SpecialSymbols,
) -> S2tgtResult<Dictionary<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut dict = Dictionary::with_specials(specials)?;
    extend_dictionary(&mut dict, reader)?;
    Ok(dict)
}

/// Append the entries of a dictionary stream to `dict`.
pub fn extend_dictionary<T, R>(
    dict: &mut Dictionary<T>,
    reader: R,
) -> S2tgtResult<()>
where
    T: TokenType,
    R: BufRead,
{
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let (rest, overwrite) = match line.strip_suffix(OVERWRITE_FLAG) {
            Some(rest) => (rest.trim_end(), true),
            None => (line, false),
        };

        let (symbol, count) = rest.rsplit_once(' ').ok_or_else(|| {
            S2tgtError::Parse(format!(
                "line {}: expected \"<symbol> <count>\", found {:?}",
                lineno + 1,
                line
            ))
        })?;
        let count: u64 = count
            .parse()
            .map_err(|e| S2tgtError::Parse(format!("line {}: bad count: {e}", lineno + 1)))?;

        if dict.contains(symbol) && !overwrite {
            return Err(S2tgtError::DuplicateSymbol {
                symbol: symbol.to_string(),
            });
        }
        dict.add_symbol(symbol, count, overwrite)?;
    }
    Ok(())
}

/// Save a [`Dictionary`] to a dictionary file.
pub fn save_dictionary_path<T: TokenType, P: AsRef<Path>>(
    dict: &Dictionary<T>,
    path: P,
) -> S2tgtResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_dictionary(dict, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// The number of special tokens a load seeds before the first file symbol.
const SPECIAL_COUNT: usize = 4;

fn check_file_layout<T: TokenType>(dict: &Dictionary<T>) -> S2tgtResult<()> {
    let specials = [dict.bos(), Some(dict.pad()), Some(dict.eos()), dict.unk()];
    for (expected, token) in specials.into_iter().enumerate() {
        match token.map(token_to_usize).transpose()? {
            Some(found) if found == expected => {}
            found => {
                return Err(S2tgtError::UnsaveableLayout(format!(
                    "special {expected} is at {found:?}"
                )));
            }
        }
    }

    for (expected, (token, _, _)) in dict.counted_entries().enumerate() {
        let found = token_to_usize(token)?;
        if found != expected {
            return Err(S2tgtError::UnsaveableLayout(format!(
                "token {expected} is missing, next is {found}"
            )));
        }
    }
    Ok(())
}

/// Save a [`Dictionary`] to a [`Write`] writer.
///
/// Special symbols are skipped. A symbol that repeats an earlier one
/// (because it was re-added with `overwrite`) is written with
/// [`OVERWRITE_FLAG`], so the output reads back to an equal dictionary.
///
/// ## Returns
/// [`S2tgtError::UnsaveableLayout`] if the specials are not at ``0..4``
/// or the tokens are not dense; nothing is written in that case.
pub fn write_dictionary<T, W>(
    dict: &Dictionary<T>,
    writer: &mut W,
) -> S2tgtResult<()>
where
    T: TokenType,
    W: Write,
{
    check_file_layout(dict)?;

    let mut seen: S2HashSet<&str> = Default::default();
    for (idx, (_, symbol, count)) in dict.counted_entries().enumerate() {
        let repeated = !seen.insert(symbol);
        if idx < SPECIAL_COUNT {
            continue;
        }
        if repeated {
            writeln!(writer, "{symbol} {count} {OVERWRITE_FLAG}")?;
        } else {
            writeln!(writer, "{symbol} {count}")?;
        }
    }
    Ok(())
}
