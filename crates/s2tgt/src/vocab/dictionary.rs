//! # Symbol Dictionary

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{S2tgtError, S2tgtResult},
    types::{S2HashMap, TokenType, hash_map_new, token_to_usize, try_token_from_usize},
};

/// The names of the special symbols of a [`Dictionary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialSymbols {
    /// Beginning-of-sentence symbol.
    pub bos: String,

    /// Padding symbol.
    pub pad: String,

    /// End-of-sentence symbol.
    pub eos: String,

    /// Unknown-word symbol.
    pub unk: String,
}

impl SpecialSymbols {
    /// The names in token order: ``bos, pad, eos, unk``.
    pub fn names(&self) -> [&str; 4] {
        [
            self.bos.as_str(),
            self.pad.as_str(),
            self.eos.as_str(),
            self.unk.as_str(),
        ]
    }

    /// Fail with [`S2tgtError::DuplicateSymbol`] if two names coincide.
    pub fn check_distinct(&self) -> S2tgtResult<()> {
        let names = self.names();
        for (idx, name) in names.iter().enumerate() {
            if names[..idx].contains(name) {
                return Err(S2tgtError::DuplicateSymbol {
                    symbol: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for SpecialSymbols {
    fn default() -> Self {
        Self {
            bos: "<s>".to_string(),
            pad: "<pad>".to_string(),
            eos: "</s>".to_string(),
            unk: "<unk>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    symbol: String,
    count: u64,
}

/// A bidirectional `{ symbol <-> token }` mapping.
///
/// Lookups never add symbols; an absent symbol is an
/// [`S2tgtError::UnknownToken`]. Mutation is confined to construction,
/// after which a dictionary is usually shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary<T: TokenType> {
    entries: BTreeMap<T, Entry>,
    indices: S2HashMap<String, T>,

    pad: T,
    eos: T,
    bos: Option<T>,
    unk: Option<T>,
}

impl<T: TokenType> Default for Dictionary<T> {
    fn default() -> Self {
        Self::seeded(&SpecialSymbols::default())
    }
}

impl<T: TokenType> Dictionary<T> {
    /// Create a dictionary holding only the special symbols.
    ///
    /// The layout is ``bos=0, pad=1, eos=2, unk=3``.
    ///
    /// ## Returns
    /// The dictionary, or [`S2tgtError::DuplicateSymbol`] if two special names coincide.
    pub fn with_specials(specials: &SpecialSymbols) -> S2tgtResult<Self> {
        specials.check_distinct()?;
        Ok(Self::seeded(specials))
    }

    fn seeded(specials: &SpecialSymbols) -> Self {
        let mut entries = BTreeMap::new();
        let mut indices = hash_map_new();
        for (idx, name) in specials.names().into_iter().enumerate() {
            let token = T::from_usize(idx).unwrap_or_else(T::zero);
            entries.insert(
                token,
                Entry {
                    symbol: name.to_string(),
                    count: 1,
                },
            );
            indices.insert(name.to_string(), token);
        }

        Self {
            entries,
            indices,
            bos: T::from_usize(0),
            pad: T::from_usize(1).unwrap_or_else(T::zero),
            eos: T::from_usize(2).unwrap_or_else(T::zero),
            unk: T::from_usize(3),
        }
    }

    /// Build a dictionary from explicit ``(symbol, token)`` pairs.
    ///
    /// ## Arguments
    /// * `entries` - the symbol/token pairs.
    /// * `pad` - the padding symbol; must be among `entries`.
    /// * `eos` - the end-of-sentence symbol; must be among `entries`.
    pub fn from_entries<I, S>(
        entries: I,
        pad: &str,
        eos: &str,
    ) -> S2tgtResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut dict = Self {
            entries: BTreeMap::new(),
            indices: hash_map_new(),
            pad: T::zero(),
            eos: T::zero(),
            bos: None,
            unk: None,
        };
        for (symbol, token) in entries {
            dict.insert_symbol(symbol.as_ref(), token)?;
        }
        dict.pad = dict.index(pad)?;
        dict.eos = dict.index(eos)?;
        Ok(dict)
    }

    /// The number of symbols, specials included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The padding token.
    pub fn pad(&self) -> T {
        self.pad
    }

    /// The end-of-sentence token.
    pub fn eos(&self) -> T {
        self.eos
    }

    /// The beginning-of-sentence token, if any.
    pub fn bos(&self) -> Option<T> {
        self.bos
    }

    /// The unknown-word token, if any.
    pub fn unk(&self) -> Option<T> {
        self.unk
    }

    /// Is `token` one of the special tokens?
    pub fn is_special(
        &self,
        token: T,
    ) -> bool {
        token == self.pad || token == self.eos || Some(token) == self.bos || Some(token) == self.unk
    }

    /// Does the dictionary contain `symbol`?
    pub fn contains(
        &self,
        symbol: &str,
    ) -> bool {
        self.indices.contains_key(symbol)
    }

    /// Look up the token for a symbol, if present.
    pub fn get(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.indices.get(symbol).copied()
    }

    /// Look up the token for a symbol.
    ///
    /// ## Returns
    /// The token, or [`S2tgtError::UnknownToken`] if the symbol was never registered.
    pub fn index(
        &self,
        symbol: &str,
    ) -> S2tgtResult<T> {
        self.get(symbol).ok_or_else(|| S2tgtError::UnknownToken {
            token: symbol.to_string(),
        })
    }

    /// Look up the symbol for a token.
    pub fn symbol(
        &self,
        token: T,
    ) -> Option<&str> {
        self.entries.get(&token).map(|e| e.symbol.as_str())
    }

    /// The recorded frequency count for a token.
    pub fn count(
        &self,
        token: T,
    ) -> Option<u64> {
        self.entries.get(&token).map(|e| e.count)
    }

    /// The next unassigned token; one past the largest token.
    pub fn next_token(&self) -> S2tgtResult<T> {
        match self.entries.keys().next_back() {
            None => Ok(T::zero()),
            Some(max) => max.checked_add(&T::one()).ok_or(S2tgtError::TokenOutOfRange),
        }
    }

    /// Iterate over ``(token, symbol)`` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.entries.iter().map(|(t, e)| (*t, e.symbol.as_str()))
    }

    /// Insert a symbol with an explicit token.
    ///
    /// Fails with [`S2tgtError::DuplicateSymbol`] if either the symbol
    /// or the token is already taken.
    pub fn insert_symbol(
        &mut self,
        symbol: &str,
        token: T,
    ) -> S2tgtResult<()> {
        if self.indices.contains_key(symbol) || self.entries.contains_key(&token) {
            return Err(S2tgtError::DuplicateSymbol {
                symbol: symbol.to_string(),
            });
        }
        self.entries.insert(
            token,
            Entry {
                symbol: symbol.to_string(),
                count: 0,
            },
        );
        self.indices.insert(symbol.to_string(), token);
        Ok(())
    }

    /// Add a symbol, assigning the next free token.
    ///
    /// An existing symbol keeps its token and has its count bumped by `count`;
    /// unless `overwrite` is set, in which case the symbol is re-pointed at a new token.
    pub fn add_symbol(
        &mut self,
        symbol: &str,
        count: u64,
        overwrite: bool,
    ) -> S2tgtResult<T> {
        if !overwrite && let Some(token) = self.get(symbol) {
            if let Some(entry) = self.entries.get_mut(&token) {
                entry.count += count;
            }
            return Ok(token);
        }

        let token = self.next_token()?;
        self.entries.insert(
            token,
            Entry {
                symbol: symbol.to_string(),
                count,
            },
        );
        self.indices.insert(symbol.to_string(), token);
        Ok(token)
    }

    /// Encode a whitespace-separated line of symbols.
    ///
    /// ## Arguments
    /// * `line` - the pre-tokenized line.
    /// * `append_eos` - append [`Self::eos`] after the last symbol.
    ///
    /// ## Returns
    /// The tokens; or [`S2tgtError::UnknownToken`] for the first absent symbol.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, line)))]
    pub fn encode_line(
        &self,
        line: &str,
        append_eos: bool,
    ) -> S2tgtResult<Vec<T>> {
        let mut tokens = line
            .split_whitespace()
            .map(|piece| self.index(piece))
            .collect::<S2tgtResult<Vec<T>>>()?;
        if append_eos {
            tokens.push(self.eos);
        }
        Ok(tokens)
    }

    /// Decode tokens back to a space-joined line.
    ///
    /// Padding and end-of-sentence tokens are dropped.
    pub fn decode_line(
        &self,
        tokens: &[T],
    ) -> S2tgtResult<String> {
        let symbols = tokens
            .iter()
            .filter(|&&t| t != self.pad && t != self.eos)
            .map(|&t| {
                self.symbol(t).ok_or_else(|| S2tgtError::UnknownToken {
                    token: t.to_string(),
                })
            })
            .collect::<S2tgtResult<Vec<&str>>>()?;
        Ok(symbols.join(" "))
    }

    /// Convert to a different token type.
    pub fn to_token_type<G: TokenType>(&self) -> S2tgtResult<Dictionary<G>> {
        let convert = |t: T| -> S2tgtResult<G> { try_token_from_usize(token_to_usize(t)?) };
        let entries = self
            .entries
            .iter()
            .map(|(t, e)| Ok((convert(*t)?, e.clone())))
            .collect::<S2tgtResult<BTreeMap<G, Entry>>>()?;
        let indices = self
            .indices
            .iter()
            .map(|(s, t)| Ok((s.clone(), convert(*t)?)))
            .collect::<S2tgtResult<S2HashMap<String, G>>>()?;

        Ok(Dictionary {
            entries,
            indices,
            pad: convert(self.pad)?,
            eos: convert(self.eos)?,
            bos: self.bos.map(convert).transpose()?,
            unk: self.unk.map(convert).transpose()?,
        })
    }

    /// Iterate every ``(token, symbol, count)`` entry in token order.
    ///
    /// Includes specials and entries whose symbol was later re-pointed
    /// by an overwriting [`Self::add_symbol`].
    pub(crate) fn counted_entries(&self) -> impl Iterator<Item = (T, &str, u64)> {
        self.entries
            .iter()
            .map(|(t, e)| (*t, e.symbol.as_str(), e.count))
    }

    /// Build a dictionary with the default specials and a dense symbol list.
    pub fn from_symbols<I, S>(symbols: I) -> S2tgtResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            if dict.contains(symbol) {
                return Err(S2tgtError::DuplicateSymbol {
                    symbol: symbol.to_string(),
                });
            }
            dict.add_symbol(symbol, 1, false)?;
        }
        Ok(dict)
    }
}
