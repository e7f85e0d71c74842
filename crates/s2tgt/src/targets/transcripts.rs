//! # Transcript Lookup
//!
//! Per-example text and language, resident in memory and addressed
//! by the example's dataset index.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{S2tgtError, S2tgtResult},
    types::S2HashMap,
};

/// The language used when an example does not name one.
pub const DEFAULT_LANG: &str = "";

/// Read access to per-example text and language.
pub trait TranscriptLookup: Send + Sync {
    /// The raw text of example `id`, if known.
    fn text(
        &self,
        id: usize,
    ) -> Option<&str>;

    /// The language code of example `id`, if known.
    fn lang(
        &self,
        id: usize,
    ) -> Option<&str>;
}

/// One example's text and language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// The raw text.
    pub text: String,

    /// The language code.
    #[serde(default)]
    pub lang: String,
}

impl TranscriptRecord {
    /// Create a new record.
    pub fn new(
        text: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
        }
    }
}

/// A dense, index-addressed table of transcripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptTable {
    texts: Vec<String>,
    langs: Vec<String>,
}

impl TranscriptTable {
    /// Build a table from parallel text and language columns.
    ///
    /// ## Arguments
    /// * `texts` - the per-example texts.
    /// * `langs` - the per-example languages; `None` uses [`DEFAULT_LANG`].
    pub fn from_columns(
        texts: Vec<String>,
        langs: Option<Vec<String>>,
    ) -> S2tgtResult<Self> {
        let langs = match langs {
            Some(langs) => {
                if langs.len() != texts.len() {
                    return Err(S2tgtError::Parse(format!(
                        "{} texts but {} languages",
                        texts.len(),
                        langs.len()
                    )));
                }
                langs
            }
            None => vec![DEFAULT_LANG.to_string(); texts.len()],
        };
        Ok(Self { texts, langs })
    }

    /// The number of examples.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Append an example, returning its id.
    pub fn push(
        &mut self,
        record: TranscriptRecord,
    ) -> usize {
        self.texts.push(record.text);
        self.langs.push(record.lang);
        self.texts.len() - 1
    }
}

impl FromIterator<TranscriptRecord> for TranscriptTable {
    fn from_iter<I: IntoIterator<Item = TranscriptRecord>>(iter: I) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.push(record);
        }
        table
    }
}

impl TranscriptLookup for TranscriptTable {
    fn text(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    fn lang(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.langs.get(id).map(String::as_str)
    }
}

impl TranscriptLookup for S2HashMap<usize, TranscriptRecord> {
    fn text(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.get(&id).map(|r| r.text.as_str())
    }

    fn lang(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.get(&id).map(|r| r.lang.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let table: TranscriptTable = [
            TranscriptRecord::new("hallo welt", "de"),
            TranscriptRecord::new("hello world", "en"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.text(1), Some("hello world"));
        assert_eq!(table.lang(0), Some("de"));
        assert_eq!(table.text(2), None);
    }

    #[test]
    fn test_from_columns() {
        let table =
            TranscriptTable::from_columns(vec!["a".to_string(), "b".to_string()], None).unwrap();
        assert_eq!(table.lang(1), Some(DEFAULT_LANG));

        assert!(TranscriptTable::from_columns(vec!["a".to_string()], Some(vec![])).is_err());
    }

    #[test]
    fn test_sparse_map() {
        let mut map: S2HashMap<usize, TranscriptRecord> = Default::default();
        map.insert(40, TranscriptRecord::new("x", "fr"));
        assert_eq!(map.text(40), Some("x"));
        assert_eq!(map.lang(40), Some("fr"));
        assert_eq!(map.text(0), None);
    }

    #[test]
    fn test_record_serde() {
        let record: TranscriptRecord = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(record, TranscriptRecord::new("hi", DEFAULT_LANG));
    }
}
