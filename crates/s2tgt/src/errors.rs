//! # Error Types

/// Errors from s2tgt operations.
#[derive(Debug, thiserror::Error)]
pub enum S2tgtError {
    /// A token (or formatted language tag) is not present in the vocabulary.
    ///
    /// Unknown tokens are never added on the fly; the example must be rejected.
    #[error("unknown token: {token:?}")]
    UnknownToken {
        /// The token which failed lookup.
        token: String,
    },

    /// A batch was requested for zero examples.
    #[error("cannot assemble a batch from zero examples")]
    EmptyBatch,

    /// An example id has no transcript entry.
    #[error("no transcript for example {id}")]
    MissingExample {
        /// The example id.
        id: usize,
    },

    /// A language tag template is malformed.
    #[error("invalid language tag template: {0}")]
    InvalidTemplate(String),

    /// A symbol was registered twice.
    #[error("duplicate symbol: {symbol:?}")]
    DuplicateSymbol {
        /// The duplicated symbol.
        symbol: String,
    },

    /// A dictionary's token layout cannot be written as a dictionary file.
    #[error("unsaveable dictionary layout: {0}")]
    UnsaveableLayout(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (dictionary lines, configuration, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for S2tgtError {
    fn from(err: serde_json::Error) -> Self {
        S2tgtError::Parse(err.to_string())
    }
}

/// Result type for s2tgt operations.
pub type S2tgtResult<T> = core::result::Result<T, S2tgtError>;
