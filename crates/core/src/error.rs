//! Error types for the subtok libraries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid configuration (target size, special tokens, config file content)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Token string that was never assigned an id
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Id that was never assigned to a token
    #[error("Unknown token ID: {0}")]
    UnknownId(u32),

    /// Training requested on a tokenizer that already holds merge rules
    #[error("Tokenizer has already been trained")]
    AlreadyTrained,

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Failure writing encoded output
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerError {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
