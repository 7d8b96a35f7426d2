//! Error handling module for the yast CLI.
//!
//! Every command returns [`Result`]; `main` prints the error and exits with a
//! failure status.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the yast CLI application.
#[derive(Error, Debug)]
pub enum YastError {
    /// Error when the configuration cannot be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad arguments, missing inputs or files that failed a check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A source file violated the lexical grammar.
    ///
    /// `rendered` is the full diagnostic with its source snippet.
    #[error("{rendered}")]
    Lex {
        /// File that failed to tokenize.
        path: PathBuf,
        /// Diagnostic text.
        rendered: String,
    },

    /// Reading a source or config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using YastError.
pub type Result<T> = std::result::Result<T, YastError>;
