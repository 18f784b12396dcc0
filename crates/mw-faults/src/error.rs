//! Fault dictionary error types.

use thiserror::Error;

/// Errors that can occur while loading the fault dictionary.
#[derive(Debug, Error)]
pub enum FaultError {
    #[error("fault dictionary not found: {0}")]
    DictionaryNotFound(String),

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed fault dictionary: {0}")]
    Malformed(String),
}

/// Convenience alias for fault dictionary results.
pub type FaultResult<T> = Result<T, FaultError>;
