//! Log scanning error types.

use thiserror::Error;

/// Errors that can occur while reading a log for scanning.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("log is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("source not found: {0}")]
    NotFound(String),
}

/// Convenience alias for log scanning results.
pub type LogResult<T> = Result<T, LogError>;
