//! Log source abstraction — read log data from files or in-memory mocks.

use crate::error::{LogError, LogResult};

/// Abstraction for reading a whole log before scanning it.
pub trait LogSource {
    /// Read all lines from the given path/identifier.
    fn read_lines(&self, path: &str) -> LogResult<Vec<String>>;
}

/// Reads logs from the local filesystem.
pub struct FileLogSource;

impl LogSource for FileLogSource {
    fn read_lines(&self, path: &str) -> LogResult<Vec<String>> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogError::NotFound(path.to_string())
            } else {
                LogError::Io(format!("{path}: {e}"))
            }
        })?;
        let content =
            String::from_utf8(bytes).map_err(|e| LogError::Encoding(format!("{path}: {e}")))?;
        Ok(content.lines().map(String::from).collect())
    }
}
