//! Fault occurrences extracted from a log.

use std::fmt;

/// One fault-code occurrence found in a log line.
///
/// Equality compares the whole record (line text, code and description),
/// which is what the report uses to tell matched from unmatched faults.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaultEntry {
    /// The log line the code was found on, trimmed.
    pub line: String,
    /// Normalized fault code.
    pub code: String,
    /// Dictionary description, or the unknown-fault sentinel.
    pub description: String,
}

impl FaultEntry {
    pub fn new(
        line: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            code: code.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for FaultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.line, self.description)
    }
}
