//! Test doubles — an in-memory log source and a recording sink.

use std::collections::HashMap;

use crate::error::{LogError, LogResult};
use crate::sink::{Emphasis, ReportSink};
use crate::source::LogSource;

/// A mock log source that serves pre-loaded content by path.
pub struct MockLogSource {
    files: HashMap<String, Vec<String>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given lines.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Create a mock with a sample mower log at `/logs/mower.log`.
    ///
    /// Three cycles: one clean, one manually stopped, one that fails with
    /// two fault codes behind it. One further fault is logged mid-cycle.
    pub fn with_mower_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/logs/mower.log",
            vec![
                "2024-05-02 08:00:01 [ctl] boot complete fw=3.2.1".into(),
                "2024-05-02 08:00:05 [ctl] KEY_START_OK zone=front".into(),
                "2024-05-02 08:20:11 [drv] primary error [0x0012] retrying".into(),
                "2024-05-02 08:41:37 [ctl] MANUAL_WORK_SUCCESS area=212m2".into(),
                "2024-05-02 09:00:00 [ctl] KEY_START_OK zone=back".into(),
                "2024-05-02 09:05:42 [ctl] EXCEPTION_EXIT_MOW_SUCCESS".into(),
                "2024-05-02 10:00:00 [ctl] KEY_START_OK zone=side".into(),
                "2024-05-02 10:03:12 [ctl] MANUAL_WORK_FAIL".into(),
                "2024-05-02 10:03:12 [bms] primary error [0x34]".into(),
                "2024-05-02 10:03:13 [drv] primary error [0x7f]".into(),
                "2024-05-02 10:10:00 [ctl] docked".into(),
            ],
        );
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for MockLogSource {
    fn read_lines(&self, path: &str) -> LogResult<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| LogError::NotFound(path.to_string()))
    }
}

/// A sink that records everything it receives.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<(String, Emphasis)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[(String, Emphasis)] {
        &self.records
    }

    /// Texts emitted with the given emphasis, in order.
    pub fn texts_with(&self, emphasis: Emphasis) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(_, e)| *e == emphasis)
            .map(|(t, _)| t.as_str())
            .collect()
    }

    /// Whether any emitted text contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.records.iter().any(|(t, _)| t.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ReportSink for MemorySink {
    fn emit(&mut self, text: &str, emphasis: Emphasis) {
        self.records.push((text.to_string(), emphasis));
    }
}
