//! Shared test harness for E2E integration tests.
//!
//! Lays out a dictionary and a log in a temporary directory and drives the
//! analyzer through its library entry point with a recording sink.

#![allow(dead_code)]

use std::path::PathBuf;

use mw_analyzer::config::AnalyzerConfig;
use mw_analyzer::{Outcome, run};
use mw_log_scan::{MemorySink, ScanReport};
use tempfile::TempDir;

/// Temporary workspace holding a fault dictionary and a mower log.
pub struct TestHarness {
    pub dir: TempDir,
    pub config: AnalyzerConfig,
    pub log_path: PathBuf,
}

impl TestHarness {
    /// Harness with no dictionary file and an empty log.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalyzerConfig {
            dictionary_path: dir.path().join("fault_code.json"),
            ..AnalyzerConfig::default()
        };
        let log_path = dir.path().join("mower.log");
        std::fs::write(&log_path, "").unwrap();
        Self {
            dir,
            config,
            log_path,
        }
    }

    /// Harness with the given dictionary JSON and log lines.
    pub fn new(dictionary_json: &str, log_lines: &[&str]) -> Self {
        let h = Self::empty();
        h.write_dictionary(dictionary_json);
        h.write_log(log_lines);
        h
    }

    pub fn write_dictionary(&self, json: &str) {
        std::fs::write(&self.config.dictionary_path, json).unwrap();
    }

    pub fn write_log(&self, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(&self.log_path, content).unwrap();
    }

    /// Run the analyzer, returning the outcome and everything it reported.
    pub fn analyze(&self) -> (anyhow::Result<Outcome>, MemorySink) {
        let mut sink = MemorySink::new();
        let outcome = run(&self.log_path, &self.config, &mut sink);
        (outcome, sink)
    }

    /// Run the analyzer and expect a completed scan.
    pub fn scan(&self) -> (ScanReport, MemorySink) {
        let (outcome, sink) = self.analyze();
        match outcome.unwrap() {
            Outcome::Completed(report) => (report, sink),
            Outcome::DictionaryMissing(path) => panic!("dictionary missing: {}", path.display()),
        }
    }
}
