//! End-to-end analysis: load the dictionary, then scan the log.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};

use mw_faults::{FaultDictionary, FaultError};
use mw_log_scan::{Emphasis, FileLogSource, LogScanner, LogSource, ReportSink, ScanReport};

use crate::config::AnalyzerConfig;

/// How an analysis run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The log was scanned and tallied.
    Completed(ScanReport),
    /// No dictionary file; the log was left untouched.
    DictionaryMissing(PathBuf),
}

/// Analyze `log_file` from the filesystem.
pub fn run(
    log_file: &Path,
    config: &AnalyzerConfig,
    sink: &mut dyn ReportSink,
) -> anyhow::Result<Outcome> {
    run_with_source(&FileLogSource, log_file, config, sink)
}

/// Analyze `log_file` read through `source`.
///
/// A missing dictionary is reported to the sink and is not an error.
/// A malformed dictionary, an unreadable log, or a sink that could not
/// write its output is.
pub fn run_with_source(
    source: &dyn LogSource,
    log_file: &Path,
    config: &AnalyzerConfig,
    sink: &mut dyn ReportSink,
) -> anyhow::Result<Outcome> {
    let dictionary_path = &config.dictionary_path;
    let dictionary = match FaultDictionary::load(dictionary_path) {
        Ok(dictionary) => dictionary,
        Err(FaultError::DictionaryNotFound(_)) => {
            tracing::warn!(path = %dictionary_path.display(), "fault dictionary missing, skipping scan");
            sink.emit(
                &format!("Fault dictionary not found: {}", dictionary_path.display()),
                Emphasis::Notice,
            );
            sink.finish().context("writing report")?;
            return Ok(Outcome::DictionaryMissing(dictionary_path.clone()));
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("loading fault dictionary {}", dictionary_path.display())
            });
        }
    };
    tracing::info!(codes = dictionary.len(), "fault dictionary ready");

    let path = log_file
        .to_str()
        .ok_or_else(|| anyhow!("log path is not valid UTF-8: {}", log_file.display()))?;
    let scanner = LogScanner::new(config.markers.clone(), &dictionary);
    let report = scanner
        .scan_source(source, path, sink)
        .with_context(|| format!("scanning {path}"))?;
    sink.finish().context("writing report")?;
    Ok(Outcome::Completed(report))
}
