//! Analyzer configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use mw_faults::DEFAULT_DICTIONARY_FILE;
use mw_log_scan::MarkerSet;

/// Top-level configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Fault dictionary JSON, relative to the working directory.
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// Marker tokens for cycle transitions.
    #[serde(default)]
    pub markers: MarkerSet,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY_FILE)
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            markers: MarkerSet::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AnalyzerConfig = toml::from_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.dictionary_path, PathBuf::from("fault_code.json"));
        assert_eq!(config.markers.cycle_start, "KEY_START_OK");
    }

    #[test]
    fn partial_markers_keep_other_defaults() {
        let toml = r#"
dictionary_path = "/etc/mower/faults.json"

[markers]
work_fail = "WORK_ABORT"
"#;
        let config: AnalyzerConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.dictionary_path,
            PathBuf::from("/etc/mower/faults.json")
        );
        assert_eq!(config.markers.work_fail, "WORK_ABORT");
        assert_eq!(config.markers.manual_stop, "EXCEPTION_EXIT_MOW_SUCCESS");
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<AnalyzerConfig>("colour = true").is_err());
        assert!(toml::from_str::<AnalyzerConfig>("[markers]\nstart = \"X\"").is_err());
    }

    #[test]
    fn from_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = AnalyzerConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
