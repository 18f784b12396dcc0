//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "mw-analyzer")]
#[command(version, about = "Scan a mower operation log for work cycles and fault codes", long_about = None)]
pub struct Cli {
    /// Path to the mower log file
    pub log_file: PathBuf,

    /// Optional TOML config (dictionary path, marker tokens)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_log_file() {
        let cli = Cli::try_parse_from(["mw-analyzer", "mower.log"]).unwrap();
        assert_eq!(cli.log_file, PathBuf::from("mower.log"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_flag() {
        let cli =
            Cli::try_parse_from(["mw-analyzer", "--config", "mw.toml", "mower.log"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("mw.toml")));
    }

    #[test]
    fn log_file_is_required() {
        assert!(Cli::try_parse_from(["mw-analyzer"]).is_err());
    }
}
