//! Mower log analyzer — scan an operation log for work cycles and faults.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mw_analyzer::cli::Cli;
use mw_analyzer::config::AnalyzerConfig;
use mw_analyzer::console::ConsoleSink;
use mw_analyzer::{Outcome, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ── Load config ─────────────────────────────────────────────
    let config = match &cli.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %cli.log_file.display(),
        dictionary = %config.dictionary_path.display(),
        "mw-analyzer starting"
    );

    // ── Scan ────────────────────────────────────────────────────
    let stdout = std::io::stdout();
    let colored = stdout.is_terminal();
    let mut sink = ConsoleSink::new(stdout.lock(), colored);

    match run(&cli.log_file, &config, &mut sink)? {
        Outcome::Completed(report) => {
            let summary = report.summary();
            tracing::info!(
                total = summary.total,
                matched = summary.matched,
                unmatched = summary.unmatched,
                "analysis finished"
            );
        }
        Outcome::DictionaryMissing(path) => {
            tracing::info!(path = %path.display(), "nothing scanned");
        }
    }

    Ok(())
}
