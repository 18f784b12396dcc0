//! Mower log analyzer — library crate behind the `mw-analyzer` binary.
//!
//! Exposes the CLI definition, configuration, console sink and the `run`
//! entry point so integration tests (`mw-e2e-tests`) can drive a full
//! analysis without spawning the binary.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod console;

pub use analysis::{Outcome, run, run_with_source};
