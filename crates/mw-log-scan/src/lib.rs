//! Mower log scanning.
//!
//! Walks an operation log once, tracking whether a work cycle is active,
//! annotating cycle transitions, and collecting fault codes into three
//! buckets: every fault seen, faults that follow an abnormal shutdown, and
//! the remainder. Output goes through a `ReportSink` so the scan itself has
//! no terminal dependency.

pub mod error;
pub mod markers;
pub mod mock;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod sink;
pub mod source;

// Re-export key types for convenience
pub use error::{LogError, LogResult};
pub use markers::MarkerSet;
pub use mock::{MemorySink, MockLogSource};
pub use pattern::extract_fault;
pub use report::{CycleCounts, ScanReport, ScanSummary, emit_tally};
pub use scanner::{LogScanner, ScanState};
pub use sink::{Emphasis, ReportSink};
pub use source::{FileLogSource, LogSource};
