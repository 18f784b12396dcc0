//! Single-pass work-cycle scanner with fault lookahead.
//!
//! Each line runs through a priority chain of markers (start, success,
//! manual stop, failure); at most one fires. Independently, every line is
//! checked for a fault code and recorded in the "all" bucket. A failure
//! marker inside an active cycle triggers a lookahead that records the
//! fault codes following it, up to the next cycle start or end of log.

use mw_faults::FaultDictionary;

use crate::error::LogResult;
use crate::markers::{Marker, MarkerSet};
use crate::pattern::extract_fault;
use crate::report::{ScanReport, emit_tally};
use crate::sink::{Emphasis, ReportSink};
use crate::source::LogSource;

const CYCLE_SEPARATOR: &str =
    "*************************************************************************************************************";

/// Work-cycle state threaded through one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// A cycle has started and has not been stopped or failed yet.
    pub cutting: bool,
}

/// Scans mower logs against a fault dictionary.
pub struct LogScanner<'a> {
    markers: MarkerSet,
    dictionary: &'a FaultDictionary,
}

impl<'a> LogScanner<'a> {
    pub fn new(markers: MarkerSet, dictionary: &'a FaultDictionary) -> Self {
        Self {
            markers,
            dictionary,
        }
    }

    /// Read the whole log from `source`, then scan it.
    ///
    /// Read failures surface before anything is written to the sink.
    pub fn scan_source(
        &self,
        source: &dyn LogSource,
        path: &str,
        sink: &mut dyn ReportSink,
    ) -> LogResult<ScanReport> {
        let lines = source.read_lines(path)?;
        tracing::debug!(path, lines = lines.len(), "log loaded");
        Ok(self.scan_lines(&lines, sink))
    }

    /// Scan already-loaded lines, narrate to `sink` and finish with the tally.
    pub fn scan_lines(&self, lines: &[String], sink: &mut dyn ReportSink) -> ScanReport {
        let mut state = ScanState::default();
        let mut report = ScanReport::default();

        for (index, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            self.step(&mut state, line, &lines[index + 1..], &mut report, sink);

            if let Some(entry) = extract_fault(line, self.dictionary) {
                report.all.push(entry);
            }
        }

        let summary = report.summary();
        tracing::info!(
            total = summary.total,
            matched = summary.matched,
            unmatched = summary.unmatched,
            cycles = report.cycles.started,
            "scan complete"
        );

        emit_tally(&report, sink);
        report
    }

    /// Apply the marker priority chain to one line.
    fn step(
        &self,
        state: &mut ScanState,
        line: &str,
        rest: &[String],
        report: &mut ScanReport,
        sink: &mut dyn ReportSink,
    ) {
        match self.markers.classify(line) {
            Some(Marker::CycleStart) => {
                if state.cutting {
                    report.cycles.restarted_unclean += 1;
                    sink.emit(
                        "Previous cycle did not end cleanly; starting a new mowing cycle.",
                        Emphasis::Notice,
                    );
                }
                sink.emit("", Emphasis::Plain);
                sink.emit(CYCLE_SEPARATOR, Emphasis::Plain);
                sink.emit("", Emphasis::Plain);
                sink.emit(&format!("{line}  # mower begins cutting"), Emphasis::Plain);
                report.cycles.started += 1;
                state.cutting = true;
            }
            Some(Marker::WorkSuccess) if state.cutting => {
                sink.emit(&format!("{line}  # mowing completed"), Emphasis::Plain);
                report.cycles.completed += 1;
            }
            Some(Marker::ManualStop) if state.cutting => {
                sink.emit(&format!("{line}  # manual stop"), Emphasis::Plain);
                report.cycles.stopped += 1;
                state.cutting = false;
            }
            Some(Marker::WorkFail) if state.cutting => {
                sink.emit(&format!("{line}  # abnormal shutdown"), Emphasis::Plain);
                sink.emit(
                    "Abnormal shutdown detected, collecting the fault codes that follow:",
                    Emphasis::Notice,
                );
                report.cycles.failed += 1;
                // A failure closes the cycle: a repeated fail marker cannot
                // reopen a lookahead until the next cycle start.
                state.cutting = false;
                self.lookahead(rest, report, sink);
            }
            _ => {}
        }
    }

    /// Collect fault codes after a failure, stopping at the next cycle start.
    ///
    /// The cycle-start line ends the lookahead and is not itself checked.
    fn lookahead(&self, rest: &[String], report: &mut ScanReport, sink: &mut dyn ReportSink) {
        let mut visited = 0;
        for next in rest {
            if self.markers.is_cycle_start(next) {
                break;
            }
            visited += 1;
            if let Some(entry) = extract_fault(next, self.dictionary) {
                sink.emit(&entry.to_string(), Emphasis::Critical);
                report.matched.push(entry);
            }
        }
        tracing::debug!(lines = visited, "fault lookahead finished");
    }
}
