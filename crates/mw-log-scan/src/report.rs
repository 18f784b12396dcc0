//! Scan results and the end-of-scan tally.

use std::collections::HashSet;

use mw_faults::FaultEntry;

use crate::sink::{Emphasis, ReportSink};

/// Work-cycle transitions observed during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCounts {
    pub started: usize,
    pub completed: usize,
    pub stopped: usize,
    pub failed: usize,
    /// Starts seen while a previous cycle was still marked active.
    pub restarted_unclean: usize,
}

/// Everything one pass over a log produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Every fault-code occurrence, in log order.
    pub all: Vec<FaultEntry>,
    /// Fault codes found in the lookahead after an abnormal shutdown.
    pub matched: Vec<FaultEntry>,
    pub cycles: CycleCounts,
}

/// Bucket sizes of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl ScanReport {
    /// Entries of `all` that do not appear in `matched`, in log order.
    ///
    /// Membership compares the whole entry, so an occurrence whose line,
    /// code and description equal a matched one is dropped too.
    pub fn unmatched(&self) -> Vec<FaultEntry> {
        let matched: HashSet<&FaultEntry> = self.matched.iter().collect();
        self.all
            .iter()
            .filter(|entry| !matched.contains(entry))
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            total: self.all.len(),
            matched: self.matched.len(),
            unmatched: self.unmatched().len(),
        }
    }
}

const TALLY_RULE: &str = "==============================";

/// Write the three-bucket tally followed by a completion notice.
pub fn emit_tally(report: &ScanReport, sink: &mut dyn ReportSink) {
    sink.emit("", Emphasis::Plain);
    sink.emit(&format!("{TALLY_RULE} Tally {TALLY_RULE}"), Emphasis::Plain);

    sink.emit("", Emphasis::Plain);
    sink.emit(
        &format!("Total fault codes: {}", report.all.len()),
        Emphasis::Total,
    );
    for entry in &report.all {
        sink.emit(&format!("    {entry}"), Emphasis::Plain);
    }

    sink.emit("", Emphasis::Plain);
    sink.emit(
        &format!("Matched fault codes: {}", report.matched.len()),
        Emphasis::Critical,
    );
    for entry in &report.matched {
        sink.emit(&format!("    {entry}"), Emphasis::Critical);
    }

    let unmatched = report.unmatched();
    sink.emit("", Emphasis::Plain);
    sink.emit(
        &format!("Unmatched fault codes: {}", unmatched.len()),
        Emphasis::Warning,
    );
    for entry in &unmatched {
        sink.emit(&format!("    {entry}"), Emphasis::Warning);
    }

    sink.emit("", Emphasis::Plain);
    sink.emit("Log analysis complete.", Emphasis::Notice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemorySink;

    fn entry(line: &str, code: &str) -> FaultEntry {
        FaultEntry::new(line, code, "desc")
    }

    #[test]
    fn unmatched_is_ordered_difference() {
        let report = ScanReport {
            all: vec![entry("a", "1"), entry("b", "2"), entry("c", "3")],
            matched: vec![entry("b", "2")],
            ..Default::default()
        };
        assert_eq!(report.unmatched(), vec![entry("a", "1"), entry("c", "3")]);
        assert_eq!(
            report.summary(),
            ScanSummary {
                total: 3,
                matched: 1,
                unmatched: 2
            }
        );
    }

    #[test]
    fn identical_entries_leave_together() {
        let report = ScanReport {
            all: vec![entry("a", "1"), entry("a", "1")],
            matched: vec![entry("a", "1")],
            ..Default::default()
        };
        assert!(report.unmatched().is_empty());
    }

    #[test]
    fn tally_order_and_emphasis() {
        let report = ScanReport {
            all: vec![entry("a", "1"), entry("b", "2")],
            matched: vec![entry("b", "2")],
            ..Default::default()
        };
        let mut sink = MemorySink::new();
        emit_tally(&report, &mut sink);

        let texts: Vec<&str> = sink.records().iter().map(|(t, _)| t.as_str()).collect();
        let total = texts.iter().position(|t| t.starts_with("Total")).unwrap();
        let matched = texts.iter().position(|t| t.starts_with("Matched")).unwrap();
        let unmatched = texts.iter().position(|t| t.starts_with("Unmatched")).unwrap();
        assert!(total < matched && matched < unmatched);
        assert_eq!(texts.last(), Some(&"Log analysis complete."));

        assert_eq!(sink.texts_with(Emphasis::Total), vec!["Total fault codes: 2"]);
        assert_eq!(
            sink.texts_with(Emphasis::Critical),
            vec!["Matched fault codes: 1", "    b -> desc"]
        );
        assert_eq!(
            sink.texts_with(Emphasis::Warning),
            vec!["Unmatched fault codes: 1", "    a -> desc"]
        );
    }

    #[test]
    fn empty_report_still_tallies() {
        let mut sink = MemorySink::new();
        emit_tally(&ScanReport::default(), &mut sink);
        assert!(sink.contains("Total fault codes: 0"));
        assert!(sink.contains("Matched fault codes: 0"));
        assert!(sink.contains("Unmatched fault codes: 0"));
    }
}
