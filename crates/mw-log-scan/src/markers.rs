//! Marker tokens that drive the work-cycle state machine.

use serde::Deserialize;

/// Substrings whose presence in a log line signals a cycle transition.
///
/// Matching is plain containment anywhere in the line. Defaults are the
/// tokens the mower firmware writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerSet {
    /// A new work cycle starts.
    pub cycle_start: String,
    /// The cycle finished normally.
    pub work_success: String,
    /// The operator stopped the mower by hand.
    pub manual_stop: String,
    /// The cycle ended abnormally; fault codes follow.
    pub work_fail: String,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            cycle_start: "KEY_START_OK".into(),
            work_success: "MANUAL_WORK_SUCCESS".into(),
            manual_stop: "EXCEPTION_EXIT_MOW_SUCCESS".into(),
            work_fail: "MANUAL_WORK_FAIL".into(),
        }
    }
}

/// Which marker a line carries, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    CycleStart,
    WorkSuccess,
    ManualStop,
    WorkFail,
}

impl MarkerSet {
    pub fn is_cycle_start(&self, line: &str) -> bool {
        line.contains(self.cycle_start.as_str())
    }

    /// Classify a line. When several markers appear, the earliest in
    /// priority order wins.
    pub fn classify(&self, line: &str) -> Option<Marker> {
        if self.is_cycle_start(line) {
            Some(Marker::CycleStart)
        } else if line.contains(self.work_success.as_str()) {
            Some(Marker::WorkSuccess)
        } else if line.contains(self.manual_stop.as_str()) {
            Some(Marker::ManualStop)
        } else if line.contains(self.work_fail.as_str()) {
            Some(Marker::WorkFail)
        } else {
            None
        }
    }
}
