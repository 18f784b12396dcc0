//! Fault-code extraction from log lines.

use regex::Regex;
use std::sync::LazyLock;

use mw_faults::{FaultDictionary, FaultEntry, normalize_code};

// "primary error [0x1A]" / "primary error[001a]"
static RE_PRIMARY_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"primary error\s*\[(0x)?([0-9A-Fa-f]+)\]").unwrap());

/// Return the raw hex digits of the first fault code in `line`, if any.
pub fn find_code(line: &str) -> Option<&str> {
    RE_PRIMARY_ERROR
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Extract and resolve the fault code on `line`.
///
/// The stored line text is trimmed; the code is normalized before lookup.
pub fn extract_fault(line: &str, dictionary: &FaultDictionary) -> Option<FaultEntry> {
    let raw = find_code(line)?;
    let code = normalize_code(raw);
    let description = dictionary.resolve(&code);
    Some(FaultEntry::new(line.trim(), code, description))
}
