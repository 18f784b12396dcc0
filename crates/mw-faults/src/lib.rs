//! Fault-code handling for mower operation logs.
//!
//! Loads the fault dictionary (code → description), normalizes fault codes
//! the same way for dictionary keys and log extractions, and defines the
//! `FaultEntry` record shared by the scanner and its reports.

pub mod code;
pub mod dictionary;
pub mod entry;
pub mod error;

pub use code::normalize_code;
pub use dictionary::{DEFAULT_DICTIONARY_FILE, FaultDictionary, UNKNOWN_FAULT};
pub use entry::FaultEntry;
pub use error::{FaultError, FaultResult};
