//! Fault dictionary — normalized fault code → human-readable description.
//!
//! Loaded once from a flat JSON object and immutable afterwards. Keys go
//! through [`normalize_code`] in file order, so when two raw keys collapse
//! to the same code the later one wins.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::code::normalize_code;
use crate::error::{FaultError, FaultResult};

/// Dictionary file expected in the working directory when none is configured.
pub const DEFAULT_DICTIONARY_FILE: &str = "fault_code.json";

/// Description reported for codes the dictionary does not know.
pub const UNKNOWN_FAULT: &str = "unknown fault";

/// Normalized fault-code lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultDictionary {
    entries: HashMap<String, String>,
}

impl FaultDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dictionary from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> FaultResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FaultError::DictionaryNotFound(shown.clone())
            } else {
                FaultError::Io {
                    path: shown.clone(),
                    message: e.to_string(),
                }
            }
        })?;
        let dict = Self::from_json_str(&contents)?;
        tracing::debug!(path = %shown, codes = dict.len(), "fault dictionary loaded");
        Ok(dict)
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json_str(json: &str) -> FaultResult<Self> {
        serde_json::from_str(json).map_err(|e| FaultError::Malformed(e.to_string()))
    }

    /// Insert a description under the normalized form of `raw_code`.
    fn insert(&mut self, raw_code: &str, description: String) {
        let code = normalize_code(raw_code);
        if let Some(previous) = self.entries.insert(code.clone(), description) {
            tracing::debug!(raw_code, %code, %previous, "fault code collision, keeping later entry");
        }
    }

    /// Look up a code (raw or normalized).
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries.get(&normalize_code(code)).map(String::as_str)
    }

    /// Look up a code, falling back to [`UNKNOWN_FAULT`].
    pub fn resolve(&self, code: &str) -> String {
        self.lookup(code).unwrap_or(UNKNOWN_FAULT).to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (normalized code, description) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FaultDictionary
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (code, description) in iter {
            dict.insert(code.as_ref(), description.into());
        }
        dict
    }
}

// Visiting the map directly keeps file order, which decides collisions.
impl<'de> Deserialize<'de> for FaultDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DictionaryVisitor;

        impl<'de> Visitor<'de> for DictionaryVisitor {
            type Value = FaultDictionary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat object mapping fault codes to descriptions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut dict = FaultDictionary::new();
                while let Some((code, description)) = map.next_entry::<String, String>()? {
                    dict.insert(&code, description);
                }
                Ok(dict)
            }
        }

        deserializer.deserialize_map(DictionaryVisitor)
    }
}
