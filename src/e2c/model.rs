use crate::error::{E2cError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the intent every lookup falls back to.
pub const DEFAULT_INTENT: &str = "default";

/// The decoded contents of one intent file. Insertion order is kept so
/// rewritten files stay readable.
pub type Entries = IndexMap<String, String>;

/// A named namespace of entries, backed by `<name>.json` in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intent(String);

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn default_intent() -> Self {
        Self::new(DEFAULT_INTENT)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }

    /// An intent name must stay inside the data directory: no separators,
    /// and not empty, `.` or `..`.
    pub fn validate(&self) -> Result<()> {
        let name = self.0.as_str();
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);
        if invalid {
            return Err(E2cError::InvalidIntent(name.to_string()));
        }
        Ok(())
    }
}

impl Default for Intent {
    fn default() -> Self {
        Self::default_intent()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Intent {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Intent {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Keys are matched case-insensitively by storing them lowercased.
///
/// Lowercasing is done one char at a time with no context rules, so a final
/// `Σ` becomes `σ`, and `İ` maps to a plain `i`. Keys written by other tools
/// that lowercase per code point then resolve to the same entry.
pub fn normalize_key(key: &str) -> String {
    let mut lowered = String::with_capacity(key.len());
    for c in key.chars() {
        // The only char whose full lowercase mapping is longer than one char
        if c == '\u{130}' {
            lowered.push('i');
        } else {
            lowered.extend(c.to_lowercase());
        }
    }
    lowered
}
