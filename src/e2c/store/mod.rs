//! # Storage Layer
//!
//! This module defines the storage abstraction for e2c. The [`DataStore`] trait
//! holds one string-to-string mapping per [`Intent`].
//!
//! ## Implementations
//!
//! - [`fs::JsonStore`]: Production file-based storage
//!   - One file per intent: `<data_dir>/<intent>.json`
//!   - Flat JSON object, 2-space indentation
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same open-or-create behavior as the file store
//!
//! ## Open-or-create
//!
//! Both `get` and `put` open an intent through an open-or-create step: an
//! intent that does not exist yet is created empty before it is read. A `get`
//! against a missing intent therefore leaves that intent behind, and
//! [`DataStore::intent_exists`] is true for it afterwards.
//!
//! ## Storage Format
//!
//! ```text
//! json/data/
//! ├── default.json        # {"hello": "world", ...}
//! └── <intent>.json
//! ```

use crate::error::Result;
use crate::model::{Entries, Intent};

pub mod fs;
pub mod memory;

/// Abstract interface for intent storage.
///
/// Keys are stored exactly as given; case normalization happens in the
/// dictionary layer.
pub trait DataStore {
    /// True iff the intent has backing storage
    fn intent_exists(&self, intent: &Intent) -> bool;

    /// Value for `key`, or the empty string. Creates the intent if absent.
    fn get(&mut self, intent: &Intent, key: &str) -> Result<String>;

    /// Set `key` to `value`, rewriting the whole intent. Creates the intent if absent.
    fn put(&mut self, intent: &Intent, key: &str, value: &str) -> Result<()>;

    /// All entries of an intent, without creating it
    fn entries(&self, intent: &Intent) -> Result<Entries>;
}
