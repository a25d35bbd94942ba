//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for e2c operations, whatever UI is driving them.
//!
//! `E2cApi<S: DataStore>` is generic over the storage backend:
//! - Production: `E2cApi<JsonStore>`
//! - Testing: `E2cApi<InMemoryStore>`
//!
//! API tests verify dispatch; the lookup rules themselves are tested in
//! `dict.rs` and the store modules.

use crate::commands;
use crate::config::E2cConfig;
use crate::dict::Dictionary;
use crate::error::Result;
use crate::store::fs::JsonStore;
use crate::store::DataStore;

/// The main API facade for e2c operations.
pub struct E2cApi<S: DataStore> {
    dict: Dictionary<S>,
}

impl<S: DataStore> E2cApi<S> {
    pub fn new(dict: Dictionary<S>) -> Self {
        Self { dict }
    }

    pub fn get(&mut self, key: &str) -> Result<commands::CmdResult> {
        commands::get::run(&mut self.dict, key)
    }

    pub fn put(&mut self, key: &str, value: &str) -> Result<commands::CmdResult> {
        commands::put::run(&mut self.dict, key, value)
    }

    pub fn dictionary(&self) -> &Dictionary<S> {
        &self.dict
    }
}

impl E2cApi<JsonStore> {
    /// Build the file-backed API from a validated configuration.
    pub fn from_config(config: &E2cConfig) -> Result<Self> {
        config.validate()?;
        let store = JsonStore::from_config(config);
        Ok(Self::new(Dictionary::from_config(store, config)))
    }
}

pub use crate::commands::CmdResult;
