use super::DataStore;
use crate::error::Result;
use crate::model::{Entries, Intent};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    intents: HashMap<Intent, Entries>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an intent so it exists before any command runs.
    pub fn with_intent(mut self, intent: impl Into<Intent>, entries: Entries) -> Self {
        self.intents.insert(intent.into(), entries);
        self
    }
}

impl DataStore for InMemoryStore {
    fn intent_exists(&self, intent: &Intent) -> bool {
        self.intents.contains_key(intent)
    }

    fn get(&mut self, intent: &Intent, key: &str) -> Result<String> {
        let entries = self.intents.entry(intent.clone()).or_default();
        Ok(entries.get(key).cloned().unwrap_or_default())
    }

    fn put(&mut self, intent: &Intent, key: &str, value: &str) -> Result<()> {
        self.intents
            .entry(intent.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn entries(&self, intent: &Intent) -> Result<Entries> {
        Ok(self.intents.get(intent).cloned().unwrap_or_default())
    }
}
