//! Two-level intent resolution over a [`DataStore`].
//!
//! A lookup against an intent that has no backing storage is served by the
//! default intent instead. The whole default store is substituted; nothing is
//! merged. The routing decision is made fresh on every call.
//!
//! The CLI only ever addresses the default intent, so the fallback branch is
//! reachable through the library alone.

use crate::config::E2cConfig;
use crate::error::Result;
use crate::model::{normalize_key, Intent};
use crate::store::DataStore;
use tracing::debug;

pub struct Dictionary<S: DataStore> {
    store: S,
    default_intent: Intent,
}

impl<S: DataStore> Dictionary<S> {
    pub fn new(store: S, default_intent: Intent) -> Self {
        Self {
            store,
            default_intent,
        }
    }

    pub fn from_config(store: S, config: &E2cConfig) -> Self {
        Self::new(store, config.default_intent())
    }

    pub fn default_intent(&self) -> &Intent {
        &self.default_intent
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The intent a call against `intent` is routed to.
    pub fn resolve_intent(&self, intent: &Intent) -> Intent {
        if self.store.intent_exists(intent) {
            intent.clone()
        } else {
            debug!(
                requested = %intent,
                fallback = %self.default_intent,
                "intent missing, falling back"
            );
            self.default_intent.clone()
        }
    }

    pub fn resolve_get(&mut self, intent: &Intent, key: &str) -> Result<String> {
        let key = normalize_key(key);
        let target = self.resolve_intent(intent);
        self.store.get(&target, &key)
    }

    pub fn resolve_set(&mut self, intent: &Intent, key: &str, value: &str) -> Result<()> {
        let key = normalize_key(key);
        let target = self.resolve_intent(intent);
        self.store.put(&target, &key, value)
    }

    pub fn get_default(&mut self, key: &str) -> Result<String> {
        let intent = self.default_intent.clone();
        self.resolve_get(&intent, key)
    }

    pub fn set_default(&mut self, key: &str, value: &str) -> Result<()> {
        let intent = self.default_intent.clone();
        self.resolve_set(&intent, key, value)
    }
}
