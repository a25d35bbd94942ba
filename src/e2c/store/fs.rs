use super::DataStore;
use crate::config::E2cConfig;
use crate::error::{E2cError, Result};
use crate::model::{Entries, Intent};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const EMPTY_OBJECT: &str = "{}\n";

pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &E2cConfig) -> Self {
        Self::new(&config.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn intent_path(&self, intent: &Intent) -> PathBuf {
        self.data_dir.join(intent.file_name())
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.data_dir.exists() {
            if !self.data_dir.is_dir() {
                return Err(E2cError::Store(format!(
                    "Data directory is not a directory: {}",
                    self.data_dir.display()
                )));
            }
            return Ok(());
        }
        debug!(dir = %self.data_dir.display(), "creating data directory");
        fs::create_dir_all(&self.data_dir).map_err(E2cError::Io)?;
        Ok(())
    }

    /// Open an intent for reading, creating it as an empty object file first
    /// when it does not exist yet.
    fn open_or_create(&self, intent: &Intent) -> Result<Entries> {
        intent.validate()?;
        let path = self.intent_path(intent);
        if !path.exists() {
            self.ensure_dir()?;
            debug!(intent = %intent, path = %path.display(), "creating intent file");
            fs::write(&path, EMPTY_OBJECT).map_err(E2cError::Io)?;
            return Ok(Entries::new());
        }
        self.load(&path)
    }

    fn load(&self, path: &Path) -> Result<Entries> {
        let content = fs::read_to_string(path).map_err(E2cError::Io)?;
        let entries = decode(&content)?;
        trace!(path = %path.display(), entries = entries.len(), "loaded intent");
        Ok(entries)
    }

    fn save(&self, intent: &Intent, entries: &Entries) -> Result<()> {
        let mut content = serde_json::to_string_pretty(entries).map_err(E2cError::Serialization)?;
        content.push('\n');
        let path = self.intent_path(intent);
        debug!(intent = %intent, entries = entries.len(), "writing intent file");
        fs::write(path, content).map_err(E2cError::Io)?;
        Ok(())
    }
}

/// An empty (or whitespace-only) file is an empty mapping.
fn decode(content: &str) -> Result<Entries> {
    if content.trim().is_empty() {
        return Ok(Entries::new());
    }
    serde_json::from_str(content).map_err(E2cError::Serialization)
}

impl DataStore for JsonStore {
    fn intent_exists(&self, intent: &Intent) -> bool {
        intent.validate().is_ok() && self.intent_path(intent).exists()
    }

    fn get(&mut self, intent: &Intent, key: &str) -> Result<String> {
        let entries = self.open_or_create(intent)?;
        Ok(entries.get(key).cloned().unwrap_or_default())
    }

    fn put(&mut self, intent: &Intent, key: &str, value: &str) -> Result<()> {
        let mut entries = self.open_or_create(intent)?;
        entries.insert(key.to_string(), value.to_string());
        self.save(intent, &entries)
    }

    fn entries(&self, intent: &Intent) -> Result<Entries> {
        intent.validate()?;
        let path = self.intent_path(intent);
        if !path.exists() {
            return Ok(Entries::new());
        }
        self.load(&path)
    }
}
