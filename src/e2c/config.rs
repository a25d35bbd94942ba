use crate::error::{E2cError, Result};
use crate::model::{Intent, DEFAULT_INTENT};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "/var/e2c/data";
const CLI_DATA_DIR: &str = "json/data";

/// Where intent files live and which intent is the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct E2cConfig {
    pub data_dir: PathBuf,
    pub default_intent: String,
}

impl Default for E2cConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_intent: DEFAULT_INTENT.to_string(),
        }
    }
}

impl E2cConfig {
    /// The configuration the binary runs with: a data directory relative to
    /// the working directory.
    pub fn cli() -> Self {
        Self::default().with_data_dir(CLI_DATA_DIR)
    }

    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_default_intent(mut self, intent: &str) -> Self {
        self.default_intent = intent.to_string();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(E2cError::Config("data directory cannot be empty".into()));
        }
        if self.default_intent.is_empty() {
            return Err(E2cError::Config("default intent cannot be empty".into()));
        }
        self.default_intent().validate()
    }

    pub fn default_intent(&self) -> Intent {
        Intent::new(self.default_intent.as_str())
    }
}
