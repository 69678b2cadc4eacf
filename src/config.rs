//! StoreConfig - where collections live and how their keys are named.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::FileKeyValueStore;

/// Settings for opening a `Production`.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Directory the file backend writes collections into.
    pub data_dir: PathBuf,
    /// Prepended to every record type's storage key.
    pub key_prefix: String,
    /// Seed fresh stores with the sample project instead of empty collections.
    pub seed_samples: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("clapboard"),
            key_prefix: "@clapboard/".to_string(),
            seed_samples: true,
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    /// Full storage key for a record type's base key.
    pub fn storage_key(&self, base: &str) -> String {
        format!("{}{}", self.key_prefix, base)
    }

    /// File backend rooted at `data_dir`.
    pub fn open_file_backend(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(&self.data_dir)
    }
}

/// Error type for loading a `StoreConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "cannot read config {}: {}", path.display(), message)
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
