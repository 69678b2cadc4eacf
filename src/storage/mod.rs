//! Storage - the key-value persistence backend entity stores sit on.
//!
//! A backend maps string keys to serialized string values. Entity stores only
//! ever write whole collections, so a backend never sees partial updates.
//!
//! ## Example
//!
//! ```ignore
//! use clapboard::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let backend = InMemoryKeyValueStore::new();
//! backend.set("crew", "[]")?;
//! assert_eq!(backend.get("crew")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;

use std::fmt;

/// Abstract key-value persistence.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Returns None if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }
}

/// Error type for persistence backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Filesystem or device failure while touching a key.
    Io { key: String, message: String },
    /// An internal lock was poisoned during the named operation.
    Poisoned(&'static str),
    /// The backend cannot serve requests right now.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { key, message } => write!(f, "io error on {}: {}", key, message),
            StorageError::Poisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
