use std::fmt;

use crate::lock::LockError;
use crate::storage::StorageError;

/// Error type for entity store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The persistence backend failed to read or write.
    Storage(StorageError),
    /// A collection could not be serialized or a persisted value could not be parsed.
    Serde { key: String, message: String },
    /// The per-key mutation lock failed.
    Lock(LockError),
    /// `add` was given a record whose id is already in the collection.
    DuplicateId { collection: String, id: String },
    /// An optimistic replace was based on a collection that has since moved.
    ConcurrencyConflict {
        collection: String,
        expected: u64,
        actual: u64,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Storage(err) => write!(f, "store persistence error: {}", err),
            StoreError::Serde { key, message } => {
                write!(f, "store serialization error on {}: {}", key, message)
            }
            StoreError::Lock(err) => write!(f, "store lock error: {}", err),
            StoreError::DuplicateId { collection, id } => {
                write!(f, "duplicate id in {}: {}", collection, id)
            }
            StoreError::ConcurrencyConflict {
                collection,
                expected,
                actual,
            } => write!(
                f,
                "concurrency conflict on {} (expected version {}, actual {})",
                collection, expected, actual
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Storage(err) => Some(err),
            StoreError::Lock(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

impl From<LockError> for StoreError {
    fn from(err: LockError) -> Self {
        StoreError::Lock(err)
    }
}
