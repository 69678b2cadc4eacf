use std::sync::{Mutex, MutexGuard};

use super::LockError;

/// Mutual exclusion for one storage key's read-modify-write.
#[derive(Debug, Default)]
pub struct KeyLock {
    held: Mutex<()>,
}

/// Keeps a `KeyLock` held until dropped.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct KeyLockGuard<'a> {
    _held: MutexGuard<'a, ()>,
}

impl KeyLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the lock is free, then hold it for the guard's lifetime.
    pub fn acquire(&self) -> Result<KeyLockGuard<'_>, LockError> {
        let held = self
            .held
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        Ok(KeyLockGuard { _held: held })
    }
}
