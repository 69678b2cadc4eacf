use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{KeyLock, LockError};

/// Hands out one `KeyLock` per storage key.
///
/// Clones share the same table, so every store opened through any clone
/// serializes against every other store on the same key.
#[derive(Debug, Clone, Default)]
pub struct LockManager {
    locks: Arc<Mutex<HashMap<String, Arc<KeyLock>>>>,
}

impl LockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock for `key`, created on first request.
    pub fn get_lock(&self, key: &str) -> Result<Arc<KeyLock>, LockError> {
        let mut locks = self
            .locks
            .lock()
            .map_err(|_| LockError::Poisoned("lock table".into()))?;
        Ok(Arc::clone(locks.entry(key.to_string()).or_default()))
    }
}
