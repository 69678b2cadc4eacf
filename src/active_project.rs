//! ActiveProject - the process-wide project selection every view reads.

use std::sync::RwLock;

use log::{debug, warn};

use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// Storage key the selection is mirrored under.
pub const ACTIVE_PROJECT_KEY: &str = "active_project";

/// Holds the currently selected project id.
///
/// `select` mirrors the choice to the backend first and only then changes the
/// in-memory selection, so a failed write leaves the previous selection in
/// place and `load` after a restart agrees with what views showed.
pub struct ActiveProject<S> {
    backend: S,
    key: String,
    current: RwLock<Option<String>>,
}

impl<S: KeyValueStore> ActiveProject<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, ACTIVE_PROJECT_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        ActiveProject {
            backend,
            key: key.into(),
            current: RwLock::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restore the mirrored selection. A backend error or unreadable value
    /// leaves no project selected.
    pub fn load(&self) -> Option<String> {
        let restored = match self.backend.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Option<String>>(&raw) {
                Ok(id) => id,
                Err(err) => {
                    warn!("active project: unreadable selection under {}: {}", self.key, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("active project: load from {} failed: {}", self.key, err);
                None
            }
        };
        debug!("active project restored: {:?}", restored);
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = restored.clone();
        restored
    }

    /// The selected project id, if any.
    pub fn get(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Select `id` (or nothing). On a backend error the selection is unchanged.
    pub fn select(&self, id: Option<&str>) -> Result<(), StoreError> {
        let result = match id {
            Some(id) => serde_json::to_string(id)
                .map_err(|e| StoreError::Serde {
                    key: self.key.clone(),
                    message: e.to_string(),
                })
                .and_then(|raw| self.backend.set(&self.key, &raw).map_err(StoreError::from)),
            None => self
                .backend
                .remove(&self.key)
                .map(|_| ())
                .map_err(StoreError::from),
        };
        match &result {
            Ok(()) => {
                *self.current.write().unwrap_or_else(|e| e.into_inner()) = id.map(str::to_string);
            }
            Err(err) => warn!("active project: failed to mirror selection: {}", err),
        }
        result
    }

    /// Deselect.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.select(None)
    }

    /// True if `id` is the selected project.
    pub fn is(&self, id: &str) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_deref()
            == Some(id)
    }
}
