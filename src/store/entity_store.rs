use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::error::StoreError;
use crate::lock::KeyLock;
use crate::record::Record;
use crate::storage::KeyValueStore;

#[cfg(feature = "emitter")]
use super::notify::ChangeNotifier;
#[cfg(feature = "emitter")]
use super::ChangeEvent;
use super::{ChangeKind, Versioned};

struct StoreState<R> {
    items: Vec<R>,
    version: u64,
    loaded: bool,
}

/// Result of applying a mutation to a base collection.
enum Outcome<R, T> {
    /// Nothing to write; the collection stays as it is.
    Unchanged(T),
    /// Persist this collection in place of the old one.
    Changed(Vec<R>, T),
}

/// Lifecycle manager for one record collection: load-with-seed, mutate,
/// persist, notify.
///
/// Mutations hold the store's lock across their read-modify-write and always
/// start from the collection as currently persisted, so overlapping mutations
/// apply in sequence. The cached collection is only replaced after the
/// backend acknowledged the write.
pub struct EntityStore<R: Record, S> {
    name: String,
    key: String,
    seed: Vec<R>,
    backend: S,
    lock: Arc<KeyLock>,
    state: RwLock<StoreState<R>>,
    #[cfg(feature = "emitter")]
    notifier: ChangeNotifier,
}

impl<R: Record, S: KeyValueStore> EntityStore<R, S> {
    /// Store named and keyed after `R`, seeded with an empty collection.
    pub fn new(backend: S) -> Self {
        EntityStore {
            name: R::NAME.to_string(),
            key: R::STORAGE_KEY.to_string(),
            seed: Vec::new(),
            backend,
            lock: Arc::new(KeyLock::new()),
            state: RwLock::new(StoreState {
                items: Vec::new(),
                version: 0,
                loaded: false,
            }),
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        }
    }

    /// Collection written on first load when nothing is persisted yet.
    pub fn with_seed(mut self, seed: Vec<R>) -> Self {
        self.seed = seed;
        self
    }

    /// Override the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Override the logical name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Share a mutation lock with other stores over the same key.
    pub fn with_lock(mut self, lock: Arc<KeyLock>) -> Self {
        self.lock = lock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Read the collection from the backend, seeding it if nothing is stored.
    ///
    /// A missing key persists and returns the seed. A backend error or an
    /// unparseable value returns the seed without writing it, so whatever is
    /// on disk is left for a later load to retry.
    pub fn load(&self) -> Vec<R> {
        let _guard = match self.lock.acquire() {
            Ok(guard) => Some(guard),
            Err(err) => {
                warn!("{}: lock unavailable during load: {}", self.name, err);
                None
            }
        };

        let items = match self.backend.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<R>>(&raw) {
                Ok(items) => {
                    debug!("{}: loaded {} records from {}", self.name, items.len(), self.key);
                    items
                }
                Err(err) => {
                    warn!(
                        "{}: unreadable collection under {}, using seed: {}",
                        self.name, self.key, err
                    );
                    self.seed.clone()
                }
            },
            Ok(None) => {
                debug!("{}: seeding {} with {} records", self.name, self.key, self.seed.len());
                if let Err(err) = self.write(&self.seed) {
                    warn!("{}: failed to persist seed: {}", self.name, err);
                }
                self.seed.clone()
            }
            Err(err) => {
                warn!("{}: load from {} failed, using seed: {}", self.name, self.key, err);
                self.seed.clone()
            }
        };

        let version = {
            let mut state = self.state_mut();
            state.loaded = true;
            Self::install(&mut state, items.clone())
        };
        self.notify(ChangeKind::Loaded, version);
        items
    }

    /// The most recently loaded or mutated collection; empty until the first load.
    pub fn current_items(&self) -> Vec<R> {
        self.state().items.clone()
    }

    /// First cached record with `id`.
    pub fn get(&self, id: &str) -> Option<R> {
        self.state().items.iter().find(|r| r.id() == id).cloned()
    }

    /// True until the first `load` completes.
    pub fn is_loading(&self) -> bool {
        !self.state().loaded
    }

    /// Generation counter, bumped on every load and persisted mutation.
    pub fn version(&self) -> u64 {
        self.state().version
    }

    /// The cached collection together with its version, for `replace_all`.
    pub fn snapshot(&self) -> Versioned<Vec<R>> {
        let state = self.state();
        Versioned {
            data: state.items.clone(),
            version: state.version,
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append `record`. Fails with `DuplicateId` if its id is already present.
    pub fn add(&self, record: R) -> Result<(), StoreError> {
        self.mutate(ChangeKind::Added, |base| {
            if base.iter().any(|r| r.id() == record.id()) {
                return Err(self.duplicate(record.id()));
            }
            let mut next = base.to_vec();
            next.push(record);
            Ok(Outcome::Changed(next, ()))
        })
    }

    /// Append every record in one write. The whole batch is rejected if any
    /// id collides with the collection or with another record in the batch.
    pub fn add_many(&self, records: Vec<R>) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }
        self.mutate(ChangeKind::Added, |base| {
            let mut seen: HashSet<&str> = base.iter().map(|r| r.id()).collect();
            for record in &records {
                if !seen.insert(record.id()) {
                    return Err(self.duplicate(record.id()));
                }
            }
            let added = records.len();
            let mut next = base.to_vec();
            next.extend(records.iter().cloned());
            Ok(Outcome::Changed(next, added))
        })
    }

    /// Replace every element whose id matches `record`, in place.
    /// Returns false (and writes nothing) when no element matches.
    pub fn update(&self, record: R) -> Result<bool, StoreError> {
        self.mutate(ChangeKind::Updated, |base| {
            if !base.iter().any(|r| r.id() == record.id()) {
                return Ok(Outcome::Unchanged(false));
            }
            let next = base
                .iter()
                .map(|r| {
                    if r.id() == record.id() {
                        record.clone()
                    } else {
                        r.clone()
                    }
                })
                .collect();
            Ok(Outcome::Changed(next, true))
        })
    }

    /// Remove every element with `id`. Returns how many were removed.
    pub fn remove(&self, id: &str) -> Result<usize, StoreError> {
        self.remove_where(|r| r.id() == id)
    }

    /// Remove every element matching `predicate`. Returns how many were removed.
    pub fn remove_where<F>(&self, predicate: F) -> Result<usize, StoreError>
    where
        F: Fn(&R) -> bool,
    {
        self.mutate(ChangeKind::Removed, |base| {
            let next: Vec<R> = base.iter().filter(|r| !predicate(r)).cloned().collect();
            let removed = base.len() - next.len();
            if removed == 0 {
                Ok(Outcome::Unchanged(0))
            } else {
                Ok(Outcome::Changed(next, removed))
            }
        })
    }

    /// Persist `items` as the whole collection, provided the store is still at
    /// `expected_version`. Callers that computed `items` from a `snapshot`
    /// get `ConcurrencyConflict` instead of overwriting a newer collection.
    pub fn replace_all(&self, expected_version: u64, items: Vec<R>) -> Result<u64, StoreError> {
        let result = self.try_replace_all(expected_version, items);
        if let Err(err) = &result {
            warn!("{}: {} failed: {}", self.name, ChangeKind::Replaced, err);
        }
        result
    }

    fn try_replace_all(&self, expected_version: u64, items: Vec<R>) -> Result<u64, StoreError> {
        let _guard = self.lock.acquire()?;

        let actual = self.version();
        if actual != expected_version {
            return Err(StoreError::ConcurrencyConflict {
                collection: self.name.clone(),
                expected: expected_version,
                actual,
            });
        }

        self.write(&items)?;
        let version = Self::install(&mut self.state_mut(), items);
        self.notify(ChangeKind::Replaced, version);
        Ok(version)
    }

    /// Delete the persisted collection and empty the cache. The next `load`,
    /// or the next mutation, starts again from the seed.
    pub fn clear(&self) -> Result<bool, StoreError> {
        let result = self.try_clear();
        if let Err(err) = &result {
            warn!("{}: {} failed: {}", self.name, ChangeKind::Cleared, err);
        }
        result
    }

    fn try_clear(&self) -> Result<bool, StoreError> {
        let _guard = self.lock.acquire()?;
        let existed = self.backend.remove(&self.key)?;
        let version = {
            let mut state = self.state_mut();
            state.loaded = false;
            Self::install(&mut state, Vec::new())
        };
        self.notify(ChangeKind::Cleared, version);
        Ok(existed)
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Register a callback run after every persisted change. Returns the
    /// listener id for `unsubscribe`.
    #[cfg(feature = "emitter")]
    pub fn subscribe<F>(&self, listener: F) -> String
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Drop a listener. Returns true if it was registered.
    #[cfg(feature = "emitter")]
    pub fn unsubscribe(&self, listener_id: &str) -> bool {
        self.notifier.unsubscribe(listener_id)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn mutate<T, F>(&self, kind: ChangeKind, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&[R]) -> Result<Outcome<R, T>, StoreError>,
    {
        let result = self.try_mutate(kind, apply);
        if let Err(err) = &result {
            warn!("{}: {} failed: {}", self.name, kind, err);
        }
        result
    }

    fn try_mutate<T, F>(&self, kind: ChangeKind, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&[R]) -> Result<Outcome<R, T>, StoreError>,
    {
        let _guard = self.lock.acquire()?;
        let base = self.read_persisted()?;

        match apply(&base)? {
            Outcome::Unchanged(value) => Ok(value),
            Outcome::Changed(next, value) => {
                self.write(&next)?;
                debug!("{}: {} persisted {} records", self.name, kind, next.len());
                let version = Self::install(&mut self.state_mut(), next);
                self.notify(kind, version);
                Ok(value)
            }
        }
    }

    /// The collection a mutation starts from.
    ///
    /// Normally the value the backend holds right now. An absent key means
    /// the seed was never persisted (a load that fell back to it, or a failed
    /// seed write), so the base is what callers have been shown: the cache
    /// once loaded, the seed before that. An unreadable value fails the
    /// mutation rather than being overwritten.
    fn read_persisted(&self) -> Result<Vec<R>, StoreError> {
        match self.backend.get(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Serde {
                key: self.key.clone(),
                message: e.to_string(),
            }),
            None => {
                let state = self.state();
                if state.loaded {
                    Ok(state.items.clone())
                } else {
                    Ok(self.seed.clone())
                }
            }
        }
    }

    fn write(&self, items: &[R]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items).map_err(|e| StoreError::Serde {
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        self.backend.set(&self.key, &raw)?;
        Ok(())
    }

    fn install(state: &mut StoreState<R>, items: Vec<R>) -> u64 {
        state.items = items;
        state.version += 1;
        state.version
    }

    fn duplicate(&self, id: &str) -> StoreError {
        StoreError::DuplicateId {
            collection: self.name.clone(),
            id: id.to_string(),
        }
    }

    #[cfg(feature = "emitter")]
    fn notify(&self, kind: ChangeKind, version: u64) {
        self.notifier.emit(ChangeEvent {
            name: self.name.clone(),
            key: self.key.clone(),
            version,
            kind,
        });
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&self, _kind: ChangeKind, _version: u64) {}

    fn state(&self) -> RwLockReadGuard<'_, StoreState<R>> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, StoreState<R>> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
