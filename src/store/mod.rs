//! Entity stores - one seeded, persisted collection per record type.
//!
//! An `EntityStore` loads its collection from a key-value backend (seeding it
//! on first run), applies add/update/remove by computing a whole new
//! collection, writes that collection back in one call, and then notifies
//! observers.
//!
//! ## Example
//!
//! ```ignore
//! use clapboard::{EntityStore, InMemoryKeyValueStore};
//!
//! let crew = EntityStore::<CrewMember, _>::new(InMemoryKeyValueStore::new());
//! crew.load();
//! crew.add(member)?;
//! let everyone = crew.current_items();
//! ```

mod entity_store;
#[cfg(feature = "emitter")]
mod notify;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A collection together with the store version it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// What caused a store's collection to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Loaded,
    Added,
    Updated,
    Removed,
    Replaced,
    Cleared,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Loaded => "load",
            ChangeKind::Added => "add",
            ChangeKind::Updated => "update",
            ChangeKind::Removed => "remove",
            ChangeKind::Replaced => "replace",
            ChangeKind::Cleared => "clear",
        };
        f.write_str(label)
    }
}

/// Delivered to subscribers after a store's collection has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Logical name of the store.
    pub name: String,
    /// Storage key the collection lives under.
    pub key: String,
    /// Store version after the change.
    pub version: u64,
    pub kind: ChangeKind,
}

pub use entity_store::EntityStore;
