//! Records - the typed values an entity store holds.
//!
//! Every record type carries a unique string id and is stored as one JSON
//! array under its own storage key. Most production records also point at the
//! project they belong to, which is what per-project views filter on.
//!
//! ## Example
//!
//! ```ignore
//! use clapboard::Record;
//!
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! #[record(key = "crew")]
//! struct CrewMember {
//!     pub id: String,
//!     pub project_id: String,
//!     pub name: String,
//! }
//! ```

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be held in an entity store.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Logical name for this record type (e.g. "Crew", "Shot").
    /// Used in errors, log lines and change notifications.
    const NAME: &'static str;

    /// Default persistence key for the collection of this record type.
    const STORAGE_KEY: &'static str;

    /// Returns the unique identifier for this record.
    fn id(&self) -> &str;
}

/// Records that belong to a project through a `projectId` foreign key.
pub trait ProjectScoped: Record {
    /// The owning project, if the record has one.
    fn project_id(&self) -> Option<&str>;
}

/// Reads a project reference out of either a required or an optional field.
pub trait ProjectRef {
    fn project_ref(&self) -> Option<&str>;
}

impl ProjectRef for String {
    fn project_ref(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(self.as_str())
        }
    }
}

impl ProjectRef for Option<String> {
    fn project_ref(&self) -> Option<&str> {
        self.as_ref().and_then(|id| id.project_ref())
    }
}
