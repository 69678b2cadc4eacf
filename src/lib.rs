// Lets `#[derive(Record)]` expand to `clapboard::...` paths inside this crate too.
extern crate self as clapboard;

mod active_project;
mod config;
pub mod entities;
mod error;
mod lock;
mod production;
mod record;
mod storage;
mod store;
pub mod view;

pub use active_project::{ActiveProject, ACTIVE_PROJECT_KEY};
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use lock::{KeyLock, KeyLockGuard, LockError, LockManager};
pub use production::{CascadeReport, Production};
pub use record::{ProjectRef, ProjectScoped, Record};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StorageError};
pub use store::{ChangeEvent, ChangeKind, EntityStore, Versioned};
pub use view::{natural_cmp, project_view, project_view_by};

// Re-export the derive alongside the trait, as serde does.
pub use clapboard_macros::Record;
