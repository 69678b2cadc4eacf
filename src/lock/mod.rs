//! Locks - serialize mutations to one storage key.
//!
//! Every entity store holds its key's lock across the read-modify-write of a
//! mutation, so two overlapping mutations apply one after the other instead of
//! both starting from the same base. Stores that share a key share a lock
//! through a `LockManager`.

mod error;
mod key_lock;
mod manager;

pub use error::LockError;
pub use key_lock::{KeyLock, KeyLockGuard};
pub use manager::LockManager;
