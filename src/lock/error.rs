use std::fmt;

/// Failure to take a store lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    /// A thread panicked while holding the lock or the lock table.
    Poisoned(String),
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Poisoned(msg) => write!(f, "store lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for LockError {}
