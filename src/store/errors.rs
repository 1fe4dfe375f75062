//! Store error types

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures at the storage adapter boundary
///
/// Raw I/O detail stays in here for logs; callers above the directory
/// layer only ever see a generic internal error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record with this id
    #[error("No partner with id {0}")]
    NotFound(Uuid),

    /// Snapshot file could not be read or written
    #[error("Snapshot I/O failed: {0}")]
    Io(String),

    /// Snapshot file exists but does not parse
    #[error("Snapshot is not valid JSON: {0}")]
    Corrupt(String),

    /// A previous writer panicked while holding the lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}
