//! Domain Layer
//!
//! Entities and core abstractions. No I/O in this layer; only serde for
//! serialization, chrono for timestamps and uuid for fresh ids.

mod snapshot;
mod task;
mod user;

pub use snapshot::{Snapshot, STORAGE_KEY};
pub use task::{Task, TaskPatch, TaskStatus};
pub use user::User;

/// Common result type for store operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// The only recoverable failure in the core is the initial remote fetch;
/// storage failures are surfaced to whoever drives the storage capability
/// directly, the store itself only logs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    Fetch(String),
    Storage(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
