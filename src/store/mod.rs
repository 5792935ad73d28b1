//! Record store
//!
//! Persists the full request collection in a single named slot. Callers always
//! hand over the complete collection; there are no partial updates.

mod file;
mod memory;
pub mod seed;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::Request;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing the slot
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Request slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse request slot {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to serialize requests: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Persistence boundary for the request collection
pub trait RecordStore {
    /// Whether the slot has ever been written
    fn exists(&self) -> bool;

    /// Load the persisted collection; an absent slot loads as empty
    fn load(&self) -> StoreResult<Vec<Request>>;

    /// Replace the persisted collection with `records`
    ///
    /// On error the previous contents are left as they were.
    fn save(&mut self, records: &[Request]) -> StoreResult<()>;
}
