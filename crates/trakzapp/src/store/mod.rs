//! # Storage Layer
//!
//! The persisted unit is the whole ordered collection, written through on
//! every mutation: the repository mutates in memory first, then hands the
//! full list to the backend. A failed save degrades the session to
//! memory-only; it never fails the mutation (see [`crate::repo`]).
//!
//! [`StorageBackend`] only answers "load the collection" and "save the
//! collection". Everything above it (ordering, identity, defaulting) is
//! the repository's business.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: one JSON document (`items.json`) in the data
//!   directory, saved atomically (tmp file + rename).
//! - [`mem::MemBackend`]: for testing logic without filesystem I/O, with
//!   a write-error simulation toggle.

use crate::error::Result;
use crate::model::HobbyItem;

pub mod fs;
pub mod mem;

/// Abstract interface for collection storage.
pub trait StorageBackend {
    /// Load the full collection. A store that has never been written
    /// loads as empty, not as an error.
    fn load_collection(&self) -> Result<Vec<HobbyItem>>;

    /// Persist the full collection. MUST be atomic for durable backends
    /// (write to tmp then rename) to avoid partial writes.
    fn save_collection(&self, items: &[HobbyItem]) -> Result<()>;
}
