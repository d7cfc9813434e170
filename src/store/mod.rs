//! Record store for userbase
//!
//! The store is the persistence collaborator behind every request. It only
//! knows how to hand out the full user collection and how to take a full
//! collection back; all querying happens on the loaded snapshot.
//!
//! # Concurrency
//!
//! There is no locking across a request's load/save pair. Two mutating
//! requests racing on the same store both read the old state and the later
//! `save` wins; the earlier update is lost.

mod errors;
mod file;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::record::UserRecord;

/// Whole-collection persistence for user records
pub trait RecordStore: Send + Sync {
    /// Loads a fresh snapshot of every record, in stored order
    fn load(&self) -> StoreResult<Vec<UserRecord>>;

    /// Replaces the stored collection with `records`
    fn save(&self, records: &[UserRecord]) -> StoreResult<()>;
}
