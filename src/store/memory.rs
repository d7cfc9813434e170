//! In-memory record store
//!
//! Holds the collection in a lock-guarded vector. Used by tests and for
//! running the server without a backing file.

use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::RecordStore;
use crate::record::UserRecord;

/// Record store that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<UserRecord>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `records`
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<UserRecord>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn save(&self, records: &[UserRecord]) -> StoreResult<()> {
        let mut guard = self.records.write().map_err(|_| StoreError::Poisoned)?;
        *guard = records.to_vec();
        Ok(())
    }
}
