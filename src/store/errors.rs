//! Store error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing document is not a valid store document
    #[error("Malformed store document at {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// The in-memory store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
