//! Persisted store document
//!
//! On disk the store is one JSON object holding a `users` array. Any other
//! top-level keys are kept as-is when the document is rewritten.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::UserRecord;

/// The whole persisted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// The user collection
    pub users: Vec<UserRecord>,

    /// Sibling top-level keys, passed through untouched
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl StoreDocument {
    /// Creates a document with no users
    pub fn empty() -> Self {
        Self::default()
    }
}
