//! Result type for the listing query

use serde::Serialize;

use crate::record::UserRecord;

/// One page of matching records plus the total match count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPage {
    /// Records in result order
    pub data: Vec<UserRecord>,
    /// Number of records passing every filter, ignoring pagination
    pub total: usize,
}

impl QueryPage {
    /// Returns the number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this page holds no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the ids on this page, in order
    pub fn ids(&self) -> Vec<i64> {
        self.data.iter().filter_map(UserRecord::id).collect()
    }
}
