//! Record filtering
//!
//! Filters only ever look at string-typed fields (and the boolean
//! `archived` flag). A record missing the field, or holding a value of
//! another type, fails an active filter.

use super::options::QueryOptions;
use crate::record::{UserRecord, DATE, FIRST_NAME, GENDER, JOB, LAST_NAME};

/// Fields searched by the keyword filter
pub const KEYWORD_FIELDS: [&str; 5] = [FIRST_NAME, LAST_NAME, GENDER, JOB, DATE];

/// A single field predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFilter {
    /// Case-insensitive substring. `needle` is stored lowercased.
    Contains { field: &'static str, needle: String },
    /// Exact, case-sensitive string equality
    Equals { field: &'static str, value: String },
    /// Boolean equality against `archived`
    Archived(bool),
}

impl FieldFilter {
    pub fn contains(field: &'static str, needle: &str) -> Self {
        FieldFilter::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn equals(field: &'static str, value: impl Into<String>) -> Self {
        FieldFilter::Equals {
            field,
            value: value.into(),
        }
    }

    /// Checks a record against this predicate
    pub fn matches(&self, record: &UserRecord) -> bool {
        match self {
            FieldFilter::Contains { field, needle } => record
                .str_field(field)
                .map(|v| v.to_lowercase().contains(needle.as_str()))
                .unwrap_or(false),
            FieldFilter::Equals { field, value } => record.str_field(field) == Some(value.as_str()),
            FieldFilter::Archived(expected) => record.archived() == Some(*expected),
        }
    }
}

/// All active predicates of a query, combined with AND semantics
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    fields: Vec<FieldFilter>,
    /// Lowercased keyword
    keyword: Option<String>,
}

impl RecordFilter {
    /// Collects the active filters from query options
    pub fn from_options(options: &QueryOptions) -> Self {
        let mut fields = Vec::new();

        if let Some(v) = &options.first_name {
            fields.push(FieldFilter::contains(FIRST_NAME, v));
        }
        if let Some(v) = &options.last_name {
            fields.push(FieldFilter::contains(LAST_NAME, v));
        }
        if let Some(v) = &options.gender {
            fields.push(FieldFilter::equals(GENDER, v.as_str()));
        }
        if let Some(v) = &options.job {
            fields.push(FieldFilter::contains(JOB, v));
        }
        if let Some(v) = &options.date {
            fields.push(FieldFilter::equals(DATE, v.as_str()));
        }
        if let Some(v) = options.archived {
            fields.push(FieldFilter::Archived(v));
        }

        Self {
            fields,
            keyword: options.keyword.as_ref().map(|k| k.to_lowercase()),
        }
    }

    /// Checks every field predicate
    fn matches_fields(&self, record: &UserRecord) -> bool {
        self.fields.iter().all(|f| f.matches(record))
    }

    /// Checks the keyword against the searchable fields.
    ///
    /// Matches if any non-empty string field contains the keyword.
    fn matches_keyword(&self, record: &UserRecord) -> bool {
        let keyword = match &self.keyword {
            Some(k) => k,
            None => return true,
        };

        KEYWORD_FIELDS
            .iter()
            .filter_map(|field| record.str_field(field))
            .filter(|v| !v.is_empty())
            .any(|v| v.to_lowercase().contains(keyword.as_str()))
    }

    /// Checks every active predicate
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.matches_fields(record) && self.matches_keyword(record)
    }
}
