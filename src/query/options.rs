//! Query option parsing
//!
//! Raw query-string parameters are turned into [`QueryOptions`] with
//! parse-or-default combinators: a parameter that cannot be understood
//! behaves exactly as if it were absent. Parsing never fails.

use std::collections::HashMap;

use crate::record::{ARCHIVED, DATE, FIRST_NAME, GENDER, JOB, LAST_NAME};

pub const KEYWORD: &str = "keyword";
pub const START: &str = "start";
pub const LIMIT: &str = "limit";
pub const SORT_FIELD: &str = "sortField";
pub const SORT_DIRECTION: &str = "sortDirection";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `"asc"` or `"desc"` exactly. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Sort specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Recognized listing options. `None` means the option has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Case-insensitive substring match
    pub first_name: Option<String>,
    /// Case-insensitive substring match
    pub last_name: Option<String>,
    /// Case-insensitive substring match
    pub job: Option<String>,
    /// Exact, case-sensitive match
    pub gender: Option<String>,
    /// Exact match
    pub date: Option<String>,
    /// Matches records whose `archived` flag equals this value
    pub archived: Option<bool>,
    /// Case-insensitive substring match over the searchable fields
    pub keyword: Option<String>,
    pub sort: Option<SortSpec>,
    /// Page offset into the filtered set; negative counts back from the end
    pub start: i64,
    /// Page length added to `start` to find the end; unbounded when `None`
    pub limit: Option<i64>,
}

impl QueryOptions {
    /// Builds options from raw query parameters
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let sort = match (
            non_empty(params, SORT_FIELD),
            params.get(SORT_DIRECTION).and_then(|d| SortDirection::parse(d)),
        ) {
            (Some(field), Some(direction)) => Some(SortSpec { field, direction }),
            _ => None,
        };

        Self {
            first_name: non_empty(params, FIRST_NAME),
            last_name: non_empty(params, LAST_NAME),
            job: non_empty(params, JOB),
            gender: non_empty(params, GENDER),
            date: non_empty(params, DATE),
            // Active whenever present; only the exact string "true" means true
            archived: params.get(ARCHIVED).map(|v| v == "true"),
            keyword: non_empty(params, KEYWORD),
            sort,
            start: params
                .get(START)
                .and_then(|v| parse_int_prefix(v))
                .unwrap_or(0),
            limit: params.get(LIMIT).and_then(|v| parse_int_prefix(v)),
        }
    }
}

/// Returns the parameter only if it is present and non-empty
fn non_empty(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Lenient integer parse.
///
/// Skips leading whitespace, accepts an optional sign, then reads as many
/// decimal digits as are present. Trailing garbage is ignored (`"10abc"` is
/// 10). Returns `None` when no digit is found. Overflow saturates.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
