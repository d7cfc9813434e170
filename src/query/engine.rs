//! Listing query execution
//!
//! Runs the fixed filter → keyword → count → sort → slice pipeline over a
//! borrowed snapshot. Only the records on the final page are cloned.

use super::filters::RecordFilter;
use super::options::QueryOptions;
use super::result::QueryPage;
use super::sorter::RecordSorter;
use crate::record::UserRecord;

/// Stateless listing pipeline
pub struct QueryEngine;

impl QueryEngine {
    /// Executes a listing query against `records`
    pub fn execute(records: &[UserRecord], options: &QueryOptions) -> QueryPage {
        let filter = RecordFilter::from_options(options);

        // Steps 1-2: field filters, then keyword
        let mut matched: Vec<&UserRecord> = records
            .iter()
            .filter(|r| filter.matches(r))
            .collect();

        // Step 3: total is pre-pagination
        let total = matched.len();

        // Step 4
        if let Some(sort_spec) = &options.sort {
            RecordSorter::sort(&mut matched, sort_spec);
        }

        // Step 5
        let (start, end) = Self::window(total, options.start, options.limit);
        let data = matched[start..end].iter().map(|r| (*r).clone()).collect();

        QueryPage { data, total }
    }

    /// Computes the page bounds with array-slice semantics.
    ///
    /// The raw end is `start + limit`. A negative bound counts back from
    /// `len`; both bounds clamp to `0..=len`, and an end before the start
    /// yields an empty page. Never panics.
    fn window(len: usize, start: i64, limit: Option<i64>) -> (usize, usize) {
        let start_raw = start;
        let end_raw = match limit {
            Some(limit) => start_raw.saturating_add(limit),
            None => i64::try_from(len).unwrap_or(i64::MAX),
        };

        let start = Self::resolve_index(len, start_raw);
        let end = Self::resolve_index(len, end_raw);
        if end <= start {
            return (start, start);
        }
        (start, end)
    }

    /// Maps a possibly negative index into `0..=len`
    fn resolve_index(len: usize, index: i64) -> usize {
        if index < 0 {
            let back = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
            len.saturating_sub(back)
        } else {
            usize::try_from(index).map_or(len, |i| i.min(len))
        }
    }
}
