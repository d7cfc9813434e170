//! Query engine for the user listing
//!
//! Turns a loaded record snapshot plus raw request parameters into one page
//! of results and the total match count.
//!
//! # Execution Flow (fixed order)
//!
//! 1. Apply field filters (`firstName`, `lastName`, `job`, `gender`, `date`, `archived`)
//! 2. Apply keyword search
//! 3. Count matches (`total`)
//! 4. Apply sort (if requested)
//! 5. Slice the page (`start`, `limit`)
//!
//! The input snapshot is never mutated. Malformed parameters never fail a
//! query; they fall back to their defaults.

mod collation;
mod engine;
mod filters;
mod options;
mod result;
mod sorter;

pub use collation::locale_compare;
pub use engine::QueryEngine;
pub use filters::{FieldFilter, RecordFilter};
pub use options::{parse_int_prefix, QueryOptions, SortDirection, SortSpec};
pub use result::QueryPage;
pub use sorter::RecordSorter;
