//! User record model
//!
//! A record is an open JSON object. Only `id` is structurally required;
//! the recognized fields (`firstName`, `lastName`, `gender`, `job`, `date`,
//! `archived`) get typed accessors, everything else passes through verbatim.

mod document;
mod user;

pub use document::StoreDocument;
pub use user::{UserRecord, ARCHIVED, DATE, FIRST_NAME, GENDER, ID, JOB, LAST_NAME};
