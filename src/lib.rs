//! userbase - a small HTTP service over a JSON-file user collection
//!
//! The listing endpoint runs every request through the [`query`] pipeline:
//! field filters, keyword search, sort, then pagination. Everything else is
//! whole-document load/save against a [`store::RecordStore`].

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod record;
pub mod rest_api;
pub mod store;
