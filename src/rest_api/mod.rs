//! # userbase REST API
//!
//! Record lookup and mutation over the record store, plus the error
//! taxonomy and response bodies shared by the HTTP routes.
//!
//! Each operation loads a fresh snapshot from the store; mutations write
//! the full collection back before returning.

pub mod errors;
pub mod response;
pub mod service;

pub use errors::{RestError, RestResult};
pub use response::ErrorResponse;
pub use service::UserService;
