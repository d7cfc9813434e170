//! # REST API Errors
//!
//! Error types for the REST API module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::ErrorResponse;
use crate::observability::{log_event_with_fields, Event};
use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    /// No record with the requested id
    #[error("User not found")]
    NotFound,

    /// The record store failed to load or save
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A blocking store task panicked or was cancelled
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Store(_) | RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        if matches!(self, RestError::Store(_) | RestError::Internal(_)) {
            let reason = self.to_string();
            log_event_with_fields(Event::StoreFailed, &[("reason", reason.as_str())]);
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
