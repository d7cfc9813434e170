//! User HTTP Routes
//!
//! Thin adapters between axum extractors and [`UserService`]. Service calls
//! do whole-file store I/O, so they run on tokio's blocking pool.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};

use crate::query::{parse_int_prefix, QueryOptions, QueryPage};
use crate::record::UserRecord;
use crate::rest_api::{RestError, RestResult, UserService};

/// Create user routes
pub fn user_routes(service: UserService) -> Router {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .with_state(service)
}

/// Path ids parse the same lenient way as numeric query parameters; an id
/// that cannot name any record is reported as not found.
fn parse_id(raw: &str) -> RestResult<i64> {
    parse_int_prefix(raw).ok_or(RestError::NotFound)
}

/// Record bodies are never rejected. A missing, empty or non-JSON body is
/// an empty object, whatever the content type says.
fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Runs a service call on the blocking pool
async fn run_blocking<T, F>(call: F) -> RestResult<T>
where
    F: FnOnce() -> RestResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| RestError::Internal(e.to_string()))?
}

async fn list_users_handler(
    State(service): State<UserService>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<Json<QueryPage>> {
    let options = QueryOptions::from_params(&params);
    let page = run_blocking(move || service.list(&options)).await?;
    Ok(Json(page))
}

async fn get_user_handler(
    State(service): State<UserService>,
    Path(id): Path<String>,
) -> RestResult<Json<UserRecord>> {
    let id = parse_id(&id)?;
    Ok(Json(run_blocking(move || service.get(id)).await?))
}

async fn create_user_handler(
    State(service): State<UserService>,
    body: Bytes,
) -> RestResult<(StatusCode, Json<UserRecord>)> {
    let body = parse_body(&body);
    let created = run_blocking(move || service.create(body)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_user_handler(
    State(service): State<UserService>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<Json<UserRecord>> {
    let id = parse_id(&id)?;
    let body = parse_body(&body);
    Ok(Json(run_blocking(move || service.update(id, body)).await?))
}

async fn delete_user_handler(
    State(service): State<UserService>,
    Path(id): Path<String>,
) -> RestResult<Json<UserRecord>> {
    let id = parse_id(&id)?;
    Ok(Json(run_blocking(move || service.delete(id)).await?))
}
