//! HTTP Route Tests
//!
//! Drives the full axum router in-process:
//! - `GET /` liveness
//! - `GET /users` filtering, search, sort, pagination
//! - `GET/PUT/DELETE /users/:id` lookup and mutation, 404 handling
//! - `POST /users` creation with a server-assigned id

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use userbase::http_server::{HttpServer, HttpServerConfig};
use userbase::record::UserRecord;
use userbase::store::{MemoryStore, RecordStore};

// =============================================================================
// Test Utilities
// =============================================================================

fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_records(vec![
        UserRecord::from_value(json!({"id": 1, "firstName": "Ann", "archived": false})),
        UserRecord::from_value(json!({"id": 2, "firstName": "Bob", "archived": true})),
    ]))
}

fn router_for(store: Arc<MemoryStore>) -> Router {
    HttpServer::with_store(HttpServerConfig::default(), store).router()
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Sends a body with no content-type header
async fn send_untyped(router: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Liveness
// =============================================================================

#[tokio::test]
async fn test_root_liveness() {
    let (status, bytes) = send(router_for(seeded_store()), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "API server is running");
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_all() {
    let (status, body) = send_json(router_for(seeded_store()), Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_list_archived_true() {
    let (_, body) = send_json(
        router_for(seeded_store()),
        Method::GET,
        "/users?archived=true",
        None,
    )
    .await;
    assert_eq!(body, json!({"data": [{"id": 2, "firstName": "Bob", "archived": true}], "total": 1}));
}

#[tokio::test]
async fn test_list_archived_malformed_means_false() {
    let (_, body) = send_json(
        router_for(seeded_store()),
        Method::GET,
        "/users?archived=maybe",
        None,
    )
    .await;
    assert_eq!(ids(&body), vec![1]);
}

#[tokio::test]
async fn test_list_keyword() {
    let (_, body) = send_json(
        router_for(seeded_store()),
        Method::GET,
        "/users?keyword=ann",
        None,
    )
    .await;
    assert_eq!(ids(&body), vec![1]);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_list_sort_and_paginate() {
    let (_, body) = send_json(
        router_for(seeded_store()),
        Method::GET,
        "/users?sortField=firstName&sortDirection=desc&start=0&limit=1",
        None,
    )
    .await;
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_list_malformed_pagination_falls_back() {
    let (status, body) = send_json(
        router_for(seeded_store()),
        Method::GET,
        "/users?start=abc&limit=xyz&sortDirection=sideways&sortField=firstName",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);
}

#[tokio::test]
async fn test_list_start_beyond_end() {
    let (_, body) = send_json(
        router_for(seeded_store()),
        Method::GET,
        "/users?start=10",
        None,
    )
    .await;
    assert_eq!(body, json!({"data": [], "total": 2}));
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn test_get_by_id() {
    let (status, body) = send_json(router_for(seeded_store()), Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "firstName": "Ann", "archived": false}));
}

#[tokio::test]
async fn test_get_missing_is_404() {
    let (status, body) = send_json(router_for(seeded_store()), Method::GET, "/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_get_non_numeric_id_is_404() {
    let (status, _) = send_json(router_for(seeded_store()), Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Mutation
// =============================================================================

#[tokio::test]
async fn test_create_assigns_id() {
    let store = seeded_store();
    let (status, body) = send_json(
        router_for(store.clone()),
        Method::POST,
        "/users",
        Some(json!({"id": 1, "firstName": "Cara", "job": "Pilot"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert!(id != 1 && id != 2);
    assert_eq!(body["firstName"], "Cara");
    assert_eq!(body["job"], "Pilot");

    let stored = store.load().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[2].id(), Some(id));
}

#[tokio::test]
async fn test_update_merges_fields() {
    let store = seeded_store();
    let (status, body) = send_json(
        router_for(store.clone()),
        Method::PUT,
        "/users/1",
        Some(json!({"archived": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "firstName": "Ann", "archived": true}));
    assert_eq!(store.load().unwrap()[0].archived(), Some(true));
}

#[tokio::test]
async fn test_update_missing_is_404() {
    let (status, body) = send_json(
        router_for(seeded_store()),
        Method::PUT,
        "/users/42",
        Some(json!({"archived": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_delete_returns_removed() {
    let store = seeded_store();
    let (status, body) = send_json(router_for(store.clone()), Method::DELETE, "/users/2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "firstName": "Bob", "archived": true}));
    assert_eq!(store.load().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_is_404() {
    let store = seeded_store();
    let (status, _) = send_json(router_for(store.clone()), Method::DELETE, "/users/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.load().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_without_content_type() {
    let store = seeded_store();
    let (status, body) = send_untyped(router_for(store.clone()), Method::POST, "/users", "").await;

    assert_eq!(status, StatusCode::CREATED);
    let fields = body.as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert!(fields["id"].is_i64());
    assert_eq!(store.load().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_without_content_type_is_noop_merge() {
    let store = seeded_store();
    let (status, body) = send_untyped(
        router_for(store.clone()),
        Method::PUT,
        "/users/1",
        "firstName=Zed",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "firstName": "Ann", "archived": false}));
}

#[tokio::test]
async fn test_update_json_body_without_content_type() {
    let (status, body) = send_untyped(
        router_for(seeded_store()),
        Method::PUT,
        "/users/1",
        r#"{"x": 1}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["x"], 1);
}

#[tokio::test]
async fn test_field_order_survives_create_and_update() {
    let store = seeded_store();
    let (status, bytes) = send(
        router_for(store.clone()),
        Method::POST,
        "/users",
        Some(json!({"lastName": "Zhou", "firstName": "Ann", "job": "Pilot"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let text = String::from_utf8(bytes).unwrap();
    let id_at = text.find("\"id\"").unwrap();
    let last_at = text.find("\"lastName\"").unwrap();
    let first_at = text.find("\"firstName\"").unwrap();
    assert!(id_at < last_at && last_at < first_at, "{}", text);

    let (_, bytes) = send(
        router_for(store),
        Method::PUT,
        "/users/1",
        Some(json!({"team": "blue", "firstName": "Anna"})),
    )
    .await;
    let text = String::from_utf8(bytes).unwrap();
    let keys: Vec<usize> = ["\"id\"", "\"firstName\"", "\"archived\"", "\"team\""]
        .iter()
        .map(|key| text.find(*key).unwrap())
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "{}", text);
}
