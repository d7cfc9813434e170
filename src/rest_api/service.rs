//! # User Service
//!
//! The operations behind the `/users` routes. Every call works on a fresh
//! snapshot from the store; nothing is cached between calls.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::errors::{RestError, RestResult};
use crate::observability::{log_event_with_fields, Event};
use crate::query::{QueryEngine, QueryOptions, QueryPage};
use crate::record::UserRecord;
use crate::store::RecordStore;

/// Listing, lookup and mutation of user records
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn RecordStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Runs a listing query over the current collection
    pub fn list(&self, options: &QueryOptions) -> RestResult<QueryPage> {
        let users = self.store.load()?;
        let page = QueryEngine::execute(&users, options);

        log_event_with_fields(
            Event::UsersListed,
            &[
                ("returned", page.len().to_string().as_str()),
                ("total", page.total.to_string().as_str()),
            ],
        );

        Ok(page)
    }

    /// Looks up a record by id
    pub fn get(&self, id: i64) -> RestResult<UserRecord> {
        let users = self.store.load()?;
        users
            .into_iter()
            .find(|u| u.id() == Some(id))
            .ok_or_else(|| not_found(id))
    }

    /// Appends a new record built from `body` under a fresh id.
    ///
    /// Any `id` in the body is overwritten.
    pub fn create(&self, body: Value) -> RestResult<UserRecord> {
        let mut users = self.store.load()?;

        let id = next_id(&users, Utc::now().timestamp_millis());
        // The id leads; body fields follow in their original order
        let mut user = UserRecord::default();
        user.set_id(id);
        user.merge(UserRecord::from_value(body));

        users.push(user.clone());
        self.store.save(&users)?;

        log_event_with_fields(Event::UserCreated, &[("id", id.to_string().as_str())]);
        Ok(user)
    }

    /// Shallow-merges `body` into the record with `id`
    pub fn update(&self, id: i64, body: Value) -> RestResult<UserRecord> {
        let mut users = self.store.load()?;

        let user = users
            .iter_mut()
            .find(|u| u.id() == Some(id))
            .ok_or_else(|| not_found(id))?;
        user.merge(UserRecord::from_value(body));
        let updated = user.clone();

        self.store.save(&users)?;

        log_event_with_fields(Event::UserUpdated, &[("id", id.to_string().as_str())]);
        Ok(updated)
    }

    /// Removes the record with `id` and returns its prior content
    pub fn delete(&self, id: i64) -> RestResult<UserRecord> {
        let mut users = self.store.load()?;

        let index = users
            .iter()
            .position(|u| u.id() == Some(id))
            .ok_or_else(|| not_found(id))?;
        let removed = users.remove(index);

        self.store.save(&users)?;

        log_event_with_fields(Event::UserDeleted, &[("id", id.to_string().as_str())]);
        Ok(removed)
    }
}

fn not_found(id: i64) -> RestError {
    log_event_with_fields(Event::UserNotFound, &[("id", id.to_string().as_str())]);
    RestError::NotFound
}

/// Picks an id for a new record.
///
/// Uses the clock reading unless it would collide with, or fall behind,
/// an existing id; then it takes the next integer after the largest one.
pub fn next_id(existing: &[UserRecord], now_millis: i64) -> i64 {
    match existing.iter().filter_map(UserRecord::id).max() {
        Some(max) if max >= now_millis => max.saturating_add(1),
        _ => now_millis,
    }
}
