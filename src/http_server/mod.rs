//! # userbase HTTP Server
//!
//! Axum server exposing the user collection.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness message
//! - `GET /users` - Filtered, sorted, paginated listing
//! - `POST /users` - Create
//! - `GET /users/:id` - Lookup
//! - `PUT /users/:id` - Shallow merge update
//! - `DELETE /users/:id` - Remove

pub mod config;
pub mod health_routes;
pub mod server;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
