//! # HTTP Server
//!
//! Combines the route groups into one axum router and serves it.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::user_routes::user_routes;
use crate::observability::{log_event_with_fields, Event};
use crate::rest_api::UserService;
use crate::store::{JsonFileStore, RecordStore};

/// HTTP server for the user collection
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by the JSON file at `config.db_path`
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.db_path.clone()));
        Self::with_store(config, store)
    }

    /// Create a server over an arbitrary record store
    pub fn with_store(config: HttpServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let router = Self::build_router(&config, UserService::new(store));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, service: UserService) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(user_routes(service))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let local = listener.local_addr()?;

        log_event_with_fields(
            Event::ServerListening,
            &[
                ("addr", local.to_string().as_str()),
                ("store", self.config.db_path.display().to_string().as_str()),
            ],
        );

        axum::serve(listener, self.router).await
    }
}
