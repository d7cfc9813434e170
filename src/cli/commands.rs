//! CLI command implementations

use std::fs;
use std::path::Path;

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event};
use crate::store::JsonFileStore;

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve(args) => serve(&args),
        Command::Init { db, force } => init(&db, force),
    }
}

/// Load the config file (if any) and apply flag overrides
pub fn resolve_config(args: &ServeArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(db) = &args.db {
        config.db_path = db.clone();
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

fn load_config_file(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Run the HTTP server until it stops
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = resolve_config(args)?;

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", config.socket_addr().as_str()),
            ("store", config.db_path.display().to_string().as_str()),
        ],
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Write an empty store document at `db`
pub fn init(db: &Path, force: bool) -> CliResult<()> {
    if db.exists() && !force {
        return Err(CliError::already_initialized(db.display()));
    }

    JsonFileStore::new(db).initialize()?;

    log_event_with_fields(
        Event::StoreInitialized,
        &[("store", db.display().to_string().as_str())],
    );
    Ok(())
}
