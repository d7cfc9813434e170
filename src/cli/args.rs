//! CLI argument definitions using clap
//!
//! Commands:
//! - userbase serve [--config <path>] [--host <host>] [--port <port>] [--db <path>]
//! - userbase init [--db <path>] [--force]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// userbase - JSON-file backed user records over HTTP
#[derive(Parser, Debug)]
#[command(name = "userbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Create an empty store document
    Init {
        /// Path of the store document
        #[arg(long, default_value = "./db.json")]
        db: PathBuf,

        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
}

/// Options for `serve`. Flags override the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Path of the store document
    #[arg(long)]
    pub db: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
