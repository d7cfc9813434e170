//! CLI module for userbase
//!
//! Provides command-line interface for:
//! - serve: Resolve config and run the HTTP server
//! - init: Write an empty store document

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{init, resolve_config, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
