//! userbase CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`; errors are logged as
//! a FATAL event and printed to stderr with a non-zero exit code.

use userbase::cli;
use userbase::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code().code()), ("message", e.message())],
        );
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
