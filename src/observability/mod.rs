//! Observability for userbase
//!
//! Structured JSON logging of typed service events.
//!
//! # Principles
//!
//! 1. One log line = one event
//! 2. Deterministic key ordering
//! 3. Synchronous, no background threads
//! 4. Logging failure never fails a request
//!
//! # Usage
//!
//! ```ignore
//! use userbase::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::UserCreated, &[("id", "1700000000000")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a service event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::StoreFailed, &[("reason", "disk full")]);
    }
}
