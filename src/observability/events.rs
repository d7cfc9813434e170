//! Service events
//!
//! Every line the service logs names one of these events.

use std::fmt;

use super::logger::Severity;

/// Observable events in userbase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved
    ConfigLoaded,
    /// Empty store document written
    StoreInitialized,
    /// Listener bound, serving requests
    ServerListening,

    // Requests
    /// Listing query answered
    UsersListed,
    /// Record created
    UserCreated,
    /// Record merged
    UserUpdated,
    /// Record removed
    UserDeleted,
    /// No record with the requested id
    UserNotFound,

    // Failures
    /// Store load or save failed
    StoreFailed,
    /// A CLI command ended the process
    CommandFailed,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::UsersListed => "USERS_LISTED",
            Event::UserCreated => "USER_CREATED",
            Event::UserUpdated => "USER_UPDATED",
            Event::UserDeleted => "USER_DELETED",
            Event::UserNotFound => "USER_NOT_FOUND",
            Event::StoreFailed => "STORE_FAILED",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::UsersListed => Severity::Trace,
            Event::UserNotFound => Severity::Warn,
            Event::StoreFailed => Severity::Error,
            Event::CommandFailed => Severity::Fatal,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
