//! Observability subsystem
//!
//! Structured JSON logging and a typed event vocabulary.
//!
//! # Principles
//!
//! 1. Logging never changes request outcomes
//! 2. No background threads, no async machinery
//! 3. Output is deterministic for a given event and fields
//!
//! # Usage
//!
//! ```ignore
//! use rolodb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::QueryComplete, &[("total", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
///
/// Failures route to stderr, everything else to stdout.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    match event.severity() {
        Severity::Error => Logger::log_stderr(Severity::Error, event.as_str(), fields),
        severity => Logger::log(severity, event.as_str(), fields),
    }
}
