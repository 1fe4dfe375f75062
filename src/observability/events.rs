//! Observable events
//!
//! Every log line the server emits names one of these events, so the
//! full vocabulary is enumerable and greppable.

use std::fmt;

use super::logger::Severity;

/// Observable events in the partner directory
///
/// Covers:
/// - Boot & lifecycle
/// - Query processing
/// - Record mutations
/// - Rejected input and storage failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Startup begins
    StartupBegin,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Partner records loaded from the data file
    DirectoryLoaded,
    /// Server bound and ready for requests
    Serving,

    // Query operations
    /// A query ran to completion
    QueryComplete,
    /// Stats aggregated over the filtered set
    StatsComplete,

    // Record mutations
    /// Partner record created
    PartnerCreated,
    /// Partner record updated
    PartnerUpdated,
    /// Partner lifecycle status changed
    PartnerStatusChanged,
    /// Partner record hard-deleted
    PartnerDeleted,

    // Failures
    /// Request rejected by validation
    ValidationRejected,
    /// Storage adapter failure
    StoreFailure,
}

impl Event {
    /// Wire name of the event, always SCREAMING_SNAKE_CASE
    pub fn as_str(&self) -> &'static str {
        match self {
            // Boot & lifecycle
            Event::StartupBegin => "ROLODB_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DirectoryLoaded => "DIRECTORY_LOADED",
            Event::Serving => "ROLODB_SERVING",

            // Query
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::StatsComplete => "STATS_COMPLETE",

            // Mutations
            Event::PartnerCreated => "PARTNER_CREATED",
            Event::PartnerUpdated => "PARTNER_UPDATED",
            Event::PartnerStatusChanged => "PARTNER_STATUS_CHANGED",
            Event::PartnerDeleted => "PARTNER_DELETED",

            // Failures
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::StoreFailure => "STORE_FAILURE",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ValidationRejected => Severity::Warn,
            Event::StoreFailure => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
