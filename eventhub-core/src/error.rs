//! Error types for the eventhub crates.

use thiserror::Error;

/// Errors that can occur in eventhub operations.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("'{title}' is fully booked ({capacity} attendees)")]
    EventFull { title: String, capacity: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for eventhub operations.
pub type HubResult<T> = Result<T, HubError>;
