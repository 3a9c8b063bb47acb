//! Error types for eventfinder.

use thiserror::Error;

use crate::intake::ValidationError;

/// Errors that can occur in eventfinder operations.
#[derive(Error, Debug)]
pub enum EventFinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event {0} not found")]
    EventNotFound(i64),

    #[error("{0}")]
    MalformedInput(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Event store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for eventfinder operations.
pub type EventFinderResult<T> = Result<T, EventFinderError>;
