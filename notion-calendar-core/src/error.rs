//! Error types for the projection pipeline.

use thiserror::Error;

/// Errors that can occur while projecting records into a calendar.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Date '{0}' is out of range after shifting by {1}")]
    DateOutOfRange(String, String),

    #[error("Unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("Local time '{0}' does not exist in time zone {1}")]
    NonexistentLocalTime(String, String),

    #[error("Record {0} produced an event without a start time")]
    MissingStart(String),

    #[error("Record error: {0}")]
    Record(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
