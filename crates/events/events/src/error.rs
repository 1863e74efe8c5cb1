//! Event error types.

use thiserror::Error;

/// Result type for event operations.
pub type EventResult<T> = Result<T, EventError>;

/// Error type for analytics event handling.
#[derive(Debug, Error)]
pub enum EventError {
    /// Event serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Payload does not match the shape registered for the event.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Event name is not in the catalog.
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    /// A sink failed to deliver the event.
    #[error("Sink '{sink}' failed: {message}")]
    SinkFailed { sink: String, message: String },
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::SerializationError(err.to_string())
    }
}
