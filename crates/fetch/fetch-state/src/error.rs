//! Fetch state error types.

use thiserror::Error;

/// Result type for fetch state operations.
pub type FetchResult<T> = Result<T, FetchStateError>;

/// Error type for fetch state handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchStateError {
    /// The requested transition is not allowed from the current state.
    #[error("Cannot {action} a fetch that is {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// A flat snapshot describes an impossible state.
    #[error("Inconsistent fetch state: {0}")]
    Inconsistent(String),

    /// A value is outside its closed set.
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}
