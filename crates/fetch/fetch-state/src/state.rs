//! Lifecycle of one API request.
//!
//! ```text
//! Idle ──start──▶ Fetching ──succeed──▶ Succeeded
//!                    │
//!                    └──fail──▶ Failed
//!
//! Succeeded, Failed ──start──▶ Fetching
//! ```
//!
//! `reset` returns any state to `Idle`. On the wire the state is the flat
//! [`FetchStateSnapshot`] record.

use serde::{Deserialize, Serialize};

use crate::error::{FetchResult, FetchStateError};
use crate::failure::FetchingError;

/// Status of one logical request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FetchStateSnapshot", try_from = "FetchStateSnapshot")]
pub enum FetchState {
    /// No request has been made.
    #[default]
    Idle,
    /// A request is outstanding.
    Fetching,
    /// The most recent request succeeded.
    Succeeded,
    /// The most recent request failed.
    Failed(FetchingError),
}

impl FetchState {
    /// Creates an idle state.
    pub fn new() -> Self {
        Self::Idle
    }

    fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Fetching => "fetching",
            FetchState::Succeeded => "succeeded",
            FetchState::Failed(_) => "failed",
        }
    }

    /// True while a request is outstanding.
    pub fn is_fetching(&self) -> bool {
        matches!(self, FetchState::Fetching)
    }

    /// True once a request has been initiated.
    pub fn has_started(&self) -> bool {
        !matches!(self, FetchState::Idle)
    }

    /// True once the request reached success or failure.
    pub fn is_finished(&self) -> bool {
        matches!(self, FetchState::Succeeded | FetchState::Failed(_))
    }

    /// The error of the most recent attempt, if it failed.
    pub fn fetching_error(&self) -> Option<&FetchingError> {
        match self {
            FetchState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Marks a request as started. Clears any previous error.
    pub fn start(&mut self) -> FetchResult<()> {
        if self.is_fetching() {
            return Err(FetchStateError::InvalidTransition {
                from: self.label(),
                action: "start",
            });
        }
        tracing::debug!(from = self.label(), "Fetch started");
        *self = FetchState::Fetching;
        Ok(())
    }

    /// Marks the outstanding request as successful.
    pub fn succeed(&mut self) -> FetchResult<()> {
        if !self.is_fetching() {
            return Err(FetchStateError::InvalidTransition {
                from: self.label(),
                action: "succeed",
            });
        }
        tracing::debug!("Fetch succeeded");
        *self = FetchState::Succeeded;
        Ok(())
    }

    /// Marks the outstanding request as failed with `error`.
    pub fn fail(&mut self, error: FetchingError) -> FetchResult<()> {
        if !self.is_fetching() {
            return Err(FetchStateError::InvalidTransition {
                from: self.label(),
                action: "fail",
            });
        }
        tracing::debug!(
            code = %error.code,
            request_kind = %error.request_kind,
            search_type = %error.search_type,
            "Fetch failed"
        );
        *self = FetchState::Failed(error);
        Ok(())
    }

    /// Returns to idle, dropping any error.
    pub fn reset(&mut self) {
        *self = FetchState::Idle;
    }

    /// Returns the flat record form.
    pub fn snapshot(&self) -> FetchStateSnapshot {
        FetchStateSnapshot::from(self.clone())
    }
}

/// Flat wire form of a [`FetchState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchStateSnapshot {
    pub is_fetching: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_started: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_finished: Option<bool>,
    #[serde(default)]
    pub fetching_error: Option<FetchingError>,
}

impl From<FetchState> for FetchStateSnapshot {
    fn from(state: FetchState) -> Self {
        Self {
            is_fetching: state.is_fetching(),
            has_started: Some(state.has_started()),
            is_finished: Some(state.is_finished()),
            fetching_error: match state {
                FetchState::Failed(error) => Some(error),
                _ => None,
            },
        }
    }
}

impl TryFrom<FetchStateSnapshot> for FetchState {
    type Error = FetchStateError;

    fn try_from(snapshot: FetchStateSnapshot) -> Result<Self, Self::Error> {
        let finished = snapshot.is_finished.unwrap_or(false);

        match (snapshot.is_fetching, snapshot.fetching_error) {
            (true, Some(_)) => Err(FetchStateError::Inconsistent(
                "a fetch cannot be in flight while carrying an error".to_string(),
            )),
            (true, None) if finished => Err(FetchStateError::Inconsistent(
                "a fetch cannot be in flight and finished".to_string(),
            )),
            (true, None) => Ok(FetchState::Fetching),
            (false, Some(error)) => Ok(FetchState::Failed(error)),
            (false, None) if finished => Ok(FetchState::Succeeded),
            (false, None) => Ok(FetchState::Idle),
        }
    }
}
