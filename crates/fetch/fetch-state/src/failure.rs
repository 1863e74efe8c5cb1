//! Structured fetching errors.
//!
//! A failed fetch is first recorded as data ([`FetchingError`], kept on the
//! fetch state for the error page). When it has to travel through `?`, it is
//! wrapped in a [`FetchFailure`], which implements [`std::error::Error`] and
//! can carry the underlying cause.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kinds::{ErrorCode, RequestKind, SupportedSearchType};

/// Underlying error that led to a fetch failure.
pub type FailureCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Errors related to data-fetching from the API, with the information the
/// error page needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchingError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// HTTP client error code, or a custom code like `NO_RESULT`.
    pub code: ErrorCode,
    pub request_kind: RequestKind,
    pub search_type: SupportedSearchType,
    /// Additional details about the error, e.g. the search term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl FetchingError {
    /// Creates an error with only the mandatory fields set.
    pub fn new(code: ErrorCode, request_kind: RequestKind, search_type: SupportedSearchType) -> Self {
        Self {
            status_code: None,
            status_message: None,
            message: None,
            code,
            request_kind,
            search_type,
            details: None,
        }
    }

    /// Sets the HTTP status.
    pub fn with_status(mut self, code: u16, message: impl Into<String>) -> Self {
        self.status_code = Some(code);
        self.status_message = Some(message.into());
        self
    }

    /// Sets the free-text message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a contextual detail.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// A fetching error in propagated form.
///
/// Every field is copied from the source record at construction time. No
/// validation happens here.
#[derive(Debug, Clone, Error)]
#[error("{request_kind} request for {search_type} failed with {code}")]
pub struct FetchFailure {
    /// The record this failure was built from.
    pub fetching_error: FetchingError,
    pub code: ErrorCode,
    pub status_code: Option<u16>,
    pub status_message: Option<String>,
    pub request_kind: RequestKind,
    pub search_type: SupportedSearchType,
    pub details: Option<BTreeMap<String, String>>,
    #[source]
    pub cause: Option<FailureCause>,
}

impl FetchFailure {
    /// The name every fetch failure reports.
    pub const NAME: &'static str = "FetchingError";

    /// Wraps `fetching_error`, with an optional underlying cause.
    pub fn new(fetching_error: FetchingError, cause: Option<FailureCause>) -> Self {
        Self {
            code: fetching_error.code,
            status_code: fetching_error.status_code,
            status_message: fetching_error.status_message.clone(),
            request_kind: fetching_error.request_kind,
            search_type: fetching_error.search_type,
            details: fetching_error.details.clone(),
            fetching_error,
            cause,
        }
    }

    /// Returns the error name, always `"FetchingError"`.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl From<FetchingError> for FetchFailure {
    fn from(fetching_error: FetchingError) -> Self {
        Self::new(fetching_error, None)
    }
}

/// Causes compare by identity.
impl PartialEq for FetchFailure {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };

        same_cause
            && self.fetching_error == other.fetching_error
            && self.code == other.code
            && self.status_code == other.status_code
            && self.status_message == other.status_message
            && self.request_kind == other.request_kind
            && self.search_type == other.search_type
            && self.details == other.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Error)]
    #[error("connection reset")]
    struct ConnectionReset;

    fn no_result() -> FetchingError {
        FetchingError::new(ErrorCode::NoResult, RequestKind::Search, SupportedSearchType::Image)
            .with_detail("q", "cats")
    }

    #[test]
    fn test_no_result_scenario() {
        let failure = FetchFailure::new(no_result(), None);

        assert_eq!(failure.name(), "FetchingError");
        assert_eq!(failure.code, ErrorCode::NoResult);
        assert_eq!(failure.status_code, None);
        assert_eq!(failure.status_message, None);
        assert_eq!(failure.request_kind, RequestKind::Search);
        assert_eq!(failure.search_type, SupportedSearchType::Image);
        assert_eq!(
            failure.details,
            Some(BTreeMap::from([("q".to_string(), "cats".to_string())]))
        );
        assert!(failure.cause.is_none());
        assert!(failure.source().is_none());
    }

    #[test]
    fn test_fields_copied_with_cause() {
        let record = FetchingError::new(
            ErrorCode::ErrBadResponse,
            RequestKind::SingleResult,
            SupportedSearchType::Audio,
        )
        .with_status(500, "Internal Server Error")
        .with_message("upstream failed")
        .with_detail("id", "abc");
        let cause: FailureCause = Arc::new(ConnectionReset);

        let failure = FetchFailure::new(record.clone(), Some(cause.clone()));

        assert_eq!(failure.code, record.code);
        assert_eq!(failure.status_code, Some(500));
        assert_eq!(failure.status_message, record.status_message);
        assert_eq!(failure.request_kind, record.request_kind);
        assert_eq!(failure.search_type, record.search_type);
        assert_eq!(failure.details, record.details);
        assert_eq!(failure.fetching_error, record);
        assert!(Arc::ptr_eq(failure.cause.as_ref().unwrap(), &cause));
        assert_eq!(failure.source().unwrap().to_string(), "connection reset");
    }

    #[test]
    fn test_construction_is_idempotent() {
        let cause: FailureCause = Arc::new(ConnectionReset);

        let a = FetchFailure::new(no_result(), Some(cause.clone()));
        let b = FetchFailure::new(no_result(), Some(cause));
        assert_eq!(a, b);

        let c = FetchFailure::from(no_result());
        let d = FetchFailure::from(no_result());
        assert_eq!(c, d);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let failure = FetchFailure::from(no_result());
        assert_eq!(failure.to_string(), "search request for image failed with NO_RESULT");
    }

    #[test]
    fn test_fetching_error_wire_shape() {
        let value = serde_json::to_value(no_result()).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "NO_RESULT",
                "requestKind": "search",
                "searchType": "image",
                "details": { "q": "cats" }
            })
        );

        let parsed: FetchingError = serde_json::from_value(json!({
            "statusCode": 404,
            "code": "ERR_BAD_REQUEST",
            "requestKind": "related",
            "searchType": "audio"
        }))
        .unwrap();
        assert_eq!(parsed.status_code, Some(404));
        assert_eq!(parsed.request_kind, RequestKind::Related);
        assert!(parsed.details.is_none());

        let bad_kind = json!({
            "code": "NO_RESULT",
            "requestKind": "media",
            "searchType": "image"
        });
        assert!(serde_json::from_value::<FetchingError>(bad_kind).is_err());
    }
}
