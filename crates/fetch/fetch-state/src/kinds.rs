//! Closed value sets referenced by fetching errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FetchStateError;

/// Describes the kind of API request that was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestKind {
    Search,
    SingleResult,
    Related,
    Provider,
}

impl RequestKind {
    pub const ALL: [RequestKind; 4] = [
        RequestKind::Search,
        RequestKind::SingleResult,
        RequestKind::Related,
        RequestKind::Provider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Search => "search",
            RequestKind::SingleResult => "single-result",
            RequestKind::Related => "related",
            RequestKind::Provider => "provider",
        }
    }
}

/// Media types the site can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedSearchType {
    All,
    Image,
    Audio,
}

impl SupportedSearchType {
    pub const ALL: [SupportedSearchType; 3] = [
        SupportedSearchType::All,
        SupportedSearchType::Image,
        SupportedSearchType::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedSearchType::All => "all",
            SupportedSearchType::Image => "image",
            SupportedSearchType::Audio => "audio",
        }
    }
}

/// HTTP client error codes, plus the site's own codes such as `NO_RESULT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request succeeded but returned no results.
    NoResult,
    ServerTimeout,
    Econnaborted,
    ErrUnknown,
    ErrFrTooManyRedirects,
    ErrBadOptionValue,
    ErrBadOption,
    ErrNetwork,
    ErrDeprecated,
    ErrBadResponse,
    ErrBadRequest,
    ErrNotSupport,
    ErrInvalidUrl,
    ErrCanceled,
    Etimedout,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 15] = [
        ErrorCode::NoResult,
        ErrorCode::ServerTimeout,
        ErrorCode::Econnaborted,
        ErrorCode::ErrUnknown,
        ErrorCode::ErrFrTooManyRedirects,
        ErrorCode::ErrBadOptionValue,
        ErrorCode::ErrBadOption,
        ErrorCode::ErrNetwork,
        ErrorCode::ErrDeprecated,
        ErrorCode::ErrBadResponse,
        ErrorCode::ErrBadRequest,
        ErrorCode::ErrNotSupport,
        ErrorCode::ErrInvalidUrl,
        ErrorCode::ErrCanceled,
        ErrorCode::Etimedout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NoResult => "NO_RESULT",
            ErrorCode::ServerTimeout => "SERVER_TIMEOUT",
            ErrorCode::Econnaborted => "ECONNABORTED",
            ErrorCode::ErrUnknown => "ERR_UNKNOWN",
            ErrorCode::ErrFrTooManyRedirects => "ERR_FR_TOO_MANY_REDIRECTS",
            ErrorCode::ErrBadOptionValue => "ERR_BAD_OPTION_VALUE",
            ErrorCode::ErrBadOption => "ERR_BAD_OPTION",
            ErrorCode::ErrNetwork => "ERR_NETWORK",
            ErrorCode::ErrDeprecated => "ERR_DEPRECATED",
            ErrorCode::ErrBadResponse => "ERR_BAD_RESPONSE",
            ErrorCode::ErrBadRequest => "ERR_BAD_REQUEST",
            ErrorCode::ErrNotSupport => "ERR_NOT_SUPPORT",
            ErrorCode::ErrInvalidUrl => "ERR_INVALID_URL",
            ErrorCode::ErrCanceled => "ERR_CANCELED",
            ErrorCode::Etimedout => "ETIMEDOUT",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SupportedSearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = FetchStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FetchStateError::UnknownValue {
                kind: "request kind",
                value: s.to_string(),
            })
    }
}

impl FromStr for SupportedSearchType {
    type Err = FetchStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportedSearchType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FetchStateError::UnknownValue {
                kind: "search type",
                value: s.to_string(),
            })
    }
}

impl FromStr for ErrorCode {
    type Err = FetchStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FetchStateError::UnknownValue {
                kind: "error code",
                value: s.to_string(),
            })
    }
}
