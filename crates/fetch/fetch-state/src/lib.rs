//! # Openverse Fetch
//!
//! Status and failure detail of API requests made by the site:
//! - [`FetchState`] tracks one logical request from idle to a terminal outcome
//! - [`FetchingError`] records why a request failed, for the error page
//! - [`FetchFailure`] wraps a fetching error as a propagatable error value
//!
//! ## Example
//!
//! ```rust
//! use openverse_fetch::{
//!     ErrorCode, FetchFailure, FetchState, FetchingError, RequestKind, SupportedSearchType,
//! };
//!
//! let mut state = FetchState::new();
//! state.start().unwrap();
//!
//! let error = FetchingError::new(ErrorCode::NoResult, RequestKind::Search, SupportedSearchType::Image)
//!     .with_detail("q", "cats");
//! state.fail(error.clone()).unwrap();
//!
//! let failure = FetchFailure::from(error);
//! assert_eq!(failure.name(), "FetchingError");
//! assert!(state.is_finished());
//! ```

mod error;
mod failure;
mod kinds;
mod state;

pub use error::{FetchResult, FetchStateError};
pub use failure::{FailureCause, FetchFailure, FetchingError};
pub use kinds::{ErrorCode, RequestKind, SupportedSearchType};
pub use state::{FetchState, FetchStateSnapshot};
