//! # Openverse Events
//!
//! Custom analytics events sent from the Openverse site:
//! - A closed catalog of event names, each with exactly one payload shape
//! - Typed payloads joined to their names in [`AnalyticsEvent`]
//! - Runtime shape validation for payloads that arrive as untyped JSON
//! - A dispatcher that attaches mandatory props and forwards to sinks
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use openverse_events::{AnalyticsDispatcher, MandatoryProps, MemorySink, ViewPage};
//!
//! let dispatcher = AnalyticsDispatcher::default();
//! dispatcher.add_sink(Arc::new(MemorySink::new())).await;
//!
//! let event = ViewPage {
//!     name: "Home".into(),
//!     pathname: "/".into(),
//!     from_pathname: "/search".into(),
//! };
//! dispatcher.send_custom_event(event.into(), &MandatoryProps::default()).await?;
//! ```

mod catalog;
mod config;
mod dispatcher;
mod error;
mod event;
mod registry;
mod sink;
mod validator;

pub use catalog::{AnalyticsEvent, ClickHomeGalleryImage, EventName, ServerRendered, ViewPage};
pub use config::{AnalyticsConfig, ConfigError, load_config, parse_config};
pub use dispatcher::AnalyticsDispatcher;
pub use error::{EventError, EventResult};
pub use event::{Event, MandatoryProps};
pub use registry::{EventCatalog, EventDefinition};
pub use sink::{EventSink, MemorySink, TracingSink};
pub use validator::{ShapeValidator, ValidationError, ValidationResult};
