//! Event envelope and the props attached to every custom event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{AnalyticsEvent, EventName};
use crate::error::{EventError, EventResult};

/// Props sent with every custom event, regardless of its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryProps {
    /// UI language of the site.
    pub language: String,
    /// Current layout breakpoint (e.g. "lg").
    pub breakpoint: String,
    /// Full user agent string.
    pub ua: String,
    pub os: String,
    pub platform: String,
    pub browser: String,
    /// Browser version.
    pub version: String,
    /// Site origin, e.g. "https://openverse.org".
    pub origin: String,
    /// Path of the current page.
    pub pathname: String,
    pub referrer: Option<String>,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl MandatoryProps {
    /// Returns true when the origin points at the local machine.
    pub fn is_localhost(&self) -> bool {
        let host = self
            .origin
            .split_once("://")
            .map_or(self.origin.as_str(), |(_, rest)| rest);
        let host = host.split(['/', ':']).next().unwrap_or_default();
        matches!(host, "localhost" | "127.0.0.1")
    }
}

/// A dispatched custom event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for this event instance.
    pub id: String,
    /// The event name.
    pub name: EventName,
    /// Site domain the event is reported under.
    pub domain: String,
    /// Mandatory props overlaid with the event payload.
    pub props: Map<String, Value>,
    /// Timestamp when the event was created.
    pub timestamp: DateTime<Utc>,
}

impl Event {
    /// Builds the envelope for `event`. Payload keys replace mandatory props
    /// of the same name.
    pub fn new(
        event: &AnalyticsEvent,
        mandatory: &MandatoryProps,
        domain: impl Into<String>,
    ) -> EventResult<Self> {
        let mut props = match serde_json::to_value(mandatory)? {
            Value::Object(map) => map,
            other => {
                return Err(EventError::SerializationError(format!(
                    "mandatory props serialized to a non-object: {}",
                    other
                )));
            }
        };
        props.extend(event.payload()?);

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: event.name(),
            domain: domain.into(),
            props,
            timestamp: Utc::now(),
        })
    }

    /// Returns a prop as a string, if present and textual.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }
}
