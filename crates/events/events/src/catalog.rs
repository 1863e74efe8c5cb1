//! The catalog of custom analytics events sent from the site.
//!
//! Every event is a pair of an [`EventName`] and the payload registered for
//! that name. [`AnalyticsEvent`] ties the two together so a payload can never
//! be sent under the wrong name.
//!
//! Conventions for new events:
//! - Names are SCREAMING_SNAKE_CASE.
//! - Names are imperative for events tied to a user action, past tense
//!   otherwise.
//! - The description is the step that emits the event.
//! - The questions answered by the event are listed in [`EventName::questions`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{EventError, EventResult};

/// The name of a custom event sent from the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventName {
    ClickHomeGalleryImage,
    ViewPage,
    ServerRendered,
}

impl EventName {
    /// All event names in the catalog.
    pub const ALL: [EventName; 3] = [
        EventName::ClickHomeGalleryImage,
        EventName::ViewPage,
        EventName::ServerRendered,
    ];

    /// Returns the wire name (e.g. "VIEW_PAGE").
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::ClickHomeGalleryImage => "CLICK_HOME_GALLERY_IMAGE",
            EventName::ViewPage => "VIEW_PAGE",
            EventName::ServerRendered => "SERVER_RENDERED",
        }
    }

    /// The exact payload keys required for this event.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            EventName::ClickHomeGalleryImage => &["set", "identifier"],
            EventName::ViewPage => &["name", "pathname", "fromPathname"],
            EventName::ServerRendered => &["name"],
        }
    }

    /// The step that emits the event.
    pub fn description(&self) -> &'static str {
        match self {
            EventName::ClickHomeGalleryImage => {
                "Click on one of the images in the gallery on the homepage."
            }
            EventName::ViewPage => "Navigate to a different page via an internal link.",
            EventName::ServerRendered => {
                "A page was rendered on the server by navigating to it from outside."
            }
        }
    }

    /// The questions this event helps answer.
    pub fn questions(&self) -> &'static [&'static str] {
        match self {
            EventName::ClickHomeGalleryImage => &[
                "Do users know homepage images are links?",
                "Do users find these images interesting?",
                "Which set is most interesting for the users?",
            ],
            EventName::ViewPage => &[
                "How many users are navigating to other Openverse pages?",
                "What is the most common user path?",
                "Which content pages are the most popular?",
            ],
            EventName::ServerRendered => &[
                "How many users are reaching Openverse by entering the URL?",
                "How many pages are server rendered vs client rendered?",
                "Which pages are common landing points?",
                "Are uses sharing search results?",
            ],
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| EventError::UnknownEventType(s.to_string()))
    }
}

/// Payload of `CLICK_HOME_GALLERY_IMAGE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClickHomeGalleryImage {
    /// The set to which the image belongs.
    pub set: String,
    /// The identifier of the image.
    pub identifier: String,
}

/// Payload of `VIEW_PAGE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ViewPage {
    /// The name of the viewed page.
    pub name: String,
    /// The path of the viewed page, overwrites `pathname` in the mandatory props.
    pub pathname: String,
    /// The path from which the user arrived here.
    pub from_pathname: String,
}

/// Payload of `SERVER_RENDERED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerRendered {
    /// The name of the viewed page.
    pub name: String,
}

/// A custom event together with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyticsEvent {
    ClickHomeGalleryImage(ClickHomeGalleryImage),
    ViewPage(ViewPage),
    ServerRendered(ServerRendered),
}

impl AnalyticsEvent {
    /// Returns the name of this event.
    pub fn name(&self) -> EventName {
        match self {
            AnalyticsEvent::ClickHomeGalleryImage(_) => EventName::ClickHomeGalleryImage,
            AnalyticsEvent::ViewPage(_) => EventName::ViewPage,
            AnalyticsEvent::ServerRendered(_) => EventName::ServerRendered,
        }
    }

    /// Returns the payload as a flat JSON object.
    pub fn payload(&self) -> EventResult<Map<String, Value>> {
        let value = match self {
            AnalyticsEvent::ClickHomeGalleryImage(p) => serde_json::to_value(p)?,
            AnalyticsEvent::ViewPage(p) => serde_json::to_value(p)?,
            AnalyticsEvent::ServerRendered(p) => serde_json::to_value(p)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(EventError::SerializationError(format!(
                "payload of {} serialized to a non-object: {}",
                self.name(),
                other
            ))),
        }
    }
}

impl From<ClickHomeGalleryImage> for AnalyticsEvent {
    fn from(payload: ClickHomeGalleryImage) -> Self {
        AnalyticsEvent::ClickHomeGalleryImage(payload)
    }
}

impl From<ViewPage> for AnalyticsEvent {
    fn from(payload: ViewPage) -> Self {
        AnalyticsEvent::ViewPage(payload)
    }
}

impl From<ServerRendered> for AnalyticsEvent {
    fn from(payload: ServerRendered) -> Self {
        AnalyticsEvent::ServerRendered(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_name_parsing() {
        assert_eq!("VIEW_PAGE".parse::<EventName>().unwrap(), EventName::ViewPage);
        assert_eq!(
            "CLICK_HOME_GALLERY_IMAGE".parse::<EventName>().unwrap(),
            EventName::ClickHomeGalleryImage
        );
        assert!(matches!(
            "view_page".parse::<EventName>(),
            Err(EventError::UnknownEventType(_))
        ));
    }

    #[test]
    fn test_event_name_serde_matches_as_str() {
        for name in EventName::ALL {
            let value = serde_json::to_value(name).unwrap();
            assert_eq!(value, json!(name.as_str()));
        }
    }

    #[test]
    fn test_payload_keys_match_declared_fields() {
        let events: Vec<AnalyticsEvent> = vec![
            ClickHomeGalleryImage {
                set: "pottery".into(),
                identifier: "abc".into(),
            }
            .into(),
            ViewPage {
                name: "Home".into(),
                pathname: "/".into(),
                from_pathname: "/search".into(),
            }
            .into(),
            ServerRendered { name: "Home".into() }.into(),
        ];

        for event in events {
            let payload = event.payload().unwrap();
            let mut keys: Vec<&str> = payload.keys().map(String::as_str).collect();
            let mut expected = event.name().fields().to_vec();
            keys.sort_unstable();
            expected.sort_unstable();
            assert_eq!(keys, expected, "keys of {}", event.name());
        }
    }

    #[test]
    fn test_tagged_representation() {
        let event = AnalyticsEvent::from(ViewPage {
            name: "Home".into(),
            pathname: "/".into(),
            from_pathname: "/search".into(),
        });

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "VIEW_PAGE",
                "payload": { "name": "Home", "pathname": "/", "fromPathname": "/search" }
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_extra_and_missing_keys() {
        let extra = json!({
            "name": "SERVER_RENDERED",
            "payload": { "name": "Home", "pathname": "/" }
        });
        assert!(serde_json::from_value::<AnalyticsEvent>(extra).is_err());

        let missing = json!({
            "name": "VIEW_PAGE",
            "payload": { "name": "Home", "pathname": "/" }
        });
        assert!(serde_json::from_value::<AnalyticsEvent>(missing).is_err());
    }
}
