//! Event catalog registry for discovery and validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{AnalyticsEvent, EventName};
use crate::error::EventResult;
use crate::validator::{ShapeValidator, ValidationResult};

/// Definition of an event in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDefinition {
    /// The event name.
    pub name: EventName,
    /// The step that emits the event.
    pub description: String,
    /// Questions answered by the event.
    pub questions: Vec<String>,
    /// Exact payload keys.
    pub fields: Vec<String>,
}

impl EventDefinition {
    /// Creates the definition of a cataloged event.
    pub fn of(name: EventName) -> Self {
        Self {
            name,
            description: name.description().to_string(),
            questions: name.questions().iter().map(|q| q.to_string()).collect(),
            fields: name.fields().iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// The fixed table of event definitions.
pub struct EventCatalog {
    definitions: BTreeMap<EventName, EventDefinition>,
    validator: ShapeValidator,
}

impl EventCatalog {
    /// Creates a catalog with every known event.
    pub fn standard() -> Self {
        let definitions = EventName::ALL
            .into_iter()
            .map(|name| (name, EventDefinition::of(name)))
            .collect();

        Self {
            definitions,
            validator: ShapeValidator::new(),
        }
    }

    /// Gets an event definition by wire name.
    pub fn get(&self, name: &str) -> Option<&EventDefinition> {
        let name = name.parse::<EventName>().ok()?;
        self.definitions.get(&name)
    }

    /// Checks if an event name is cataloged.
    pub fn is_registered(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns all definitions, ordered by name.
    pub fn definitions(&self) -> impl Iterator<Item = &EventDefinition> {
        self.definitions.values()
    }

    /// Returns the number of cataloged events.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validates an untyped payload against the shape registered for `name`.
    pub fn validate(&self, name: &str, payload: &Value) -> EventResult<ValidationResult> {
        let name = name.parse::<EventName>()?;
        Ok(self.validator.validate(payload, name.fields()))
    }

    /// Validates an untyped payload and converts it to a typed event.
    pub fn parse(&self, name: &str, payload: Value) -> EventResult<AnalyticsEvent> {
        let result = self.validate(name, &payload)?;
        if !result.is_valid() {
            tracing::warn!(event = name, errors = result.errors.len(), "Rejected event payload");
        }
        result.to_event_result()?;

        let mut tagged = Map::new();
        tagged.insert("name".to_string(), Value::String(name.to_string()));
        tagged.insert("payload".to_string(), payload);
        Ok(serde_json::from_value(Value::Object(tagged))?)
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
