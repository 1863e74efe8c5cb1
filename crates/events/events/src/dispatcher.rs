//! Dispatch boundary for custom events.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::catalog::AnalyticsEvent;
use crate::config::AnalyticsConfig;
use crate::error::EventResult;
use crate::event::{Event, MandatoryProps};
use crate::registry::EventCatalog;
use crate::sink::EventSink;

/// Sends custom events to every registered sink.
pub struct AnalyticsDispatcher {
    config: AnalyticsConfig,
    catalog: EventCatalog,
    sinks: RwLock<Vec<Arc<dyn EventSink>>>,
}

impl AnalyticsDispatcher {
    /// Creates a dispatcher with no sinks.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            catalog: EventCatalog::standard(),
            sinks: RwLock::new(Vec::new()),
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Returns the event catalog used for untyped payloads.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Adds a sink.
    pub async fn add_sink(&self, sink: Arc<dyn EventSink>) {
        self.sinks.write().await.push(sink);
    }

    /// Returns the number of sinks.
    pub async fn sink_count(&self) -> usize {
        self.sinks.read().await.len()
    }

    fn should_send(&self, props: &MandatoryProps) -> bool {
        if !self.config.enabled {
            return false;
        }
        self.config.track_localhost || !props.is_localhost()
    }

    /// Sends a typed event.
    ///
    /// Returns `Ok(None)` when the event is skipped by configuration. A
    /// failing sink is logged and does not stop delivery to the others.
    pub async fn send_custom_event(
        &self,
        event: AnalyticsEvent,
        props: &MandatoryProps,
    ) -> EventResult<Option<Event>> {
        if !self.should_send(props) {
            tracing::debug!(name = %event.name(), origin = %props.origin, "Skipping custom event");
            return Ok(None);
        }

        let envelope = Event::new(&event, props, &self.config.domain)?;
        let sinks = self.sinks.read().await.clone();

        tracing::debug!(
            name = %envelope.name,
            event_id = %envelope.id,
            sinks = sinks.len(),
            "Dispatching custom event"
        );

        for sink in sinks {
            if let Err(e) = sink.send(&envelope).await {
                tracing::error!("Event sink '{}' error: {}", sink.id(), e);
            }
        }

        Ok(Some(envelope))
    }

    /// Validates an untyped payload against the catalog, then sends it.
    pub async fn send_raw(
        &self,
        name: &str,
        payload: Value,
        props: &MandatoryProps,
    ) -> EventResult<Option<Event>> {
        let event = self.catalog.parse(name, payload)?;
        self.send_custom_event(event, props).await
    }
}

impl Default for AnalyticsDispatcher {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}
