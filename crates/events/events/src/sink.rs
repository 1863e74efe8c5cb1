//! Sinks that receive dispatched events.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::EventName;
use crate::error::EventResult;
use crate::event::Event;

/// Destination for dispatched events.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Returns the sink's identifier, used in logs.
    fn id(&self) -> &str;

    /// Delivers one event.
    async fn send(&self, event: &Event) -> EventResult<()>;
}

/// Sink that keeps every event in memory.
pub struct MemorySink {
    events: RwLock<Vec<Event>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Returns a copy of the recorded events.
    pub async fn events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    /// Returns recorded events with the given name.
    pub async fn events_named(&self, name: EventName) -> Vec<Event> {
        let events = self.events.read().await;
        events.iter().filter(|e| e.name == name).cloned().collect()
    }

    /// Returns the number of recorded events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Clears recorded events.
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for MemorySink {
    fn id(&self) -> &str {
        "memory"
    }

    async fn send(&self, event: &Event) -> EventResult<()> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}

/// Sink that writes each event to the `tracing` log.
#[derive(Debug, Default)]
pub struct TracingSink;

#[async_trait]
impl EventSink for TracingSink {
    fn id(&self) -> &str {
        "tracing"
    }

    async fn send(&self, event: &Event) -> EventResult<()> {
        let props = serde_json::to_string(&event.props)?;
        tracing::info!(
            event_id = %event.id,
            name = %event.name,
            domain = %event.domain,
            props = %props,
            "Custom event"
        );
        Ok(())
    }
}
