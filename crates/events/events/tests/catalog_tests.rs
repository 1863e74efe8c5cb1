//! Integration tests for the analytics event catalog
//!
//! This test suite covers:
//! - Exact payload shapes at the dispatch boundary
//! - Mandatory props merging
//! - Configuration driven dispatch

use std::sync::Arc;

use openverse_events::{
    AnalyticsConfig, AnalyticsDispatcher, AnalyticsEvent, EventCatalog, EventError, EventName,
    MandatoryProps, MemorySink, ServerRendered, ViewPage, parse_config,
};
use serde_json::json;

fn props() -> MandatoryProps {
    MandatoryProps {
        language: "en".into(),
        breakpoint: "lg".into(),
        origin: "https://openverse.org".into(),
        pathname: "/search".into(),
        referrer: Some("https://example.com".into()),
        width: 1440,
        height: 900,
        ..Default::default()
    }
}

mod shape_tests {
    use super::*;

    #[test]
    fn test_view_page_exact_keys() {
        let catalog = EventCatalog::standard();

        let valid = json!({"name": "Home", "pathname": "/", "fromPathname": "/search"});
        assert!(catalog.validate("VIEW_PAGE", &valid).unwrap().is_valid());

        let missing = json!({"name": "Home", "pathname": "/"});
        assert!(!catalog.validate("VIEW_PAGE", &missing).unwrap().is_valid());

        let extra = json!({
            "name": "Home",
            "pathname": "/",
            "fromPathname": "/search",
            "referrer": "/about"
        });
        assert!(!catalog.validate("VIEW_PAGE", &extra).unwrap().is_valid());
    }

    #[test]
    fn test_every_definition_matches_typed_payload() {
        let catalog = EventCatalog::standard();

        for def in catalog.definitions() {
            let payload: serde_json::Map<String, serde_json::Value> = def
                .fields
                .iter()
                .map(|f| (f.clone(), json!("x")))
                .collect();

            let event = catalog
                .parse(def.name.as_str(), serde_json::Value::Object(payload))
                .unwrap();
            assert_eq!(event.name(), def.name);
        }
    }
}

mod dispatch_tests {
    use super::*;

    #[tokio::test]
    async fn test_view_page_dispatch() {
        let dispatcher = AnalyticsDispatcher::default();
        let sink = Arc::new(MemorySink::new());
        dispatcher.add_sink(sink.clone()).await;

        let event = AnalyticsEvent::from(ViewPage {
            name: "Home".into(),
            pathname: "/".into(),
            from_pathname: "/search".into(),
        });
        dispatcher.send_custom_event(event, &props()).await.unwrap();

        let events = sink.events_named(EventName::ViewPage).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].prop_str("pathname"), Some("/"));
        assert_eq!(events[0].prop_str("fromPathname"), Some("/search"));
        assert_eq!(events[0].prop_str("breakpoint"), Some("lg"));
        assert_eq!(events[0].prop_str("referrer"), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_raw_dispatch_from_config() {
        let config = parse_config(
            r#"
            [analytics]
            domain = "staging.openverse.org"
            "#,
        )
        .unwrap();
        let dispatcher = AnalyticsDispatcher::new(config);
        let sink = Arc::new(MemorySink::new());
        dispatcher.add_sink(sink.clone()).await;

        let sent = dispatcher
            .send_raw("SERVER_RENDERED", json!({"name": "Search"}), &props())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(sent.domain, "staging.openverse.org");

        let err = dispatcher
            .send_raw("SERVER_RENDERED", json!({"name": "Search", "set": "x"}), &props())
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::ValidationError(_)));
        assert_eq!(sink.len().await, 1);
    }

    #[tokio::test]
    async fn test_disabled_config() {
        let dispatcher = AnalyticsDispatcher::new(AnalyticsConfig {
            enabled: false,
            ..Default::default()
        });
        let sink = Arc::new(MemorySink::new());
        dispatcher.add_sink(sink.clone()).await;

        let event = AnalyticsEvent::from(ServerRendered { name: "Home".into() });
        assert!(dispatcher.send_custom_event(event, &props()).await.unwrap().is_none());
        assert_eq!(sink.len().await, 0);
    }
}
