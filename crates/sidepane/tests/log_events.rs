#![forbid(unsafe_code)]

//! Structured log events emitted by the container.
//!
//! Run:
//!   cargo test -p sidepane --test log_events

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sidepane::{DraggableContainer, PanEvent, PaneSetup, PaneStage, Vector};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn message(&self) -> &str {
        self.fields.get("message").map_or("", String::as_str)
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

#[derive(Default)]
struct NullStage;

impl PaneStage<&'static str> for NullStage {
    fn mount_center(&mut self, _pane: &&'static str) {}
    fn mount_left(&mut self, _pane: &&'static str, _width: f64) {}
    fn mount_right(&mut self, _pane: &&'static str, _width: f64) {}
    fn set_offset(&mut self, _offset: f64) {}
    fn set_dim_alpha(&mut self, _alpha: f64) {}
    fn show_placeholder(&mut self, _message: &str) {}
    fn hide_placeholder(&mut self) {}
}

#[test]
fn setup_logs_configuration_at_info() {
    let events = capture(|| {
        let mut container = DraggableContainer::new(NullStage);
        container
            .setup(PaneSetup::new("inbox").left("menu").right_width(250.0))
            .unwrap();
    });
    let info = events
        .iter()
        .find(|e| e.level == tracing::Level::INFO)
        .expect("setup should log at INFO");
    assert_eq!(info.message(), "container panes configured");
    assert_eq!(info.fields.get("left").map(String::as_str), Some("true"));
    assert_eq!(info.fields.get("right").map(String::as_str), Some("false"));
    assert_eq!(info.fields.get("right_width").map(String::as_str), Some("250"));
}

#[test]
fn use_before_setup_logs_a_warning() {
    let events = capture(|| {
        let mut container: DraggableContainer<&'static str, NullStage> =
            DraggableContainer::new(NullStage);
        assert!(container.show_left_pane().is_err());
    });
    assert!(
        events
            .iter()
            .any(|e| e.level == tracing::Level::WARN && e.message() == "container used before setup")
    );
}

#[test]
fn release_logs_the_resolved_transition() {
    let events = capture(|| {
        let mut container = DraggableContainer::new(NullStage);
        container.setup(PaneSetup::new("inbox")).unwrap();
        container
            .handle_pan(&PanEvent::ended(Vector::horizontal(200.0), Vector::ZERO))
            .unwrap();
    });
    let release = events
        .iter()
        .find(|e| e.message() == "pan released")
        .expect("release should be logged");
    assert_eq!(release.level, tracing::Level::DEBUG);
    assert_eq!(release.fields.get("from").map(String::as_str), Some("center"));
    assert_eq!(release.fields.get("to").map(String::as_str), Some("left"));
    assert!(
        events
            .iter()
            .any(|e| e.message() == "presenting resting position")
    );
}
