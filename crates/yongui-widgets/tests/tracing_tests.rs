#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Widget spans and state events enabled:
//!   cargo test -p yongui-widgets --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p yongui-widgets --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[cfg(feature = "tracing")]
use yongui_core::geometry::Rect;
use yongui_render::frame::Frame;
use yongui_widgets::StatefulWidget;
#[cfg(feature = "tracing")]
use yongui_widgets::Widget;
#[cfg(feature = "tracing")]
use yongui_widgets::block::Block;
use yongui_widgets::dropdown::{Dropdown, DropdownState};
#[cfg(feature = "tracing")]
use yongui_widgets::dropdown::{DropdownAction, DropdownList, DropdownTrigger};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    message: Option<String>,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records span metadata and events.
struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl Capture {
    fn new() -> (Self, CaptureHandle) {
        let spans = Arc::new(Mutex::new(Vec::new()));
        let events = Arc::new(Mutex::new(Vec::new()));
        let handle = CaptureHandle {
            spans: spans.clone(),
            events: events.clone(),
        };
        (Self { spans, events }, handle)
    }
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn widget_names(&self) -> Vec<String> {
        self.spans()
            .into_iter()
            .filter(|s| s.name == "widget_render")
            .filter_map(|s| s.fields.get("widget").cloned())
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message");
        self.events
            .lock()
            .unwrap()
            .push(CapturedEvent { message, fields });
    }
}

fn with_captured<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let (layer, handle) = Capture::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    handle
}

fn fruits() -> DropdownState {
    DropdownState::new([("apple", "Apple"), ("banana", "Banana"), ("cherry", "Cherry")])
}

#[test]
#[cfg(feature = "tracing")]
fn spans_created_for_dropdown_parts() {
    let handle = with_captured(|| {
        let area = Rect::new(0, 0, 20, 10);
        let mut frame = Frame::new(20, 10);
        let mut state = fruits();
        state.open();

        Block::bordered().render(area, &mut frame);
        DropdownTrigger::new().render(Rect::new(0, 0, 20, 3), &mut frame, &mut state);
        DropdownList::new().render(Rect::new(0, 3, 20, 7), &mut frame, &mut state);
    });

    let names = handle.widget_names();
    for widget in ["Block", "DropdownTrigger", "DropdownList"] {
        assert!(
            names.iter().any(|n| n.contains(widget)),
            "missing {widget} span, got: {names:?}"
        );
    }
}

#[test]
#[cfg(feature = "tracing")]
fn composite_span_is_parent_of_parts() {
    let handle = with_captured(|| {
        let mut frame = Frame::new(20, 10);
        let mut state = fruits();
        state.open();
        Dropdown::new().render(frame.bounds(), &mut frame, &mut state);
    });

    let spans = handle.spans();
    let trigger = spans
        .iter()
        .find(|s| s.fields.get("widget").is_some_and(|w| w.contains("DropdownTrigger")))
        .expect("trigger span");
    assert_eq!(trigger.parent_name.as_deref(), Some("widget_render"));

    let composite = spans
        .iter()
        .find(|s| s.fields.get("widget").is_some_and(|w| w == "Dropdown"))
        .expect("composite span");
    assert_eq!(composite.fields.get("w").map(String::as_str), Some("20"));
    assert_eq!(composite.fields.get("h").map(String::as_str), Some("10"));
}

#[test]
#[cfg(feature = "tracing")]
fn state_transitions_are_logged() {
    let handle = with_captured(|| {
        let mut state = fruits();
        state.toggle(None);
        state.apply(DropdownAction::FocusNext);
        state.activate(0);
        state.select_index(Some(9));
    });

    let events = handle.events();
    let messages: Vec<_> = events.iter().filter_map(|e| e.message.as_deref()).collect();
    assert!(messages.contains(&"dropdown toggled"), "got: {messages:?}");
    assert!(messages.contains(&"dropdown item activated"), "got: {messages:?}");
    assert!(
        messages.contains(&"select index out of range"),
        "got: {messages:?}"
    );

    let toggled = events
        .iter()
        .find(|e| e.message.as_deref() == Some("dropdown toggled"))
        .expect("toggle event");
    assert_eq!(toggled.fields.get("open").map(String::as_str), Some("true"));
}

/// Without `--features tracing` the span and event macros compile away.
#[test]
fn zero_overhead_when_disabled() {
    let handle = with_captured(|| {
        let mut frame = Frame::new(20, 8);
        let mut state = fruits();
        state.toggle(None);
        state.activate(1);
        Dropdown::new().render(frame.bounds(), &mut frame, &mut state);
    });

    if cfg!(feature = "tracing") {
        assert!(!handle.widget_names().is_empty());
    } else {
        assert!(handle.spans().is_empty(), "spans leaked: {:?}", handle.spans());
        assert!(handle.events().is_empty());
    }
}
