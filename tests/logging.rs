//! Log capture tests for the `tracing` feature.
//!
//!   cargo test --features tracing --test logging

use std::sync::{Arc, Mutex};

use recycling_list::{HeadlessContainer, Recycler, RecyclerOptions, ScrollNotifier};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

/// A captured event: level plus its `message` field.
#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    message: String,
}

/// A layer that records every event emitted under the crate's target.
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if event.metadata().target() != "recycling_list" {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

fn with_captured_events(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = events.lock().unwrap().clone();
    out
}

fn list(count: usize, pool: usize, viewport: u32) -> Recycler<usize, usize, HeadlessContainer> {
    let options = RecyclerOptions::new()
        .with_container(HeadlessContainer::new())
        .with_rows(0..count)
        .with_build_surface(|&row: &usize| row)
        .with_update_surface(|&row: &usize, s: &mut usize| *s = row)
        .with_fixed_height(10)
        .with_pool_size(pool)
        .with_viewport_height(viewport);
    Recycler::new(options).unwrap()
}

#[test]
fn construction_and_reset_log_at_debug() {
    let events = with_captured_events(|| {
        let mut l = list(1000, 100, 400);
        l.reset();
    });
    let debug: Vec<_> = events.iter().filter(|e| e.level == Level::DEBUG).collect();
    assert!(debug.iter().any(|e| e.message == "Recycler::new"));
    assert_eq!(debug.iter().filter(|e| e.message == "reset").count(), 2);
}

#[test]
fn scroll_passes_log_at_trace() {
    let events = with_captured_events(|| {
        let mut l = list(1000, 100, 400);
        l.on_scroll(5_000);
        l.on_scroll(5_000);
    });
    let recycles = events
        .iter()
        .filter(|e| e.level == Level::TRACE && e.message == "recycle")
        .count();
    assert_eq!(recycles, 1);
    assert!(
        events
            .iter()
            .any(|e| e.message == "locate: midpoint row unchanged")
    );
}

#[test]
fn odd_pool_shortfall_logs_at_trace() {
    // Pool 5 yields a 6-row window, so one row is unserved on every pass.
    let events = with_captured_events(|| {
        let mut l = list(100, 5, 20);
        l.on_scroll(500);
        assert_eq!(l.last_report().unwrap().unserved, 1);
    });
    assert!(
        events
            .iter()
            .any(|e| e.level == Level::TRACE && e.message.contains("wider than the pool"))
    );
    assert!(events.iter().all(|e| e.level != Level::WARN));
}

#[test]
fn dropped_notification_logs_a_warning() {
    let events = with_captured_events(|| {
        let notifier = ScrollNotifier::new();
        let relay = notifier.clone();
        let options = RecyclerOptions::new()
            .with_container(HeadlessContainer::new())
            .with_rows(0..1000usize)
            .with_build_surface(|&row: &usize| row)
            .with_update_surface(move |&row: &usize, s: &mut usize| {
                *s = row;
                let _ = relay.notify(0);
            })
            .with_fixed_height(10)
            .with_pool_size(100)
            .with_notifier(notifier);
        let mut l = Recycler::new(options).unwrap();
        l.on_scroll(5_000);
        assert_eq!(l.dropped_notifications(), 100);
    });
    let dropped = events
        .iter()
        .filter(|e| e.level == Level::WARN && e.message.contains("notification dropped"))
        .count();
    assert_eq!(dropped, 100);
}
