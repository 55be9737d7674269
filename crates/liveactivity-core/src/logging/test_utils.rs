//! Test utilities for capturing and asserting on tracing events.
//!
//! [`capture_logs`] installs a thread-local subscriber that records every
//! event, so tests can check what the payload crates logged.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// A captured tracing event for assertion.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    /// The log level.
    pub level: Level,
    /// The target module.
    pub target: String,
    /// The formatted message.
    pub message: String,
    /// Field key-value pairs.
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    /// Value of a named field, if recorded.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Thread-safe store for captured events.
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedLogs {
    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get all captured events.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().clone()
    }

    /// Check if any event at the given level contains the message substring.
    pub fn has_event(&self, level: Level, message_contains: &str) -> bool {
        self.lock()
            .iter()
            .any(|e| e.level == level && e.message.contains(message_contains))
    }

    /// Count events at a specific level.
    pub fn count_at_level(&self, level: Level) -> usize {
        self.lock().iter().filter(|e| e.level == level).count()
    }

    /// First event whose message contains the substring.
    pub fn find(&self, message_contains: &str) -> Option<CapturedEvent> {
        self.lock()
            .iter()
            .find(|e| e.message.contains(message_contains))
            .cloned()
    }

    /// Clear all captured events.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

struct CaptureLayer {
    logs: CapturedLogs,
}

/// Pulls the message and fields out of an event.
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn push(&mut self, field: &tracing::field::Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_owned(), value));
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field, value.to_owned());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push(field, value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push(field, value.to_string());
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.push(field, value.to_string());
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor {
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut visitor);

        self.logs.lock().push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

/// Install a test subscriber that captures all events and returns a handle
/// to the captured logs.
///
/// Uses `set_default`, so it only applies to the current thread and is safe
/// in parallel tests. The returned guard must stay alive for the duration of
/// the test.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let layer = CaptureLayer { logs: logs.clone() };

    let subscriber = tracing_subscriber::registry()
        .with(layer)
        .with(LevelFilter::TRACE);

    let guard = subscriber.set_default();
    (logs, guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_warn_event() {
        let (logs, _guard) = capture_logs();
        tracing::warn!("something went wrong");
        assert!(logs.has_event(Level::WARN, "something went wrong"));
    }

    #[test]
    fn filter_by_level() {
        let (logs, _guard) = capture_logs();
        tracing::debug!("debug");
        tracing::warn!("warn");
        tracing::warn!("warn again");

        assert_eq!(logs.count_at_level(Level::DEBUG), 1);
        assert_eq!(logs.count_at_level(Level::WARN), 2);
        assert_eq!(logs.count_at_level(Level::ERROR), 0);
    }

    #[test]
    fn event_fields_captured() {
        let (logs, _guard) = capture_logs();
        tracing::debug!(field = "mdm", bytes = 42_u64, "payload serialized");

        let event = logs.find("payload serialized").unwrap();
        assert_eq!(event.field("field"), Some("mdm"));
        assert_eq!(event.field("bytes"), Some("42"));
        assert_eq!(event.field("missing"), None);
    }

    #[test]
    fn clear_logs() {
        let (logs, _guard) = capture_logs();
        tracing::info!("event 1");
        assert_eq!(logs.events().len(), 1);

        logs.clear();
        assert!(logs.events().is_empty());
    }
}
