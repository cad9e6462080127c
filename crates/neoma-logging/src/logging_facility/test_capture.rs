//! Test capture mode for deterministic logging assertions
//!
//! This module provides a subscriber layer that captures tracing events in
//! memory, so tests can assert on what `TracingSink` forwarded.

use crate::sinks::TRACING_TARGET;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// A captured event with all its fields rendered as strings
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub message: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Whether this event came from `TracingSink`
    pub fn is_from_sink(&self) -> bool {
        self.target == TRACING_TARGET
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Test capture layer for collecting events
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        let capture = TestCapture { events };
        (layer, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.fields.remove("message"),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get captured events whose message equals `message`
    pub fn events_with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message.as_deref() == Some(message))
            .collect()
    }

    /// Assert that an event with the given message exists
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_message_logged(&self, message: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.message.as_deref() == Some(message));
        assert!(
            found,
            "Expected event with message {:?} not found in {} captured events",
            message,
            events.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first call and
/// returns the shared capture instance. Tests in one binary share it, so
/// each test should log messages unique to itself.
///
/// # Example
///
/// ```
/// use neoma_logging::logging_facility::test_capture::init_test_capture;
/// use neoma_logging::sinks::TracingSink;
/// use neoma_logging::{ApplicationLogger, LoggerService, LoggingOptions};
///
/// let capture = init_test_capture();
/// let logger = ApplicationLogger::new(LoggingOptions::new().with_destination(TracingSink));
/// logger.warn("captured in doc".into(), &[]);
/// capture.assert_message_logged("captured in doc");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_event_clone() {
        let event = CapturedEvent {
            level: Level::INFO,
            target: TRACING_TARGET.to_string(),
            message: Some("hello".to_string()),
            fields: HashMap::new(),
        };

        let cloned = event.clone();
        assert_eq!(cloned.level, event.level);
        assert_eq!(cloned.message, event.message);
        assert!(cloned.is_from_sink());
    }

    #[test]
    fn test_poisoned_capture_keeps_events() {
        let (_layer, capture) = TestCaptureLayer::new();
        capture.events.lock().unwrap().push(CapturedEvent {
            level: Level::WARN,
            target: TRACING_TARGET.to_string(),
            message: Some("kept".to_string()),
            fields: HashMap::new(),
        });

        let holder = capture.clone();
        let result = std::thread::spawn(move || {
            let _guard = holder.events.lock().unwrap();
            panic!("poison the capture");
        })
        .join();
        assert!(result.is_err());

        capture.assert_message_logged("kept");
        assert_eq!(capture.events().len(), 1);
        capture.clear();
        assert!(capture.events().is_empty());
    }
}
