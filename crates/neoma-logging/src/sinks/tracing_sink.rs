//! Tracing library adapter implementation.

use crate::record::LogRecord;
use crate::sink::Sink;
use neoma_core_types::LogLevel;
use serde_json::Value;

/// Target attached to every event emitted by [`TracingSink`]
pub const TRACING_TARGET: &str = "neoma";

/// Sink that delegates to the `tracing` crate.
///
/// This is the default destination when a logger is built without one.
/// Levels map onto `tracing` levels (`verbose` → TRACE, `log` → INFO).
/// `tracing` has no fatal level, so fatal records are emitted at ERROR with
/// `fatal = true`. Each event carries the numeric `severity` and the
/// record's extra fields as a JSON string under `fields`.
///
/// Thread safety is that of the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

fn message_text(msg: &Value) -> String {
    match msg {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl Sink for TracingSink {
    fn accept(&self, record: LogRecord) {
        let severity = record.severity().value();
        let message = message_text(record.msg());
        let fields = if record.fields().is_empty() {
            String::new()
        } else {
            Value::Object(record.fields().clone()).to_string()
        };

        match record.level() {
            LogLevel::Verbose => {
                tracing::trace!(target: TRACING_TARGET, severity, fields = %fields, "{}", message)
            }
            LogLevel::Debug => {
                tracing::debug!(target: TRACING_TARGET, severity, fields = %fields, "{}", message)
            }
            LogLevel::Log => {
                tracing::info!(target: TRACING_TARGET, severity, fields = %fields, "{}", message)
            }
            LogLevel::Warn => {
                tracing::warn!(target: TRACING_TARGET, severity, fields = %fields, "{}", message)
            }
            LogLevel::Error => {
                tracing::error!(target: TRACING_TARGET, severity, fields = %fields, "{}", message)
            }
            LogLevel::Fatal => {
                tracing::error!(target: TRACING_TARGET, severity, fatal = true, fields = %fields, "{}", message)
            }
        }
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tracing_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingSink>();
    }

    #[test]
    fn test_message_text_unquotes_strings() {
        assert_eq!(message_text(&json!("plain")), "plain");
        assert_eq!(message_text(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(message_text(&Value::Null), "null");
    }

    #[test]
    fn test_tracing_sink_as_trait_object() {
        let sink: Box<dyn Sink> = Box::new(TracingSink::new());
        sink.accept(LogRecord::new(LogLevel::Fatal, "no subscriber"));
        assert_eq!(sink.name(), "tracing");
    }
}
