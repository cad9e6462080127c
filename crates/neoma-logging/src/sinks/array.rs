//! In-memory sink for capturing records in tests

use crate::record::LogRecord;
use crate::sink::Sink;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A sink that stores every accepted record in a shared vector.
///
/// Clones share the same buffer, so a test can hand one clone to the logger
/// and keep another for assertions. Concurrent `accept` calls serialize on
/// an internal mutex.
///
/// # Example
///
/// ```
/// use neoma_logging::{ApplicationLogger, LoggerService, LoggingOptions};
/// use neoma_logging::sinks::ArraySink;
///
/// let sink = ArraySink::new();
/// let logger = ApplicationLogger::new(LoggingOptions::new().with_destination(sink.clone()));
///
/// logger.log("test message".into(), &[]);
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.values()[0]["level"], 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArraySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl ArraySink {
    /// Create a sink with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that appends to a caller-owned buffer
    pub fn with_buffer(records: Arc<Mutex<Vec<LogRecord>>>) -> Self {
        Self { records }
    }

    /// The buffer, recovered even if another holder panicked mid-push
    fn buffer(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all records accepted so far
    pub fn logs(&self) -> Vec<LogRecord> {
        self.buffer().clone()
    }

    /// Snapshot of all records rendered as JSON values
    pub fn values(&self) -> Vec<Value> {
        self.logs().iter().map(LogRecord::to_value).collect()
    }

    /// Number of records accepted so far
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all stored records
    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Sink for ArraySink {
    fn accept(&self, record: LogRecord) {
        self.buffer().push(record);
    }

    fn name(&self) -> &'static str {
        "array"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neoma_core_types::LogLevel;

    #[test]
    fn test_clones_share_buffer() {
        let sink = ArraySink::new();
        let clone = sink.clone();

        clone.accept(LogRecord::new(LogLevel::Warn, "first"));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.logs()[0].msg(), "first");
    }

    #[test]
    fn test_with_buffer_appends_to_caller_vec() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = ArraySink::with_buffer(buffer.clone());

        sink.accept(LogRecord::new(LogLevel::Log, "a"));
        sink.accept(LogRecord::new(LogLevel::Log, "b"));

        assert_eq!(buffer.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_poisoned_buffer_keeps_records() {
        let sink = ArraySink::new();
        sink.accept(LogRecord::new(LogLevel::Log, "before"));

        let holder = sink.clone();
        let result = std::thread::spawn(move || {
            let _guard = holder.records.lock().unwrap();
            panic!("poison the buffer");
        })
        .join();
        assert!(result.is_err());
        assert!(sink.records.is_poisoned());

        sink.accept(LogRecord::new(LogLevel::Warn, "after"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.logs()[1].msg(), "after");
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_logs_is_a_snapshot() {
        let sink = ArraySink::new();
        sink.accept(LogRecord::new(LogLevel::Log, "a"));

        let snapshot = sink.logs();
        sink.accept(LogRecord::new(LogLevel::Log, "b"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_clear() {
        let sink = ArraySink::new();
        sink.accept(LogRecord::new(LogLevel::Log, "a"));
        sink.clear();
        assert!(sink.is_empty());
    }
}
