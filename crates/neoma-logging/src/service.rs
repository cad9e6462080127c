//! Logger capability exposed to host code.

use neoma_core_types::LogLevel;
use serde_json::Value;

/// Logging interface with one method per level.
///
/// Every method accepts a message and a (possibly empty) slice of context
/// arguments. The message is forwarded verbatim; the context arguments are
/// normalized as described in [`crate::record::normalize`].
///
/// Implementations must be `Send + Sync` so one logger can be shared across
/// threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use neoma_logging::{ApplicationLogger, LoggerService};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let logger: Arc<dyn LoggerService> = Arc::new(ApplicationLogger::default());
/// logger.warn("disk almost full".into(), &[json!({"free_mb": 120})]);
/// ```
pub trait LoggerService: Send + Sync {
    /// Log `message` at `level`.
    ///
    /// The level-specific methods delegate here.
    fn emit(&self, level: LogLevel, message: Value, context: &[Value]);

    fn verbose(&self, message: Value, context: &[Value]) {
        self.emit(LogLevel::Verbose, message, context);
    }

    fn debug(&self, message: Value, context: &[Value]) {
        self.emit(LogLevel::Debug, message, context);
    }

    /// Log at the general-information level.
    fn log(&self, message: Value, context: &[Value]) {
        self.emit(LogLevel::Log, message, context);
    }

    fn warn(&self, message: Value, context: &[Value]) {
        self.emit(LogLevel::Warn, message, context);
    }

    fn error(&self, message: Value, context: &[Value]) {
        self.emit(LogLevel::Error, message, context);
    }

    fn fatal(&self, message: Value, context: &[Value]) {
        self.emit(LogLevel::Fatal, message, context);
    }
}
