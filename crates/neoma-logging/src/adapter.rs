//! Application logger: level filtering in front of a sink

use crate::config::LoggingOptions;
use crate::record::normalize;
use crate::service::LoggerService;
use crate::sink::Sink;
use neoma_core_types::LogLevel;
use serde_json::Value;
use std::sync::Arc;

/// Logger that normalizes calls into records and forwards them to a sink.
///
/// Configuration is captured once at construction and never changes. A call
/// whose level is below the threshold has no effect at all; a call at or
/// above it produces exactly one synchronous [`Sink::accept`].
///
/// The logger holds no mutable state, so it can be shared freely across
/// threads. Concurrency of the sink itself is the sink's concern.
#[derive(Clone)]
pub struct ApplicationLogger {
    min_level: LogLevel,
    sink: Arc<dyn Sink>,
}

impl ApplicationLogger {
    /// Build a logger from options
    ///
    /// Without a destination the logger writes to [`crate::sinks::TracingSink`].
    pub fn new(options: LoggingOptions) -> Self {
        Self {
            min_level: options.log_level(),
            sink: options.sink_or_default(),
        }
    }

    /// The minimum level forwarded to the sink
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a call at `level` reaches the sink
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_for(self.min_level)
    }

    /// Name of the sink records are forwarded to
    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }
}

impl Default for ApplicationLogger {
    fn default() -> Self {
        Self::new(LoggingOptions::default())
    }
}

impl LoggerService for ApplicationLogger {
    fn emit(&self, level: LogLevel, message: Value, context: &[Value]) {
        if !self.is_enabled(level) {
            return;
        }
        self.sink.accept(normalize(level, message, context));
    }
}

impl std::fmt::Debug for ApplicationLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationLogger")
            .field("min_level", &self.min_level)
            .field("sink", &self.sink.name())
            .finish()
    }
}
