//! Module wiring
//!
//! `LoggingModule` is the composition root for host code: it captures the
//! options once and owns the single `ApplicationLogger` handed out to every
//! consumer.

use crate::adapter::ApplicationLogger;
use crate::config::{LoggingConfiguration, LoggingOptions};
use neoma_errors::ConfigError;
use std::sync::Arc;

/// Provides a configured, shared [`ApplicationLogger`]
///
/// # Example
///
/// ```
/// use neoma_logging::{LogLevel, LoggerService, LoggingModule, LoggingOptions};
/// use neoma_logging::sinks::ArraySink;
///
/// let sink = ArraySink::new();
/// let module = LoggingModule::for_root(
///     LoggingOptions::new()
///         .with_log_level(LogLevel::Warn)
///         .with_destination(sink.clone()),
/// );
///
/// module.logger().log("below threshold".into(), &[]);
/// module.logger().error("kept".into(), &[]);
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LoggingModule {
    options: LoggingOptions,
    logger: Arc<ApplicationLogger>,
}

impl LoggingModule {
    /// Module with default options: `log` threshold, default sink
    pub fn new() -> Self {
        Self::for_root(LoggingOptions::default())
    }

    /// Module with explicit options
    pub fn for_root(options: LoggingOptions) -> Self {
        let logger = Arc::new(ApplicationLogger::new(options.clone()));
        tracing::debug!(
            min_level = %logger.min_level(),
            sink = logger.sink_name(),
            "logging module configured"
        );
        Self { options, logger }
    }

    /// Module built from external configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the level or destination is invalid.
    pub fn from_configuration(config: &LoggingConfiguration) -> Result<Self, ConfigError> {
        Ok(Self::for_root(config.resolve()?))
    }

    /// The shared logger instance
    pub fn logger(&self) -> Arc<ApplicationLogger> {
        Arc::clone(&self.logger)
    }

    /// The options this module was built with
    pub fn options(&self) -> &LoggingOptions {
        &self.options
    }
}

impl Default for LoggingModule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neoma_core_types::LogLevel;

    #[test]
    fn test_logger_is_shared() {
        let module = LoggingModule::new();
        assert!(Arc::ptr_eq(&module.logger(), &module.logger()));
    }

    #[test]
    fn test_plain_module_defaults() {
        let module = LoggingModule::default();
        assert_eq!(module.options().log_level(), LogLevel::Log);
        assert_eq!(module.logger().min_level(), LogLevel::Log);
        assert_eq!(module.logger().sink_name(), "tracing");
    }

    #[test]
    fn test_from_configuration_propagates_errors() {
        let config = LoggingConfiguration {
            log_level: Some("loud".to_string()),
            log_destination: None,
        };
        assert!(LoggingModule::from_configuration(&config).is_err());
    }
}
