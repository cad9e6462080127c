//! Logger configuration
//!
//! [`LoggingOptions`] is the in-process form handed to a logger: a minimum
//! level and an optional sink. [`LoggingConfiguration`] is the external form
//! read from TOML files and environment variables; [`LoggingConfiguration::resolve`]
//! turns it into options with a concrete sink.

use crate::sink::Sink;
use crate::sinks::{JsonLinesSink, NoopSink, TracingSink};
use neoma_core_types::LogLevel;
use neoma_errors::ConfigError;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Environment variable overriding `logLevel`
pub const ENV_LOG_LEVEL: &str = "NEOMA_LOG_LEVEL";

/// Environment variable overriding `logDestination`
pub const ENV_LOG_DESTINATION: &str = "NEOMA_LOG_DESTINATION";

/// Options captured by a logger at construction
///
/// A missing destination is not an error: the logger falls back to
/// [`TracingSink`].
#[derive(Clone, Default)]
pub struct LoggingOptions {
    log_level: LogLevel,
    log_destination: Option<Arc<dyn Sink>>,
}

impl LoggingOptions {
    /// Options with the `log` threshold and no explicit destination
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum level to forward
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set the destination sink
    pub fn with_destination(mut self, sink: impl Sink + 'static) -> Self {
        self.log_destination = Some(Arc::new(sink));
        self
    }

    /// Set a destination sink that is already shared
    pub fn with_shared_destination(mut self, sink: Arc<dyn Sink>) -> Self {
        self.log_destination = Some(sink);
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn log_destination(&self) -> Option<&Arc<dyn Sink>> {
        self.log_destination.as_ref()
    }

    /// The configured sink, or the default when none was given
    pub(crate) fn sink_or_default(&self) -> Arc<dyn Sink> {
        self.log_destination
            .clone()
            .unwrap_or_else(|| Arc::new(TracingSink::new()))
    }
}

impl std::fmt::Debug for LoggingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingOptions")
            .field("log_level", &self.log_level)
            .field(
                "log_destination",
                &self.log_destination.as_ref().map(|sink| sink.name()),
            )
            .finish()
    }
}

/// Where records go, as named in external configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// The `tracing` backend
    #[default]
    Tracing,
    Stdout,
    Stderr,
    /// Discard everything
    None,
    /// Append JSON lines to a file
    File(PathBuf),
}

impl FromStr for Destination {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "" => Err(ConfigError::EmptyDestination),
            "tracing" => Ok(Destination::Tracing),
            "stdout" => Ok(Destination::Stdout),
            "stderr" => Ok(Destination::Stderr),
            "none" => Ok(Destination::None),
            path => Ok(Destination::File(PathBuf::from(path))),
        }
    }
}

impl Destination {
    /// Open the sink this destination names
    ///
    /// # Errors
    ///
    /// Returns `DestinationUnavailable` when a file cannot be opened for appending.
    pub fn open(&self) -> Result<Arc<dyn Sink>, ConfigError> {
        let sink: Arc<dyn Sink> = match self {
            Destination::Tracing => Arc::new(TracingSink::new()),
            Destination::Stdout => Arc::new(JsonLinesSink::new(std::io::stdout())),
            Destination::Stderr => Arc::new(JsonLinesSink::new(std::io::stderr())),
            Destination::None => Arc::new(NoopSink),
            Destination::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| ConfigError::DestinationUnavailable {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                Arc::new(JsonLinesSink::new(file))
            }
        };
        Ok(sink)
    }
}

/// External logging configuration
///
/// Keys are accepted in camelCase (`logLevel`, `logDestination`) or
/// snake_case. Both are optional.
///
/// ```toml
/// logLevel = "warn"
/// logDestination = "/var/log/app.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggingConfiguration {
    #[serde(default, alias = "log_level")]
    pub log_level: Option<String>,
    #[serde(default, alias = "log_destination")]
    pub log_destination: Option<String>,
}

impl LoggingConfiguration {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `FileUnreadable` if the file cannot be read, or `Parse` if
    /// its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::FileUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from `NEOMA_LOG_LEVEL` and `NEOMA_LOG_DESTINATION`
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(level);
        }
        if let Some(destination) = lookup(ENV_LOG_DESTINATION) {
            self.log_destination = Some(destination);
        }
        self
    }

    /// The configured level, defaulting to `log`
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel` if the name is not a known level.
    pub fn level(&self) -> Result<LogLevel, ConfigError> {
        match &self.log_level {
            Some(name) => Ok(name.parse::<LogLevel>()?),
            None => Ok(LogLevel::default()),
        }
    }

    /// The configured destination, if any
    ///
    /// # Errors
    ///
    /// Returns `EmptyDestination` for a blank destination string.
    pub fn destination(&self) -> Result<Option<Destination>, ConfigError> {
        self.log_destination
            .as_deref()
            .map(Destination::from_str)
            .transpose()
    }

    /// Build logger options, opening the destination sink
    ///
    /// With no destination configured the options carry none, and the
    /// logger uses its default sink.
    ///
    /// # Errors
    ///
    /// Returns the first invalid level or destination encountered.
    pub fn resolve(&self) -> Result<LoggingOptions, ConfigError> {
        let mut options = LoggingOptions::new().with_log_level(self.level()?);
        if let Some(destination) = self.destination()? {
            options = options.with_shared_destination(destination.open()?);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = LoggingOptions::new();
        assert_eq!(options.log_level(), LogLevel::Log);
        assert!(options.log_destination().is_none());
        assert_eq!(options.sink_or_default().name(), "tracing");
    }

    #[test]
    fn test_options_debug_names_sink() {
        let options = LoggingOptions::new().with_destination(NoopSink);
        let debug_str = format!("{:?}", options);
        assert!(debug_str.contains("Some(\"noop\")"));
    }

    #[test]
    fn test_destination_parse() {
        assert_eq!("tracing".parse::<Destination>(), Ok(Destination::Tracing));
        assert_eq!(" stdout ".parse::<Destination>(), Ok(Destination::Stdout));
        assert_eq!("none".parse::<Destination>(), Ok(Destination::None));
        assert_eq!(
            "logs/app.jsonl".parse::<Destination>(),
            Ok(Destination::File(PathBuf::from("logs/app.jsonl")))
        );
        assert_eq!(
            "  ".parse::<Destination>(),
            Err(ConfigError::EmptyDestination)
        );
    }

    #[test]
    fn test_configuration_camel_and_snake_case() {
        let camel = LoggingConfiguration::from_toml_str(r#"logLevel = "warn""#).unwrap();
        let snake = LoggingConfiguration::from_toml_str(r#"log_level = "warn""#).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.level(), Ok(LogLevel::Warn));
    }

    #[test]
    fn test_configuration_rejects_unknown_keys() {
        let err = LoggingConfiguration::from_toml_str(r#"level = "warn""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = LoggingConfiguration::from_toml_str(
            r#"
            logLevel = "warn"
            logDestination = "stdout"
            "#,
        )
        .unwrap()
        .with_overrides_from(|key| (key == ENV_LOG_LEVEL).then(|| "debug".to_string()));

        assert_eq!(config.level(), Ok(LogLevel::Debug));
        assert_eq!(config.destination(), Ok(Some(Destination::Stdout)));
    }

    #[test]
    fn test_resolve_unknown_level() {
        let config = LoggingConfiguration {
            log_level: Some("info".to_string()),
            log_destination: None,
        };
        let err = config.resolve().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownLevel {
                value: "info".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_without_destination_leaves_default() {
        let options = LoggingConfiguration::default().resolve().unwrap();
        assert_eq!(options.log_level(), LogLevel::Log);
        assert!(options.log_destination().is_none());
    }
}
