//! Error facility for Neoma logging
//!
//! Configuration problems are reported through [`ConfigError`] and can be
//! converted into the structured [`ExError`], which carries a stable error
//! code for programmatic handling.

use neoma_core_types::ParseLevelError;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidLevel,
    InvalidDestination,
    ConfigParse,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidLevel => "ERR_INVALID_LEVEL",
            ExErrorKind::InvalidDestination => "ERR_INVALID_DESTINATION",
            ExErrorKind::ConfigParse => "ERR_CONFIG_PARSE",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised while building a logger from configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Level name is not one of the six known levels
    #[error("Unknown log level '{value}' (expected one of verbose, debug, log, warn, error, fatal)")]
    UnknownLevel { value: String },

    /// Destination string was empty
    #[error("Log destination must not be empty")]
    EmptyDestination,

    /// Destination file could not be opened for appending
    #[error("Cannot open log destination {path}: {reason}")]
    DestinationUnavailable { path: String, reason: String },

    /// Configuration file could not be read
    #[error("Cannot read configuration file {path}: {reason}")]
    FileUnreadable { path: String, reason: String },

    /// Configuration text could not be parsed
    #[error("Invalid logging configuration: {reason}")]
    Parse { reason: String },
}

impl From<ParseLevelError> for ConfigError {
    fn from(err: ParseLevelError) -> Self {
        ConfigError::UnknownLevel {
            value: err.value().to_string(),
        }
    }
}

impl From<ConfigError> for ExError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        let (kind, op) = match &err {
            ConfigError::UnknownLevel { .. } => (ExErrorKind::InvalidLevel, "parse_level"),
            ConfigError::EmptyDestination | ConfigError::DestinationUnavailable { .. } => {
                (ExErrorKind::InvalidDestination, "open_destination")
            }
            ConfigError::FileUnreadable { .. } => (ExErrorKind::Io, "read_config"),
            ConfigError::Parse { .. } => (ExErrorKind::ConfigParse, "parse_config"),
        };
        ExError::new(kind).with_op(op).with_message(message)
    }
}
