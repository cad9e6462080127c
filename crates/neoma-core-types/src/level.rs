//! Log levels and their numeric severities
//!
//! The six level names mirror the host framework's logger interface. Each
//! maps to a fixed severity used for threshold comparisons and written to
//! structured records under the `level` key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric rank of a log level
///
/// Only the relative ordering matters for filtering; the concrete values
/// follow the structured-logger convention (10 through 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    pub const VERBOSE: Severity = Severity(10);
    pub const DEBUG: Severity = Severity(20);
    pub const LOG: Severity = Severity(30);
    pub const WARN: Severity = Severity(40);
    pub const ERROR: Severity = Severity(50);
    pub const FATAL: Severity = Severity(60);

    /// Get the raw numeric value
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Log level names, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Verbose,
    Debug,
    /// General information; the default threshold
    #[default]
    Log,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// All levels in ascending severity order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Log,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Get the numeric severity for this level
    pub fn severity(self) -> Severity {
        match self {
            LogLevel::Verbose => Severity::VERBOSE,
            LogLevel::Debug => Severity::DEBUG,
            LogLevel::Log => Severity::LOG,
            LogLevel::Warn => Severity::WARN,
            LogLevel::Error => Severity::ERROR,
            LogLevel::Fatal => Severity::FATAL,
        }
    }

    /// Get the host-facing level name
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
            LogLevel::Log => "log",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Get the level label used by the structured-logging backend
    pub fn backend_label(self) -> &'static str {
        match self {
            LogLevel::Verbose => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Log => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Whether a call at `self` passes a `threshold`
    pub fn is_enabled_for(self, threshold: LogLevel) -> bool {
        self.severity() >= threshold.severity()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string does not name a log level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    value: String,
}

impl ParseLevelError {
    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level '{}' (expected one of verbose, debug, log, warn, error, fatal)",
            self.value
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLevelError {
                value: s.to_string(),
            })
    }
}
