//! Neoma Logging - structured logging facade for host applications
//!
//! This crate adapts a structured sink to a six-level logger interface:
//! - `LoggerService`: the logger capability (`verbose` through `fatal`)
//! - `ApplicationLogger`: level filtering and call normalization in front of a `Sink`
//! - `LogRecord`: the `{level, msg, ...fields}` payload handed to sinks
//! - Built-in sinks: tracing (default), JSON lines, in-memory, no-op
//! - `LoggingModule`: composition root owning one shared logger
//! - `LoggingConfiguration`: TOML and environment configuration
//!
//! # Usage
//!
//! ```
//! use neoma_logging::{LogLevel, LoggerService, LoggingModule, LoggingOptions};
//! use neoma_logging::sinks::ArraySink;
//! use serde_json::json;
//!
//! let sink = ArraySink::new();
//! let module = LoggingModule::for_root(
//!     LoggingOptions::new()
//!         .with_log_level(LogLevel::Verbose)
//!         .with_destination(sink.clone()),
//! );
//!
//! let logger = module.logger();
//! logger.log("hello".into(), &[json!({"ctx": "startup"})]);
//!
//! assert_eq!(sink.values()[0], json!({"level": 30, "msg": "hello", "ctx": "startup"}));
//! ```

pub mod adapter;
pub mod config;
pub mod logging_facility;
pub mod macros;
pub mod module;
pub mod record;
pub mod service;
pub mod sink;
pub mod sinks;

// Re-export commonly used types
pub use adapter::ApplicationLogger;
pub use config::{Destination, LoggingConfiguration, LoggingOptions};
pub use module::LoggingModule;
pub use neoma_core_types::{LogLevel, Severity};
pub use neoma_errors::{ConfigError, ExError, ExErrorKind};
pub use record::{normalize, LogRecord};
pub use service::LoggerService;
pub use sink::Sink;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
