#![allow(dead_code)]

use neoma_logging::sinks::ArraySink;
use neoma_logging::{ApplicationLogger, LogLevel, LoggerService, LoggingModule, LoggingOptions};
use serde_json::Value;
use std::sync::Arc;

pub const TRACE: u64 = 10;
pub const DEBUG: u64 = 20;
pub const INFO: u64 = 30;
pub const WARN: u64 = 40;
pub const ERROR: u64 = 50;
pub const FATAL: u64 = 60;

pub const MESSAGE: &str = "compressing the neural bandwidth will hack the virtual feed";

pub type LevelMethod = fn(&ApplicationLogger, Value, &[Value]);

/// Every level method with the severity it should produce, in ascending order
pub fn level_methods() -> Vec<(&'static str, LevelMethod, u64)> {
    vec![
        ("verbose", <ApplicationLogger as LoggerService>::verbose as LevelMethod, TRACE),
        ("debug", <ApplicationLogger as LoggerService>::debug as LevelMethod, DEBUG),
        ("log", <ApplicationLogger as LoggerService>::log as LevelMethod, INFO),
        ("warn", <ApplicationLogger as LoggerService>::warn as LevelMethod, WARN),
        ("error", <ApplicationLogger as LoggerService>::error as LevelMethod, ERROR),
        ("fatal", <ApplicationLogger as LoggerService>::fatal as LevelMethod, FATAL),
    ]
}

/// Module writing to a fresh in-memory sink
pub fn module_with_sink(level: Option<LogLevel>) -> (LoggingModule, ArraySink) {
    let sink = ArraySink::new();
    let mut options = LoggingOptions::new().with_destination(sink.clone());
    if let Some(level) = level {
        options = options.with_log_level(level);
    }
    (LoggingModule::for_root(options), sink)
}

/// Call all six level methods with `message`
pub fn call_every_level(logger: &Arc<ApplicationLogger>, message: &str) {
    logger.verbose(message.into(), &[]);
    logger.debug(message.into(), &[]);
    logger.log(message.into(), &[]);
    logger.warn(message.into(), &[]);
    logger.error(message.into(), &[]);
    logger.fatal(message.into(), &[]);
}

/// Assert the sink holds exactly the given severities, all carrying `message`
pub fn assert_levels(sink: &ArraySink, message: &str, expected: &[u64]) {
    let values = sink.values();
    assert_eq!(
        values.len(),
        expected.len(),
        "expected {} records, got {:?}",
        expected.len(),
        values
    );
    for (value, level) in values.iter().zip(expected) {
        assert_eq!(value["level"], *level);
        assert_eq!(value["msg"], message);
    }
}
