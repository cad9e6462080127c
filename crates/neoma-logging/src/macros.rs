//! Level macros for variadic logging calls
//!
//! Each macro takes a logger, a message expression, and any number of
//! context arguments. Every argument goes through `serde_json::json!`, so
//! JSON-literal syntax works directly:
//!
//! ```
//! use neoma_logging::{app_log, app_warn, ApplicationLogger, LoggingOptions};
//! use neoma_logging::sinks::ArraySink;
//!
//! let sink = ArraySink::new();
//! let logger = ApplicationLogger::new(LoggingOptions::new().with_destination(sink.clone()));
//!
//! app_log!(logger, "user signed in", { "user_id": 42 });
//! app_warn!(logger, "retrying", "upstream", 3);
//!
//! let values = sink.values();
//! assert_eq!(values[0]["user_id"], 42);
//! assert_eq!(values[1]["context"], serde_json::json!(["upstream", 3]));
//! ```
//!
//! Context arguments are single token trees; wrap longer expressions in
//! parentheses (`app_log!(logger, "m", (user.id))`).

#[doc(hidden)]
#[macro_export]
macro_rules! __app_emit {
    ($method:ident, $logger:expr, $msg:expr $(, $ctx:tt)* $(,)?) => {{
        use $crate::LoggerService as _;
        $logger.$method(
            $crate::__private::json!($msg),
            &[$($crate::__private::json!($ctx)),*],
        )
    }};
}

/// Log at `verbose`
#[macro_export]
macro_rules! app_verbose {
    ($($arg:tt)+) => {
        $crate::__app_emit!(verbose, $($arg)+)
    };
}

/// Log at `debug`
#[macro_export]
macro_rules! app_debug {
    ($($arg:tt)+) => {
        $crate::__app_emit!(debug, $($arg)+)
    };
}

/// Log at `log`
#[macro_export]
macro_rules! app_log {
    ($($arg:tt)+) => {
        $crate::__app_emit!(log, $($arg)+)
    };
}

/// Log at `warn`
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)+) => {
        $crate::__app_emit!(warn, $($arg)+)
    };
}

/// Log at `error`
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)+) => {
        $crate::__app_emit!(error, $($arg)+)
    };
}

/// Log at `fatal`
#[macro_export]
macro_rules! app_fatal {
    ($($arg:tt)+) => {
        $crate::__app_emit!(fatal, $($arg)+)
    };
}
