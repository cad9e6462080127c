//! Built-in sinks
//!
//! - `TracingSink`: default; forwards records to the `tracing` backend
//! - `JsonLinesSink`: newline-delimited JSON to any `io::Write`
//! - `ArraySink`: in-memory capture for tests
//! - `NoopSink`: discards everything

mod array;
mod json_lines;
mod noop;
mod tracing_sink;

pub use array::ArraySink;
pub use json_lines::JsonLinesSink;
pub use noop::NoopSink;
pub use tracing_sink::{TracingSink, TRACING_TARGET};
