//! No-operation sink implementation.

use crate::record::LogRecord;
use crate::sink::Sink;

/// A sink that discards all records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    #[inline]
    fn accept(&self, _record: LogRecord) {}

    fn name(&self) -> &'static str {
        "noop"
    }
}
