//! Sink trait definition

use crate::record::LogRecord;

/// Destination for normalized log records.
///
/// The logger calls [`Sink::accept`] synchronously, once per record that
/// passes its level threshold, and never inspects the outcome. A sink that
/// panics propagates the panic to the logging call site.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; each sink documents how it
/// serializes concurrent `accept` calls.
pub trait Sink: Send + Sync {
    /// Take ownership of one record
    fn accept(&self, record: LogRecord);

    /// Short name used in diagnostics
    fn name(&self) -> &'static str {
        "custom"
    }
}
