//! Newline-delimited JSON sink

use crate::record::LogRecord;
use crate::sink::Sink;
use neoma_core_types::Severity;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Writes each record as one JSON object per line.
///
/// Output shape: `{"level":30,"time":1700000000000,"msg":"...",...fields}`.
/// `time` is epoch milliseconds and can be disabled with
/// [`JsonLinesSink::without_timestamp`].
///
/// Each line is serialized up front and written with a single `write_all`
/// under a mutex, so concurrent callers never interleave partial lines.
/// Write failures are counted rather than raised; see
/// [`JsonLinesSink::write_failures`].
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
    timestamps: bool,
    failures: AtomicU64,
}

#[derive(Serialize)]
struct Line<'a> {
    level: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<i64>,
    msg: &'a Value,
    #[serde(flatten)]
    fields: &'a Map<String, Value>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Create a sink writing to `writer`, with timestamps
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamps: true,
            failures: AtomicU64::new(0),
        }
    }

    /// Omit the `time` field from every line
    pub fn without_timestamp(mut self) -> Self {
        self.timestamps = false;
        self
    }

    /// Number of records that could not be written
    pub fn write_failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn encode(&self, record: &LogRecord) -> serde_json::Result<Vec<u8>> {
        let line = Line {
            level: record.severity(),
            time: self
                .timestamps
                .then(|| chrono::Utc::now().timestamp_millis()),
            msg: record.msg(),
            fields: record.fields(),
        };
        let mut bytes = serde_json::to_vec(&line)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn write_line(&self, bytes: &[u8]) -> bool {
        match self.writer.lock() {
            Ok(mut writer) => writer.write_all(bytes).and_then(|_| writer.flush()).is_ok(),
            Err(_) => false,
        }
    }
}

impl<W: Write + Send> Sink for JsonLinesSink<W> {
    fn accept(&self, record: LogRecord) {
        let written = match self.encode(&record) {
            Ok(bytes) => self.write_line(&bytes),
            Err(_) => false,
        };
        if !written {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn name(&self) -> &'static str {
        "json-lines"
    }
}

impl<W> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("timestamps", &self.timestamps)
            .field("failures", &self.failures.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::normalize;
    use neoma_core_types::LogLevel;
    use serde_json::json;
    use std::io;

    fn lines(bytes: Vec<u8>) -> Vec<Value> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_record() {
        let sink = JsonLinesSink::new(Vec::new()).without_timestamp();

        sink.accept(normalize(LogLevel::Log, json!("one"), &[]));
        sink.accept(normalize(LogLevel::Error, json!("two"), &[json!({"code": 7})]));

        let written = lines(sink.into_inner());
        assert_eq!(
            written,
            vec![
                json!({"level": 30, "msg": "one"}),
                json!({"level": 50, "msg": "two", "code": 7}),
            ]
        );
    }

    #[test]
    fn test_field_order_is_level_time_msg() {
        let sink = JsonLinesSink::new(Vec::new());
        sink.accept(normalize(LogLevel::Warn, json!("m"), &[json!("x")]));

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with(r#"{"level":40,"time":"#));
        assert!(text.ends_with("\"msg\":\"m\",\"context\":[\"x\"]}\n"));
    }

    #[test]
    fn test_timestamp_is_epoch_millis() {
        let before = chrono::Utc::now().timestamp_millis();
        let sink = JsonLinesSink::new(Vec::new());
        sink.accept(normalize(LogLevel::Log, json!("m"), &[]));

        let written = lines(sink.into_inner());
        let time = written[0]["time"].as_i64().unwrap();
        assert!(time >= before);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failures_are_counted() {
        let sink = JsonLinesSink::new(FailingWriter);
        sink.accept(normalize(LogLevel::Log, json!("lost"), &[]));
        sink.accept(normalize(LogLevel::Log, json!("lost"), &[]));
        assert_eq!(sink.write_failures(), 2);
    }
}
