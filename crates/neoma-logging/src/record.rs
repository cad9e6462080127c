//! Structured log records and call normalization
//!
//! A logging call carries a message and zero or more context arguments.
//! [`normalize`] turns that call into a [`LogRecord`]:
//!
//! - a single composite argument (object or array) has its own fields merged
//!   into the record next to `msg`
//! - any other non-empty argument list is kept, in call order, under `context`
//! - no arguments yields just `level` and `msg`

use neoma_core_types::schema::{self, FIELD_CONTEXT};
use neoma_core_types::{LogLevel, Severity};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// The structured payload produced by one logging call
///
/// Serializes as `{"level": <severity>, "msg": <message>, ...fields}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    #[serde(rename = "level", serialize_with = "serialize_severity")]
    level: LogLevel,
    msg: Value,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

fn serialize_severity<S: Serializer>(level: &LogLevel, serializer: S) -> Result<S::Ok, S::Error> {
    level.severity().serialize(serializer)
}

impl LogRecord {
    /// Create a record with no extra fields
    pub fn new(level: LogLevel, msg: impl Into<Value>) -> Self {
        Self {
            level,
            msg: msg.into(),
            fields: Map::new(),
        }
    }

    /// The level the call was made at
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Numeric severity of the call
    pub fn severity(&self) -> Severity {
        self.level.severity()
    }

    /// The original message, unchanged
    pub fn msg(&self) -> &Value {
        &self.msg
    }

    /// Fields other than `level` and `msg`
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a single extra field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `context` sequence, if the call produced one
    pub fn context(&self) -> Option<&[Value]> {
        self.fields
            .get(FIELD_CONTEXT)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Render the record as a JSON value
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 2);
        object.insert(
            schema::FIELD_LEVEL.to_string(),
            Value::from(self.severity().value()),
        );
        object.insert(schema::FIELD_MSG.to_string(), self.msg.clone());
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

/// Build the record for a call at `level`
///
/// Only objects and arrays count as composite. A lone `null` argument is a
/// primitive: it is kept as `context: [null]`, never treated as an empty
/// object and dropped.
pub fn normalize(level: LogLevel, message: Value, context: &[Value]) -> LogRecord {
    let mut record = LogRecord::new(level, message);
    match context {
        [] => {}
        [single] if is_composite(single) => merge_fields(&mut record.fields, single),
        args => {
            record
                .fields
                .insert(FIELD_CONTEXT.to_string(), Value::Array(args.to_vec()));
        }
    }
    record
}

/// Objects and arrays carry their own fields; everything else is a primitive
fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn merge_fields(fields: &mut Map<String, Value>, source: &Value) {
    match source {
        Value::Object(object) => {
            for (key, value) in object {
                if !schema::is_reserved(key) {
                    fields.insert(key.clone(), value.clone());
                }
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                fields.insert(index.to_string(), value.clone());
            }
        }
        _ => {}
    }
}
