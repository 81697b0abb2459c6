use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Unique identifier of a record: a string or an integer.
///
/// `Int(1)` and `Text("1")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Reads an id from a JSON value. Only strings and integers that fit in
    /// an `i64` qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RecordId::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(RecordId::Int),
            _ => None,
        }
    }

    /// Variant-tagged form used inside element ids, so `Int(1)` and
    /// `Text("1")` stay distinct: `i1` and `s1`.
    pub fn element_key(&self) -> String {
        match self {
            RecordId::Int(n) => format!("i{n}"),
            RecordId::Text(s) => format!("s{s}"),
        }
    }

    /// The id as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            RecordId::Int(n) => Value::from(*n),
            RecordId::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<i32> for RecordId {
    fn from(v: i32) -> Self {
        RecordId::Int(v.into())
    }
}

impl From<u32> for RecordId {
    fn from(v: u32) -> Self {
        RecordId::Int(v.into())
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

impl From<&RecordId> for RecordId {
    fn from(v: &RecordId) -> Self {
        v.clone()
    }
}
