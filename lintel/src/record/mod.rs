//! Dynamic records and the row trait used by the data table.

mod error;
mod id;

pub use error::RecordError;
pub use id::RecordId;

use serde::Deserialize;
use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

/// Name of the identifier field in JSON records.
pub const ID_FIELD: &str = "id";

/// Anything a [`DataTable`](crate::DataTable) can display.
///
/// # Example
///
/// ```
/// use lintel::{RecordId, TableRow};
/// use serde_json::Value;
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     fn id(&self) -> RecordId {
///         self.id.into()
///     }
///
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.clone().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Unique identifier for this row.
    fn id(&self) -> RecordId;

    /// Value of a named field, `None` when the row has no such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Textual form of a field, used for sorting and default cell rendering.
    /// Missing and null fields read as the empty string.
    fn field_text(&self, name: &str) -> String {
        self.field(name).map(|v| text_of(&v)).unwrap_or_default()
    }
}

/// Textual representation of a value.
///
/// Null is the empty string, strings are taken verbatim, arrays join their
/// elements with `,` and objects use their compact JSON form.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Integral floats print without a fractional part (`1.0` is `"1"`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            // -0.0 prints as "0"
            format!("{}", f + 0.0)
        }
        _ => n.to_string(),
    }
}

/// Returns the JSON type name of a value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A record with an identifier and an open set of named fields.
///
/// # Example
///
/// ```
/// use lintel::{Record, TableRow};
///
/// let record = Record::new(1)
///     .set("name", "John Doe")
///     .set("role", "Admin");
///
/// assert_eq!(record.field_text("name"), "John Doe");
/// assert_eq!(record.field_text("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Record {
    /// The unique identifier of the record.
    id: RecordId,

    /// The field values, excluding the identifier.
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a new record with no fields besides its id.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builds a record from a JSON object with an `id` member.
    pub fn from_json(value: Value) -> Result<Self, RecordError> {
        let Value::Object(mut fields) = value else {
            return Err(RecordError::NotAnObject {
                actual: json_type_name(&value),
            });
        };

        let raw_id = fields.remove(ID_FIELD).ok_or_else(RecordError::missing_id)?;
        let id = RecordId::from_value(&raw_id).ok_or_else(|| RecordError::invalid_id(&raw_id))?;

        Ok(Self { id, fields })
    }

    /// Builds a list of records from a JSON array of objects.
    pub fn list_from_json(value: Value) -> Result<Vec<Self>, RecordError> {
        let Value::Array(items) = value else {
            return Err(RecordError::NotAnArray {
                actual: json_type_name(&value),
            });
        };
        items.into_iter().map(Self::from_json).collect()
    }

    /// Parses a list of records from a JSON string.
    pub fn list_from_str(json: &str) -> Result<Vec<Self>, RecordError> {
        Self::list_from_json(serde_json::from_str(json)?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the record ID.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Sets the record ID.
    pub fn set_id(&mut self, id: impl Into<RecordId>) {
        self.id = id.into();
    }

    /// Returns a reference to the field value, if it exists.
    ///
    /// The identifier is not stored as a field; use [`Record::id`].
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        field == ID_FIELD || self.fields.contains_key(field)
    }

    /// Returns a reference to all non-id fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value.
    ///
    /// The `id` field is reserved; writes to it are ignored; use
    /// [`Record::set_id`] instead.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        if field == ID_FIELD {
            log::debug!("Ignoring write to reserved '{}' field of record {}", ID_FIELD, self.id);
            return;
        }
        self.fields.insert(field, value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}

impl TableRow for Record {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        if name == ID_FIELD {
            return Some(self.id.to_value());
        }
        self.fields.get(name).cloned()
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Record::from_json(value)
    }
}

impl Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(ID_FIELD, &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_extracts_id() {
        let record = Record::from_json(json!({"id": 7, "name": "Ann"})).unwrap();
        assert_eq!(record.id(), &RecordId::Int(7));
        assert_eq!(record.field_text("name"), "Ann");
        assert_eq!(record.field("id"), Some(json!(7)));
        assert!(record.get("id").is_none());
    }

    #[test]
    fn test_from_json_string_id() {
        let record = Record::from_json(json!({"id": "u-1"})).unwrap();
        assert_eq!(record.id(), &RecordId::Text("u-1".into()));
    }

    #[test]
    fn test_from_json_rejects_missing_id() {
        let err = Record::from_json(json!({"name": "Ann"})).unwrap_err();
        assert!(matches!(err, RecordError::MissingId { field: "id" }));
    }

    #[test]
    fn test_from_json_rejects_bad_id() {
        let err = Record::from_json(json!({"id": [1, 2]})).unwrap_err();
        assert!(matches!(err, RecordError::InvalidId { .. }));

        let err = Record::from_json(json!({"id": 1.5})).unwrap_err();
        assert!(matches!(err, RecordError::InvalidId { .. }));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Record::from_json(json!("Ann")).unwrap_err();
        assert!(matches!(err, RecordError::NotAnObject { actual: "string" }));
    }

    #[test]
    fn test_list_from_str() {
        let records = Record::list_from_str(r#"[{"id": 1}, {"id": "b"}]"#).unwrap();
        assert_eq!(records.len(), 2);

        assert!(matches!(
            Record::list_from_str("{"),
            Err(RecordError::Json(_))
        ));
        assert!(matches!(
            Record::list_from_str(r#"{"id": 1}"#),
            Err(RecordError::NotAnArray { actual: "object" })
        ));
    }

    #[test]
    fn test_insert_ignores_id() {
        let record = Record::new(1).set("id", 99).set("name", "Bob");
        assert_eq!(record.id(), &RecordId::Int(1));
        assert_eq!(record.fields().len(), 1);
    }

    #[test]
    fn test_serialize_includes_id() {
        let record = Record::new("a").set("n", 1);
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"id": "a", "n": 1}));
    }

    #[test]
    fn test_deserialize_through_from_json() {
        let record: Record = serde_json::from_str(r#"{"id": 3, "x": null}"#).unwrap();
        assert_eq!(record.id(), &RecordId::Int(3));
        assert_eq!(record.field_text("x"), "");
    }

    #[test]
    fn test_text_of() {
        assert_eq!(text_of(&Value::Null), "");
        assert_eq!(text_of(&json!(true)), "true");
        assert_eq!(text_of(&json!(42)), "42");
        assert_eq!(text_of(&json!(1.0)), "1");
        assert_eq!(text_of(&json!(-3.0)), "-3");
        assert_eq!(text_of(&json!(2.5)), "2.5");
        assert_eq!(text_of(&json!("hi")), "hi");
        assert_eq!(text_of(&json!([1, null, "a"])), "1,,a");
        assert_eq!(text_of(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
