//! RecordError for record construction from JSON

/// Error type for building a [`Record`](super::Record) from JSON.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The JSON value is not an object.
    #[error("Record must be a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// A record list was expected but the JSON value is not an array.
    #[error("Record list must be a JSON array, got {actual}")]
    NotAnArray { actual: &'static str },

    /// The object has no identifier field.
    #[error("Record is missing its '{field}' field")]
    MissingId { field: &'static str },

    /// The identifier is neither a string nor an integer.
    #[error("Record '{field}' must be a string or integer, got {actual}")]
    InvalidId { field: &'static str, actual: String },

    /// The input is not valid JSON.
    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    /// Creates a new missing id error.
    pub fn missing_id() -> Self {
        Self::MissingId {
            field: super::ID_FIELD,
        }
    }

    /// Creates a new invalid id error.
    pub fn invalid_id(value: &serde_json::Value) -> Self {
        Self::InvalidId {
            field: super::ID_FIELD,
            actual: value.to_string(),
        }
    }
}
