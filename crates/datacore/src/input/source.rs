//! Input value and data-type tag.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DataCoreError, Result};

/// A value handed to the processor. Never mutated by any operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    /// Free-form text.
    Text(String),
    /// A structured value: mapping, sequence, or JSON scalar.
    Structured(Value),
}

impl Input {
    /// Build an input from a decoded JSON value.
    ///
    /// A JSON string becomes [`Input::Text`]; everything else is
    /// [`Input::Structured`]. This is how the HTTP and CLI boundaries
    /// turn a `data` field into an input.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Input::Text(text),
            other => Input::Structured(other),
        }
    }

    /// Parse `raw` as JSON and wrap it via [`Input::from_value`].
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(value))
    }

    /// Read a file as text input.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DataCoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Input::Text(text))
    }

    /// Whether this input is a mapping or sequence.
    pub fn is_container(&self) -> bool {
        matches!(self, Input::Structured(Value::Object(_) | Value::Array(_)))
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Structured(value)
    }
}

/// Representational type of the canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Parses as JSON.
    Json,
    /// Contains a comma and a newline.
    Csv,
    /// More than one line.
    Text,
    /// Anything else.
    String,
}

impl DataType {
    /// Tag as it appears in result records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Json => "json",
            DataType::Csv => "csv",
            DataType::Text => "text",
            DataType::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_string_is_text() {
        assert_eq!(Input::from_value(json!("hi")), Input::Text("hi".to_string()));
        assert_eq!(Input::from_value(json!([1, 2])), Input::Structured(json!([1, 2])));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(Input::from_json_str("{not json").is_err());
        assert!(Input::from_json_str(r#"{"a": 1}"#).unwrap().is_container());
    }

    #[test]
    fn test_from_missing_file() {
        let err = Input::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_data_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DataType::Csv).unwrap(), "\"csv\"");
        assert_eq!(DataType::String.to_string(), "string");
    }
}
