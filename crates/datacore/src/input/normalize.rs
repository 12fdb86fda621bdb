//! Canonical text derivation and data-type detection.
//!
//! Both functions are total: every input has a canonical text and every
//! canonical text has a data type.

use serde_json::Value;

use crate::patterns::split_lines;

use super::source::{DataType, Input};

/// Coerce an input to the canonical string every analyzer works on.
///
/// Mappings and sequences render as pretty JSON with two-space indentation,
/// keeping key insertion order. Scalars use their plain string form, so a
/// structured JSON string `"abc"` and the text `abc` canonicalize the same.
pub fn canonicalize(input: &Input) -> String {
    match input {
        Input::Text(text) => text.clone(),
        Input::Structured(value) => render_value(value),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            // Pretty printing a Value only fails on a writer error, which a String
            // buffer never produces; the compact form keeps this total regardless.
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::String(text) => text.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Parse canonical text as JSON, swallowing the parse error.
pub fn parse_json(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Classify canonical text. JSON is tried first, then CSV, then multi-line text.
pub fn detect_type(text: &str) -> DataType {
    if parse_json(text).is_some() {
        DataType::Json
    } else if text.contains(',') && text.contains('\n') {
        DataType::Csv
    } else if split_lines(text).len() > 1 {
        DataType::Text
    } else {
        DataType::String
    }
}
