//! Structural metrics for canonical text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input::{detect_type, parse_json, DataType};
use crate::patterns::split_lines;

/// Counts of each character class. The four fields partition the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTypes {
    pub letters: usize,
    pub digits: usize,
    pub spaces: usize,
    pub special: usize,
}

impl CharacterTypes {
    /// Classify every character of `text`. Letters win over digits, digits
    /// over whitespace; anything left is special.
    pub fn count(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            if c.is_alphabetic() {
                counts.letters += 1;
            } else if c.is_numeric() {
                counts.digits += 1;
            } else if c.is_whitespace() {
                counts.spaces += 1;
            } else {
                counts.special += 1;
            }
        }
        counts
    }

    /// Sum of all classes; equals the character length of the counted text.
    pub fn total(&self) -> usize {
        self.letters + self.digits + self.spaces + self.special
    }
}

/// Kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Null => JsonKind::Null,
        }
    }
}

/// Shallow shape of a parsed JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonStructure {
    Object { keys: Vec<String>, key_count: usize },
    Array { length: usize, item_types: Vec<JsonKind> },
    String,
    Number,
    Boolean,
    Null,
}

impl JsonStructure {
    /// Describe `value`, listing at most `item_types_limit` array item kinds.
    pub fn describe(value: &Value, item_types_limit: usize) -> Self {
        match value {
            Value::Object(map) => JsonStructure::Object {
                keys: map.keys().cloned().collect(),
                key_count: map.len(),
            },
            Value::Array(items) => JsonStructure::Array {
                length: items.len(),
                item_types: items.iter().take(item_types_limit).map(JsonKind::of).collect(),
            },
            Value::String(_) => JsonStructure::String,
            Value::Number(_) => JsonStructure::Number,
            Value::Bool(_) => JsonStructure::Boolean,
            Value::Null => JsonStructure::Null,
        }
    }

    /// Kind named by the `type` field.
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonStructure::Object { .. } => JsonKind::Object,
            JsonStructure::Array { .. } => JsonKind::Array,
            JsonStructure::String => JsonKind::String,
            JsonStructure::Number => JsonKind::Number,
            JsonStructure::Boolean => JsonKind::Boolean,
            JsonStructure::Null => JsonKind::Null,
        }
    }
}

/// Result of the `analyze` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Character count of the canonical text.
    pub length: usize,
    /// Whitespace-separated token count.
    pub word_count: usize,
    /// Line count, ignoring a trailing empty line.
    pub line_count: usize,
    pub character_types: CharacterTypes,
    pub data_type: DataType,
    /// `None` (serialized as `null`) when the text is not valid JSON.
    pub json_structure: Option<JsonStructure>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub processed_at: Option<String>,
}

/// Computes [`AnalysisReport`]s.
#[derive(Debug, Clone)]
pub struct Analyzer {
    item_types_limit: usize,
}

impl Analyzer {
    pub fn new(item_types_limit: usize) -> Self {
        Self { item_types_limit }
    }

    /// Analyze canonical text. Invalid JSON is not an error here; it just
    /// leaves `json_structure` empty.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let json_structure =
            parse_json(text).map(|value| JsonStructure::describe(&value, self.item_types_limit));

        AnalysisReport {
            length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            line_count: split_lines(text).len(),
            character_types: CharacterTypes::count(text),
            data_type: detect_type(text),
            json_structure,
            processed_at: None,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_text() {
        let report = Analyzer::default().analyze("");
        assert_eq!(report.length, 0);
        assert_eq!(report.word_count, 0);
        assert_eq!(report.line_count, 0);
        assert_eq!(report.character_types, CharacterTypes::default());
        assert_eq!(report.data_type, DataType::String);
        assert!(report.json_structure.is_none());
    }

    #[test]
    fn test_character_classes_partition_length() {
        let text = "Héllo, wörld 42!\t\n";
        let report = Analyzer::default().analyze(text);
        let types = report.character_types;
        assert_eq!(types.letters, 10);
        assert_eq!(types.digits, 2);
        assert_eq!(types.spaces, 4);
        assert_eq!(types.special, 2);
        assert_eq!(types.total(), report.length);
    }

    #[test]
    fn test_line_count_ignores_trailing_newline() {
        let report = Analyzer::default().analyze("a\nb\n");
        assert_eq!(report.line_count, 2);
        assert_eq!(report.data_type, DataType::Text);
    }

    #[test]
    fn test_line_count_on_every_terminator() {
        let report = Analyzer::default().analyze("first\rsecond\u{2028}third");
        assert_eq!(report.line_count, 3);
        assert_eq!(report.data_type, DataType::Text);

        let crlf = Analyzer::default().analyze("a\r\nb\r\n");
        assert_eq!(crlf.line_count, 2);
    }

    #[test]
    fn test_object_structure() {
        let report = Analyzer::default().analyze(r#"{"a":1,"b":[1,2,3]}"#);
        assert_eq!(report.data_type, DataType::Json);
        assert_eq!(
            report.json_structure,
            Some(JsonStructure::Object {
                keys: vec!["a".to_string(), "b".to_string()],
                key_count: 2,
            })
        );
    }

    #[test]
    fn test_array_item_types_capped() {
        let report = Analyzer::new(5).analyze("[1, \"x\", null, true, {}, [], 2]");
        match report.json_structure {
            Some(JsonStructure::Array { length, item_types }) => {
                assert_eq!(length, 7);
                assert_eq!(
                    item_types,
                    vec![
                        JsonKind::Number,
                        JsonKind::String,
                        JsonKind::Null,
                        JsonKind::Boolean,
                        JsonKind::Object,
                    ]
                );
            }
            other => panic!("expected array structure, got {:?}", other),
        }
    }

    #[test]
    fn test_structure_serialization() {
        let structure = JsonStructure::describe(&json!({"k": 1}), 5);
        assert_eq!(
            serde_json::to_value(&structure).unwrap(),
            json!({"type": "object", "keys": ["k"], "key_count": 1})
        );
        assert_eq!(
            serde_json::to_value(JsonStructure::describe(&json!(3), 5)).unwrap(),
            json!({"type": "number"})
        );
    }

    #[test]
    fn test_invalid_json_has_null_structure() {
        let report = Analyzer::default().analyze("{broken");
        assert!(report.json_structure.is_none());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["json_structure"].is_null());
        assert!(value.get("processed_at").is_none());
    }
}
