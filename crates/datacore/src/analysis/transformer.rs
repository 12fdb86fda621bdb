//! Derived text forms.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::parse_json;

/// Which derived form a [`Transformation`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    JsonFormat,
    Uppercase,
    Lowercase,
    CleanWhitespace,
}

/// One derived form of the canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    #[serde(rename = "type")]
    pub kind: TransformKind,
    pub result: String,
}

impl Transformation {
    fn new(kind: TransformKind, result: String) -> Self {
        Self { kind, result }
    }
}

/// Collapse whitespace runs to one space and trim both ends.
pub fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Produces the fixed set of derived forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer;

impl Transformer {
    pub fn new() -> Self {
        Self
    }

    /// Emit `json_format` (only for parseable JSON), then `uppercase`,
    /// `lowercase` and `clean_whitespace`.
    pub fn transform(&self, text: &str) -> Result<Vec<Transformation>> {
        let mut transformations = Vec::with_capacity(4);

        if let Some(value) = parse_json(text) {
            let pretty = serde_json::to_string_pretty(&value)?;
            transformations.push(Transformation::new(TransformKind::JsonFormat, pretty));
        }

        transformations.push(Transformation::new(TransformKind::Uppercase, text.to_uppercase()));
        transformations.push(Transformation::new(TransformKind::Lowercase, text.to_lowercase()));
        transformations.push(Transformation::new(
            TransformKind::CleanWhitespace,
            clean_whitespace(text),
        ));

        Ok(transformations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(transformations: &[Transformation]) -> Vec<TransformKind> {
        transformations.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_plain_text_skips_json_format() {
        let out = Transformer::new().transform("  Hello   World \n").unwrap();
        assert_eq!(
            kinds(&out),
            vec![TransformKind::Uppercase, TransformKind::Lowercase, TransformKind::CleanWhitespace]
        );
        assert_eq!(out[0].result, "  HELLO   WORLD \n");
        assert_eq!(out[1].result, "  hello   world \n");
        assert_eq!(out[2].result, "Hello World");
    }

    #[test]
    fn test_json_format_comes_first() {
        let out = Transformer::new().transform(r#"{"a":[1,2]}"#).unwrap();
        assert_eq!(out[0].kind, TransformKind::JsonFormat);
        assert_eq!(out[0].result, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_empty_input_still_emits_text_forms() {
        let out = Transformer::new().transform("").unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|t| t.result.is_empty()));
    }

    #[test]
    fn test_clean_whitespace_idempotent() {
        let once = clean_whitespace("\t a  b\n\nc ");
        assert_eq!(once, "a b c");
        assert_eq!(clean_whitespace(&once), once);
    }

    #[test]
    fn test_serialized_shape() {
        let out = Transformer::new().transform("x").unwrap();
        let value = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(value["type"], "uppercase");
        assert_eq!(value["result"], "X");
    }
}
