//! Input validation: emptiness, size, JSON parseability, HTML-like markup.

use serde::{Deserialize, Serialize};

use crate::input::parse_json;
use crate::patterns::HTML_MARKER;

pub const EMPTY_ERROR: &str = "Data is empty";
pub const LARGE_WARNING: &str = "Data is very large";
pub const NOT_JSON_WARNING: &str = "Data is not valid JSON";
pub const HTML_WARNING: &str = "Contains HTML-like tags";

/// Result of the `validate` operation.
///
/// Only errors affect `is_valid`; warnings are informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub is_json: bool,
}

/// Runs the validation rules over canonical text.
#[derive(Debug, Clone)]
pub struct Validator {
    large_input_threshold: usize,
}

impl Validator {
    /// `large_input_threshold` is the character count above which a size
    /// warning is raised.
    pub fn new(large_input_threshold: usize) -> Self {
        Self { large_input_threshold }
    }

    pub fn validate(&self, text: &str) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if text.trim().is_empty() {
            errors.push(EMPTY_ERROR.to_string());
        }

        if text.chars().count() > self.large_input_threshold {
            warnings.push(LARGE_WARNING.to_string());
        }

        let is_json = parse_json(text).is_some();
        if !is_json {
            warnings.push(NOT_JSON_WARNING.to_string());
        }

        if HTML_MARKER.is_match(text) {
            warnings.push(HTML_WARNING.to_string());
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            is_json,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_invalid() {
        let report = Validator::default().validate("");
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![EMPTY_ERROR]);
        assert!(!report.is_json);
        assert!(report.warnings.contains(&NOT_JSON_WARNING.to_string()));
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        let report = Validator::default().validate(" \n\t ");
        assert!(!report.is_valid);
    }

    #[test]
    fn test_html_warning_keeps_valid() {
        let report = Validator::default().validate("<script>alert(1)</script>");
        assert!(report.is_valid);
        assert!(report.warnings.contains(&HTML_WARNING.to_string()));
    }

    #[test]
    fn test_large_json_is_valid() {
        let big = format!("[{}]", vec!["1"; 6_000].join(","));
        let report = Validator::default().validate(&big);
        assert!(report.is_valid);
        assert!(report.is_json);
        assert_eq!(report.warnings, vec![LARGE_WARNING]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let text = "a".repeat(10);
        assert!(Validator::new(10).validate(&text).warnings.iter().all(|w| w != LARGE_WARNING));
        assert!(Validator::new(9).validate(&text).warnings.iter().any(|w| w == LARGE_WARNING));
    }
}
