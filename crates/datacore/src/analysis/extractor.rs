//! Regex-driven extraction of emails, URLs, integers and ISO dates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::Result;
use crate::patterns::{find_all, EMAIL, INTEGER, ISO_DATE, URL};

/// Result of the `extract` operation. Kinds with no matches are left out
/// of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Distinct, in first-occurrence order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub emails: Vec<String>,
    /// Distinct, in first-occurrence order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub urls: Vec<String>,
    /// Every integer digit run, in occurrence order. Unbounded, so long
    /// account or tracking numbers come through intact.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub numbers: Vec<Number>,
    /// Every `YYYY-MM-DD` literal, in occurrence order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub dates: Vec<String>,
}

impl ExtractionReport {
    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.urls.is_empty() && self.numbers.is_empty() && self.dates.is_empty()
    }

    /// Names of the kinds that matched.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if !self.emails.is_empty() {
            kinds.push("emails");
        }
        if !self.urls.is_empty() {
            kinds.push("urls");
        }
        if !self.numbers.is_empty() {
            kinds.push("numbers");
        }
        if !self.dates.is_empty() {
            kinds.push("dates");
        }
        kinds
    }
}

/// Runs the extraction pattern set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every kind from `text`.
    pub fn extract(&self, text: &str) -> Result<ExtractionReport> {
        let numbers = find_all(&INTEGER, text)
            .into_iter()
            .map(parse_integer)
            .collect::<Result<Vec<_>>>()?;

        Ok(ExtractionReport {
            emails: dedup_preserving_order(find_all(&EMAIL, text)),
            urls: dedup_preserving_order(find_all(&URL, text)),
            numbers,
            dates: find_all(&ISO_DATE, text).into_iter().map(String::from).collect(),
        })
    }
}

/// Digit run as a JSON integer; leading zeros are dropped (`"007"` is 7).
fn parse_integer(digits: &str) -> Result<Number> {
    let significant = digits.trim_start_matches('0');
    let canonical = if significant.is_empty() { "0" } else { significant };
    Ok(canonical.parse::<Number>()?)
}

fn dedup_preserving_order(matches: Vec<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(*m))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbers(report: &ExtractionReport) -> Vec<String> {
        report.numbers.iter().map(Number::to_string).collect()
    }

    #[test]
    fn test_contact_sentence() {
        let report = Extractor::new()
            .extract("Contact us at test@example.com or visit https://example.com on 2024-01-15")
            .unwrap();
        assert_eq!(report.emails, vec!["test@example.com"]);
        assert_eq!(report.urls, vec!["https://example.com"]);
        assert_eq!(numbers(&report), vec!["2024", "1", "15"]);
        assert_eq!(report.dates, vec!["2024-01-15"]);
    }

    #[test]
    fn test_emails_and_urls_deduplicated() {
        let report = Extractor::new()
            .extract("a@b.io http://x.org a@b.io c@d.io http://x.org")
            .unwrap();
        assert_eq!(report.emails, vec!["a@b.io", "c@d.io"]);
        assert_eq!(report.urls, vec!["http://x.org"]);
    }

    #[test]
    fn test_numbers_and_dates_keep_duplicates() {
        let report = Extractor::new().extract("7 7 2020-02-02 2020-02-02").unwrap();
        assert_eq!(numbers(&report), vec!["7", "7", "2020", "2", "2", "2020", "2", "2"]);
        assert_eq!(report.dates.len(), 2);
    }

    #[test]
    fn test_empty_kinds_omitted() {
        let report = Extractor::new().extract("only 12 here").unwrap();
        assert_eq!(report.kinds(), vec!["numbers"]);
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({"numbers": [12]}));

        let nothing = Extractor::new().extract("no matches").unwrap();
        assert!(nothing.is_empty());
        assert_eq!(serde_json::to_value(&nothing).unwrap(), json!({}));
    }

    #[test]
    fn test_long_digit_run_kept_beside_email() {
        let report = Extractor::new()
            .extract("card 1234567890123456789012345 mail a@b.io")
            .unwrap();
        assert_eq!(report.emails, vec!["a@b.io"]);
        assert_eq!(numbers(&report), vec!["1234567890123456789012345"]);
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"emails":["a@b.io"],"numbers":[1234567890123456789012345]}"#
        );
    }

    #[test]
    fn test_leading_zeros_dropped() {
        let report = Extractor::new().extract("000 007 0100").unwrap();
        assert_eq!(numbers(&report), vec!["0", "7", "100"]);
    }
}
