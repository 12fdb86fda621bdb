//! Compiled regex set shared by the extractor, validator and NLP overlay.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Compiled once on first use; every pattern is a literal, so compilation
// cannot fail at runtime.

/// Email addresses: local part, `@`, domain, dot, alphabetic TLD of 2+ chars.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

/// `http`/`https` URLs: unreserved and sub-delim characters plus percent-encoded octets.
pub static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .expect("url pattern")
});

/// Integer digit runs. Fractional parts are not captured.
pub static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]+\b").expect("integer pattern"));

/// `YYYY-MM-DD` literals, no calendar validation.
pub static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{4}-[0-9]{2}-[0-9]{2}\b").expect("iso date pattern"));

/// Any angle bracket marks the text as HTML-like.
pub static HTML_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").expect("html pattern"));

/// Characters that are neither word characters nor whitespace.
pub static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word pattern"));

/// Sentence terminators used to cut the first sentence.
pub static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence pattern"));

/// Line terminators: `\r\n` as one, then LF, CR, VT, FF, FS, GS, RS, NEL,
/// and the Unicode line and paragraph separators.
pub static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").expect("line break pattern")
});

/// Split `text` into lines on any [`LINE_BREAK`], without the trailing
/// empty element a final terminator would leave.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Collect every match of `pattern` in `text`, in occurrence order.
pub fn find_all<'t>(pattern: &Regex, text: &'t str) -> Vec<&'t str> {
    pattern.find_iter(text).map(|m| m.as_str()).collect()
}
