//! Line, word and character statistics plus top word frequencies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::patterns::split_lines;

use super::frequency::{rank_frequencies, WordFrequency};

/// Punctuation stripped from both ends of a token before frequency counting.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Result of the `summarize` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_lines: usize,
    pub total_words: usize,
    pub total_characters: usize,
    /// Mean characters per line; 0 when there are no lines.
    pub average_line_length: f64,
    /// Mean characters per word; 0 when there are no words.
    pub average_word_length: f64,
    /// Case-sensitive distinct whitespace tokens.
    pub unique_words: usize,
    pub most_common_words: Vec<WordFrequency>,
}

/// Lowercase a token and strip `.,!?;:` from both ends.
pub fn strip_punctuation(token: &str) -> String {
    token.trim_matches(EDGE_PUNCTUATION).to_lowercase()
}

/// Computes [`SummaryReport`]s.
#[derive(Debug, Clone)]
pub struct Summarizer {
    top_words: usize,
}

impl Summarizer {
    /// `top_words` caps `most_common_words`.
    pub fn new(top_words: usize) -> Self {
        Self { top_words }
    }

    pub fn summarize(&self, text: &str) -> SummaryReport {
        let lines = split_lines(text);
        let words: Vec<&str> = text.split_whitespace().collect();

        let line_chars: usize = lines.iter().map(|l| l.chars().count()).sum();
        let word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        let unique_words = words.iter().collect::<HashSet<_>>().len();

        // Tokens made only of punctuation strip down to nothing and are not counted.
        let normalized = words
            .iter()
            .map(|w| strip_punctuation(w))
            .filter(|w| !w.is_empty());

        SummaryReport {
            total_lines: lines.len(),
            total_words: words.len(),
            total_characters: text.chars().count(),
            average_line_length: mean(line_chars, lines.len()),
            average_word_length: mean(word_chars, words.len()),
            unique_words,
            most_common_words: rank_frequencies(normalized, self.top_words),
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(5)
    }
}

fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pangram_counts() {
        let report = Summarizer::default()
            .summarize("the quick brown fox jumps over the lazy dog the fox");
        assert_eq!(report.total_words, 11);
        assert_eq!(report.unique_words, 8);
        assert_eq!(report.total_lines, 1);
        assert_eq!(report.most_common_words[0].word, "the");
        assert_eq!(report.most_common_words[0].count, 3);
        assert_eq!(report.most_common_words[1].word, "fox");
        assert_eq!(report.most_common_words.len(), 5);
    }

    #[test]
    fn test_empty_has_zero_averages() {
        let report = Summarizer::default().summarize("");
        assert_eq!(report.total_lines, 0);
        assert_eq!(report.total_words, 0);
        assert_eq!(report.average_line_length, 0.0);
        assert_eq!(report.average_word_length, 0.0);
        assert!(report.most_common_words.is_empty());
    }

    #[test]
    fn test_punctuation_and_case_folded_for_frequencies() {
        let report = Summarizer::default().summarize("Hello, hello! HELLO? world.");
        assert_eq!(report.unique_words, 4);
        assert_eq!(report.most_common_words[0].word, "hello");
        assert_eq!(report.most_common_words[0].count, 3);
        assert_eq!(report.most_common_words[1].word, "world");
    }

    #[test]
    fn test_averages() {
        let report = Summarizer::default().summarize("ab cd\nefgh");
        assert_eq!(report.total_lines, 2);
        assert_eq!(report.average_line_length, 4.5);
        assert_eq!(report.average_word_length, 8.0 / 3.0);
    }

    #[test]
    fn test_lines_split_on_carriage_return_and_separators() {
        let report = Summarizer::default().summarize("ab\rcd\u{2028}efg");
        assert_eq!(report.total_lines, 3);
        assert_eq!(report.average_line_length, 7.0 / 3.0);
    }

    #[test]
    fn test_strip_punctuation_only_edges() {
        assert_eq!(strip_punctuation("...e.g.,"), "e.g");
        assert_eq!(strip_punctuation("?!"), "");
    }
}
