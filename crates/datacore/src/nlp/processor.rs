//! The NLP overlay value and its report types.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{rank_frequencies, WordFrequency};
use crate::patterns::{find_all, EMAIL, INTEGER, ISO_DATE, NON_WORD, SENTENCE_END, URL};

use super::lexicon::{ENGLISH_MARKERS, NEGATIVE_WORDS, POSITIVE_WORDS, SPANISH_MARKERS, STOP_WORDS};

/// Tunables for the NLP overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    /// Keywords returned by [`NlpProcessor::analyze`].
    pub keyword_limit: usize,
    /// Character cap for the one-sentence summary.
    pub summary_max_length: usize,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            keyword_limit: 10,
            summary_max_length: 100,
        }
    }
}

/// Share of positive, negative and neutral tokens. The three sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl Sentiment {
    /// Sentiment of text with no tokens.
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
        }
    }
}

/// Raw pattern matches; every key is present even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub dates: Vec<String>,
    pub numbers: Vec<String>,
}

/// Languages the detector can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every NLP view of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NlpReport {
    pub token_count: usize,
    pub keywords: Vec<WordFrequency>,
    pub sentiment: Sentiment,
    pub entities: Entities,
    pub summary: String,
    pub language: Language,
}

/// Holds the stop-word set and lexicons. Immutable once built, so one
/// instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct NlpProcessor {
    config: NlpConfig,
    stop_words: HashSet<&'static str>,
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    english: HashSet<&'static str>,
    spanish: HashSet<&'static str>,
}

impl NlpProcessor {
    pub fn new() -> Self {
        Self::with_config(NlpConfig::default())
    }

    pub fn with_config(config: NlpConfig) -> Self {
        Self {
            config,
            stop_words: STOP_WORDS.iter().copied().collect(),
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            english: ENGLISH_MARKERS.iter().copied().collect(),
            spanish: SPANISH_MARKERS.iter().copied().collect(),
        }
    }

    pub fn config(&self) -> &NlpConfig {
        &self.config
    }

    /// Lowercase, drop non-word characters, split on whitespace, remove stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        words(text)
            .into_iter()
            .filter(|token| !self.stop_words.contains(token.as_str()))
            .collect()
    }

    /// The `top_n` most frequent tokens; ties keep first appearance.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<WordFrequency> {
        rank_frequencies(self.tokenize(text), top_n)
    }

    /// Lexicon-hit ratios over the token count.
    pub fn sentiment(&self, text: &str) -> Sentiment {
        let tokens = self.tokenize(text);
        if tokens.is_empty() {
            return Sentiment::neutral();
        }

        let total = tokens.len() as f64;
        let positive = tokens.iter().filter(|t| self.positive.contains(t.as_str())).count();
        let negative = tokens.iter().filter(|t| self.negative.contains(t.as_str())).count();
        let neutral = tokens.len() - positive - negative;

        Sentiment {
            positive: positive as f64 / total,
            negative: negative as f64 / total,
            neutral: neutral as f64 / total,
        }
    }

    /// Emails, URLs, ISO dates and digit runs, as matched.
    pub fn extract_entities(&self, text: &str) -> Entities {
        Entities {
            emails: owned(find_all(&EMAIL, text)),
            urls: owned(find_all(&URL, text)),
            dates: owned(find_all(&ISO_DATE, text)),
            numbers: owned(find_all(&INTEGER, text)),
        }
    }

    /// First sentence of `text`, cut to `max_length` characters with a
    /// trailing `...` when longer. Limits below 3 leave no room for the
    /// ellipsis, so the sentence is cut bare.
    pub fn summarize_text(&self, text: &str, max_length: usize) -> String {
        let first = SENTENCE_END
            .split(text.trim())
            .next()
            .unwrap_or_default()
            .trim();

        if first.chars().count() <= max_length {
            return first.to_string();
        }

        if max_length < ELLIPSIS.len() {
            return first.chars().take(max_length).collect();
        }

        let keep = max_length - ELLIPSIS.len();
        let mut summary: String = first.chars().take(keep).collect();
        summary.truncate(summary.trim_end().len());
        summary.push_str(ELLIPSIS);
        summary
    }

    /// English or Spanish by marker-word hits over [`tokenize`](Self::tokenize)
    /// output; ties go to English.
    pub fn detect_language(&self, text: &str) -> Language {
        let tokens = self.tokenize(text);
        let english = tokens.iter().filter(|t| self.english.contains(t.as_str())).count();
        let spanish = tokens.iter().filter(|t| self.spanish.contains(t.as_str())).count();

        if spanish > english {
            Language::Spanish
        } else {
            Language::English
        }
    }

    /// All views at once, using the configured limits.
    pub fn analyze(&self, text: &str) -> NlpReport {
        NlpReport {
            token_count: self.tokenize(text).len(),
            keywords: self.extract_keywords(text, self.config.keyword_limit),
            sentiment: self.sentiment(text),
            entities: self.extract_entities(text),
            summary: self.summarize_text(text, self.config.summary_max_length),
            language: self.detect_language(text),
        }
    }
}

impl Default for NlpProcessor {
    fn default() -> Self {
        Self::new()
    }
}

const ELLIPSIS: &str = "...";

fn owned(matches: Vec<&str>) -> Vec<String> {
    matches.into_iter().map(String::from).collect()
}

fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(String::from)
        .collect()
}
