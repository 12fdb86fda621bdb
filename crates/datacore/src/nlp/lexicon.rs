//! Fixed word lists used by the NLP overlay.

/// English stop words removed by tokenization.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can", "did", "do", "does",
    "for", "from", "had", "has", "have", "he", "her", "his", "i", "if", "in", "into", "is", "it",
    "its", "me", "my", "no", "not", "of", "on", "or", "our", "she", "so", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "to", "too", "up", "us",
    "very", "was", "we", "were", "what", "when", "where", "which", "who", "will", "with", "would",
    "you", "your",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "like", "best",
    "happy", "positive", "awesome", "nice", "perfect",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "worst", "poor", "sad", "negative", "angry",
    "disappointing", "dislike", "wrong", "broken",
];

pub const ENGLISH_MARKERS: &[&str] = &["the", "and", "is", "in", "to", "of", "that", "it", "with"];

pub const SPANISH_MARKERS: &[&str] = &["el", "la", "de", "que", "y", "en", "un", "es", "por"];
