//! Word frequency ranking shared by the summarizer and the NLP overlay.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of a frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Count `tokens` and return the `limit` most frequent, highest count first.
///
/// Counting goes through an insertion-ordered map and the sort is stable,
/// so equal counts keep first-appearance order.
pub fn rank_frequencies<I, S>(tokens: I, limit: usize) -> Vec<WordFrequency>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.into()).or_insert(0) += 1;
    }

    let mut ranked: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_orders_by_count() {
        let ranked = rank_frequencies(["b", "a", "a", "c", "a", "b"], 10);
        let words: Vec<_> = ranked.iter().map(|f| (f.word.as_str(), f.count)).collect();
        assert_eq!(words, vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let ranked = rank_frequencies(["z", "y", "x", "y", "z", "x"], 2);
        assert_eq!(ranked[0].word, "z");
        assert_eq!(ranked[1].word, "y");
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_tokens() {
        assert!(rank_frequencies(Vec::<String>::new(), 5).is_empty());
    }
}
