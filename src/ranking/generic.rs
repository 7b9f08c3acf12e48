use std::collections::HashSet;

use crate::distance::levenshtein;
use crate::normalize::tokenize;
use crate::ranking::{ScoredItem, Scorer};

/// `distance(name, comparison) * (2 - relevance)` where relevance is the number
/// of `name` tokens found in `comparison`, over the token count of `comparison`.
pub fn score_pair(name: &str, comparison: &str) -> f64 {
    let name_tokens = tokenize(name);
    let comparison_tokens = tokenize(comparison);

    let relevance = if comparison_tokens.is_empty() {
        0.0
    } else {
        let comparison_set: HashSet<&str> =
            comparison_tokens.iter().map(String::as_str).collect();
        let found = name_tokens
            .iter()
            .filter(|t| comparison_set.contains(t.as_str()))
            .count();
        found as f64 / comparison_tokens.len() as f64
    };

    levenshtein(name, comparison) as f64 * (2.0 - relevance)
}

/// Score `comparison` against `name` and keep `item` alongside the result.
pub fn score_item<T>(name: &str, comparison: &str, item: T) -> ScoredItem<T> {
    ScoredItem::new(item, score_pair(name, comparison))
}

/// Generic scorer comparing the target against a name extracted from each candidate
pub struct NameScorer<F> {
    key: F,
}

impl<F> NameScorer<F> {
    /// `key` extracts the comparable name of a candidate
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<C, F> Scorer<C> for NameScorer<F>
where
    F: Fn(&C) -> String + Send + Sync,
{
    fn score(&self, target: &str, candidate: &C) -> f64 {
        score_pair(target, &(self.key)(candidate))
    }

    fn name(&self) -> &str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GENERIC_CUTOFF;
    use crate::core::TrackedShow;
    use crate::ranking::{rank, select_best};

    #[test]
    fn test_identical_names() {
        assert_eq!(score_pair("Sousou no Frieren", "Sousou no Frieren"), 0.0);
    }

    #[test]
    fn test_relevance_halves_penalty() {
        // distance 8, every comparison token found: 8 * (2 - 1)
        assert_eq!(score_pair("Gate Jieitai", "Gate"), 8.0);
        // distance 3, one of two comparison tokens found: 3 * (2 - 0.5)
        assert_eq!(score_pair("Gate", "Gate S2"), 3.0 * 1.5);
    }

    #[test]
    fn test_empty_comparison() {
        assert_eq!(score_pair("Gate", ""), 8.0);
        assert_eq!(score_pair("", ""), 0.0);
    }

    #[test]
    fn test_score_item_keeps_payload() {
        let scored = score_item("Gate", "Gate", 42_u32);
        assert_eq!(scored.item, 42);
        assert_eq!(scored.score, 0.0);
    }

    #[test]
    fn test_name_scorer_over_shows() {
        let shows = vec![
            TrackedShow::new("Toradora!", "720p"),
            TrackedShow::new("Attack on Titan", "720p"),
        ];
        let scorer = NameScorer::new(|show: &TrackedShow| show.name.clone());

        let ranked = rank(&scorer, "Attack on Titan", &shows);
        let best = select_best(ranked, Some(GENERIC_CUTOFF)).unwrap();
        assert_eq!(best.item.name, "Attack on Titan");
    }

    #[test]
    fn test_generic_cutoff_rejects_unrelated() {
        let scored = vec![score_item("Attack on Titan", "Toradora!", "toradora")];
        assert!(select_best(scored, Some(GENERIC_CUTOFF)).is_none());
    }
}
