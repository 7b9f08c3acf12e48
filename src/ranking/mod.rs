pub mod catalog;
pub mod file_group;
pub mod generic;

use rayon::prelude::*;
use std::collections::HashSet;

pub use catalog::{score_catalog_entry, CatalogScorer, EMPTY_FIELD_SENTINEL};
pub use file_group::{score_file_group, FileGroupScorer};
pub use generic::{score_item, score_pair, NameScorer};

/// Trait for distance scorers: lower scores mean closer matches
pub trait Scorer<C>: Send + Sync {
    /// Distance between the target name and one candidate
    fn score(&self, target: &str, candidate: &C) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Candidate with its distance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<T> {
    pub item: T,
    pub score: f64,
}

impl<T> ScoredItem<T> {
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

/// Score every candidate against `target`, closest first.
///
/// Scoring runs on the rayon pool. The sort is stable, so equal scores keep
/// the order of `candidates`.
pub fn rank<C, S>(scorer: &S, target: &str, candidates: &[C]) -> Vec<ScoredItem<C>>
where
    C: Clone + Send + Sync,
    S: Scorer<C> + ?Sized,
{
    let scored: Vec<ScoredItem<C>> = candidates
        .par_iter()
        .map(|candidate| ScoredItem::new(candidate.clone(), scorer.score(target, candidate)))
        .collect();

    sort_ascending(scored)
}

/// Pick the closest candidate whose score is at or below `cutoff`.
///
/// `None` as cutoff means any score is accepted. An empty input, or a best
/// candidate above the cutoff, yields `None`.
pub fn select_best<T>(scored: Vec<ScoredItem<T>>, cutoff: Option<f64>) -> Option<ScoredItem<T>> {
    sort_ascending(scored)
        .into_iter()
        .next()
        .filter(|best| within_cutoff(best.score, cutoff))
}

/// Whether a score passes an optional cutoff
pub fn within_cutoff(score: f64, cutoff: Option<f64>) -> bool {
    match cutoff {
        Some(limit) => score <= limit,
        None => !score.is_nan(),
    }
}

/// Fraction of `tokens` that also occur in `reference`; 0 for an empty token list.
pub fn overlap_ratio(tokens: &[String], reference: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let reference: HashSet<&str> = reference.iter().map(String::as_str).collect();
    let shared = tokens
        .iter()
        .filter(|t| reference.contains(t.as_str()))
        .count();
    shared as f64 / tokens.len() as f64
}

fn sort_ascending<T>(mut scored: Vec<ScoredItem<T>>) -> Vec<ScoredItem<T>> {
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    scored
}
