use crate::core::CatalogEntry;
use crate::distance::levenshtein;
use crate::normalize::tokenize;
use crate::ranking::{overlap_ratio, Scorer};

/// Score of an empty field, large enough that it never wins
pub const EMPTY_FIELD_SENTINEL: f64 = 10000.0;

/// Distance between a show name and a catalog entry: the best of its title,
/// English title and synonyms.
pub fn score_catalog_entry(target: &str, entry: &CatalogEntry) -> f64 {
    let target_tokens = tokenize(target);

    let mut fields = vec![entry.title.as_str(), entry.english_title.as_str()];
    fields.extend(entry.synonym_list());

    fields
        .into_iter()
        .map(|field| score_field(field, target, &target_tokens))
        .fold(EMPTY_FIELD_SENTINEL, f64::min)
}

/// `distance(field, target) * (2 - overlap)`, where overlap is the share of
/// the field's tokens found in the target.
fn score_field(field: &str, target: &str, target_tokens: &[String]) -> f64 {
    if field.trim().is_empty() {
        return EMPTY_FIELD_SENTINEL;
    }

    let overlap = overlap_ratio(&tokenize(field), target_tokens);
    levenshtein(field, target) as f64 * (2.0 - overlap)
}

/// Scorer for remote catalog search results
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogScorer;

impl Scorer<CatalogEntry> for CatalogScorer {
    fn score(&self, target: &str, candidate: &CatalogEntry) -> f64 {
        score_catalog_entry(target, candidate)
    }

    fn name(&self) -> &str {
        "catalog"
    }
}
