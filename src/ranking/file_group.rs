//! Show name vs a group of local episode files.
//!
//! ```text
//! score = single * 20 + distance * (2.35 + no_match - ratio - all_match)
//! ```
//!
//! - `ratio`: share of group tokens also present in the show tokens
//! - `single`: 1 when the show is a single word and `ratio` is 0
//! - `no_match`: 8 when the show has several words and `ratio` is 0
//! - `all_match`: 1 when every show token occurs in the group

use std::collections::HashSet;

use crate::config::FileGroupWeights;
use crate::core::FileGroup;
use crate::distance::levenshtein;
use crate::normalize::tokenize;
use crate::ranking::{overlap_ratio, Scorer};

/// Letter-only, lowercase, de-duplicated tokens without stopwords.
///
/// Colons, hyphens, digits and punctuation are deleted outright, so
/// `Re:Zero` becomes `rezero` and `S3` becomes `s`.
pub fn group_tokens(s: &str, stopwords: &[String]) -> Vec<String> {
    let letters: String = s
        .chars()
        .filter_map(|c| {
            if c.is_alphabetic() {
                Some(c)
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect();

    tokenize(&letters)
        .into_iter()
        .filter(|t| !stopwords.iter().any(|stop| stop == t))
        .collect()
}

/// Distance between a tracked show name and a file group key.
pub fn score_file_group(show_name: &str, group_key: &str, weights: &FileGroupWeights) -> f64 {
    let show_tokens = group_tokens(show_name, &weights.stopwords);
    let key_tokens = group_tokens(group_key, &weights.stopwords);

    let base = levenshtein(show_name, group_key) as f64;
    let ratio = overlap_ratio(&key_tokens, &show_tokens);

    let single_word = if show_tokens.len() == 1 && ratio == 0.0 {
        weights.single_word_penalty
    } else {
        0.0
    };

    let no_match = if show_tokens.len() > 1 && ratio == 0.0 {
        weights.no_match_penalty
    } else {
        0.0
    };

    let key_set: HashSet<&str> = key_tokens.iter().map(String::as_str).collect();
    let all_match = if !show_tokens.is_empty()
        && show_tokens.iter().all(|t| key_set.contains(t.as_str()))
    {
        weights.all_match_bonus
    } else {
        0.0
    };

    single_word + base * (weights.bias + no_match - ratio - all_match)
}

/// Scorer for groups of local episode files
#[derive(Debug, Clone, Default)]
pub struct FileGroupScorer {
    weights: FileGroupWeights,
}

impl FileGroupScorer {
    pub fn new(weights: FileGroupWeights) -> Self {
        Self { weights }
    }
}

impl Scorer<FileGroup> for FileGroupScorer {
    fn score(&self, target: &str, candidate: &FileGroup) -> f64 {
        score_file_group(target, &candidate.key, &self.weights)
    }

    fn name(&self) -> &str {
        "file-group"
    }
}
