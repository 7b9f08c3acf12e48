//! Matcher configuration: cutoffs and file-group scoring weights.
//!
//! Every field has a default, so a YAML file only needs the keys it
//! overrides:
//!
//! ```yaml
//! generic_cutoff: 8.0
//! file_group:
//!   stopwords: ["no", "to", "na", "wa"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MatcherError, Result};

/// Cutoff for one-off name comparisons (file vs show, torrent vs show).
pub const GENERIC_CUTOFF: f64 = 10.0;

/// Cutoff for matching a show against a group of local files.
pub const FILE_GROUP_CUTOFF: f64 = 25.0;

/// Bias in the file-group formula. Hand-tuned; recalibrate against real data.
pub const FILE_GROUP_BIAS: f64 = 2.35;

/// Flat addition when a single-word show shares no token with the group.
pub const SINGLE_WORD_PENALTY: f64 = 20.0;

/// Added to the multiplier when a multi-word show shares no token with the group.
pub const NO_MATCH_PENALTY: f64 = 8.0;

/// Subtracted from the multiplier when the group contains every show token.
pub const ALL_MATCH_BONUS: f64 = 1.0;

/// Particles that recur across many titles and only add noise.
pub const DEFAULT_STOPWORDS: &[&str] = &["no", "to", "na"];

/// Weights of the show vs local-file-group scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroupWeights {
    pub bias: f64,
    pub single_word_penalty: f64,
    pub no_match_penalty: f64,
    pub all_match_bonus: f64,
    pub stopwords: Vec<String>,
}

impl Default for FileGroupWeights {
    fn default() -> Self {
        Self {
            bias: FILE_GROUP_BIAS,
            single_word_penalty: SINGLE_WORD_PENALTY,
            no_match_penalty: NO_MATCH_PENALTY,
            all_match_bonus: ALL_MATCH_BONUS,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Matcher options/configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub generic_cutoff: f64,
    pub file_group_cutoff: f64,
    /// How many runner-up candidates a match response carries
    pub max_alternatives: usize,
    pub file_group: FileGroupWeights,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            generic_cutoff: GENERIC_CUTOFF,
            file_group_cutoff: FILE_GROUP_CUTOFF,
            max_alternatives: 5,
            file_group: FileGroupWeights::default(),
        }
    }
}

impl MatcherConfig {
    /// Parse a YAML document, filling missing keys with defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded matcher config from {}", path.as_ref().display());
        Self::from_yaml_str(&content)
    }

    /// Reject cutoffs that would make every or no candidate pass silently.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("generic_cutoff", self.generic_cutoff),
            ("file_group_cutoff", self.file_group_cutoff),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatcherError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        let weights = &self.file_group;
        for (name, value) in [
            ("bias", weights.bias),
            ("single_word_penalty", weights.single_word_penalty),
            ("no_match_penalty", weights.no_match_penalty),
            ("all_match_bonus", weights.all_match_bonus),
        ] {
            if !value.is_finite() {
                return Err(MatcherError::InvalidConfig(format!(
                    "file_group.{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
