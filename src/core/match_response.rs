use serde::{Deserialize, Serialize};

/// Kind of candidate a match was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Remote catalog entry
    Catalog,
    /// Group of local episode files
    FileGroup,
    /// Torrent search result
    Torrent,
    /// Tracked show picked for a file name
    Show,
}

/// Best candidate of a match operation plus its runners-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse<T> {
    /// The selected candidate
    pub candidate: T,

    /// Distance score, lower is closer
    pub score: f64,

    pub kind: MatchKind,

    /// Next best candidates, closest first
    #[serde(default = "Vec::new")]
    pub alternatives: Vec<T>,

    /// Time spent scoring, in milliseconds
    pub latency_ms: f64,
}

impl<T> MatchResponse<T> {
    pub fn new(candidate: T, score: f64, kind: MatchKind) -> Self {
        Self {
            candidate,
            score,
            kind,
            alternatives: Vec::new(),
            latency_ms: 0.0,
        }
    }

    pub fn with_alternatives(mut self, alternatives: Vec<T>) -> Self {
        self.alternatives = alternatives;
        self
    }

    pub fn with_latency_ms(mut self, latency_ms: f64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Exact name match (zero distance)
    pub fn is_exact(&self) -> bool {
        self.score == 0.0
    }
}
