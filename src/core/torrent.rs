use serde::{Deserialize, Serialize};

/// A result from a torrent index with its episode number already parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentResult {
    /// Release title, e.g. `[SubsPlease] Frieren - 07 (1080p) [ABCD1234].mkv`
    pub title: String,

    /// Episode number parsed by the indexer collaborator
    #[serde(default)]
    pub episode: Option<u32>,

    /// Magnet or .torrent link
    #[serde(default)]
    pub link: String,
}

impl TorrentResult {
    pub fn new(title: impl Into<String>, episode: Option<u32>) -> Self {
        Self {
            title: title.into(),
            episode,
            link: String::new(),
        }
    }

    /// Whether the title advertises the given resolution tag (`720p`, `1080p`...)
    pub fn has_resolution(&self, resolution: &str) -> bool {
        let resolution = resolution.trim();
        resolution.is_empty() || self.title.to_lowercase().contains(&resolution.to_lowercase())
    }
}
