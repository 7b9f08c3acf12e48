use serde::{Deserialize, Serialize};

/// One entry returned by a remote anime catalog search (MAL, AniList, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Provider source (mal, anilist)
    #[serde(default)]
    pub provider: String,

    /// Unique ID from provider
    #[serde(default)]
    pub id: String,

    /// Primary (usually romaji) title
    #[serde(default)]
    pub title: String,

    /// English title, empty when the catalog has none
    #[serde(default)]
    pub english_title: String,

    /// Semicolon-delimited list of alternative titles
    #[serde(default)]
    pub synonyms: String,

    /// Number of episodes, when announced
    #[serde(default)]
    pub episodes: Option<u32>,
}

impl CatalogEntry {
    /// Create a new CatalogEntry with required fields
    pub fn new(provider: impl Into<String>, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            id: id.into(),
            title: title.into(),
            english_title: String::new(),
            synonyms: String::new(),
            episodes: None,
        }
    }

    pub fn with_english_title(mut self, title: impl Into<String>) -> Self {
        self.english_title = title.into();
        self
    }

    pub fn with_synonyms(mut self, synonyms: impl Into<String>) -> Self {
        self.synonyms = synonyms.into();
        self
    }

    /// Individual synonyms, trimmed, empties dropped
    pub fn synonym_list(&self) -> impl Iterator<Item = &str> {
        self.synonyms
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if self.english_title.is_empty() || self.english_title == self.title {
            self.title.clone()
        } else {
            format!("{} ({})", self.title, self.english_title)
        }
    }
}
