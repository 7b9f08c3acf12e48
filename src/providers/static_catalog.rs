use async_trait::async_trait;
use std::path::Path;

use crate::core::CatalogEntry;
use crate::error::Result;
use crate::providers::CatalogProvider;

/// Catalog provider serving a fixed list of entries.
///
/// Used for offline ranking (entries exported to JSON) and in tests. Every
/// search returns the whole list; ranking is left to the matcher.
#[derive(Debug, Clone)]
pub struct StaticCatalogProvider {
    name: String,
    entries: Vec<CatalogEntry>,
}

impl StaticCatalogProvider {
    pub fn new(name: impl Into<String>, entries: Vec<CatalogEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Load entries from a JSON array file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&json)?;
        tracing::debug!("Loaded {} catalog entries from {}", entries.len(), path.display());
        Ok(Self::new(path.display().to_string(), entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    async fn search(&self, _query: &str) -> Result<Vec<CatalogEntry>> {
        Ok(self.entries.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
