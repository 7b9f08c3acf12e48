pub mod directory;
pub mod static_catalog;

use async_trait::async_trait;
use crate::core::{CatalogEntry, LocalEpisodeFile};
use crate::error::Result;

pub use directory::DirectoryEpisodeSource;
pub use static_catalog::StaticCatalogProvider;

/// Trait for remote catalog search collaborators (MAL, AniList, etc.)
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search catalog entries by show name
    async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>>;

    /// Get provider name
    fn name(&self) -> &str;
}

/// Trait for collaborators that enumerate episode files on disk
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    /// List every episode file this source can see
    async fn list_files(&self) -> Result<Vec<LocalEpisodeFile>>;

    /// Get source name
    fn name(&self) -> &str;
}
