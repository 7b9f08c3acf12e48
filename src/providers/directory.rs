use async_trait::async_trait;
use std::path::PathBuf;

use crate::core::LocalEpisodeFile;
use crate::error::{MatcherError, Result};
use crate::normalize::is_video_file;
use crate::providers::EpisodeSource;

/// Episode source listing video files in one library directory.
///
/// Non-recursive; subdirectories and non-video files are ignored.
#[derive(Debug, Clone)]
pub struct DirectoryEpisodeSource {
    root: PathBuf,
}

impl DirectoryEpisodeSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl EpisodeSource for DirectoryEpisodeSource {
    async fn list_files(&self) -> Result<Vec<LocalEpisodeFile>> {
        let mut dir = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            MatcherError::Provider {
                provider: self.root.display().to_string(),
                message: format!("Cannot read directory: {}", e),
            }
        })?;

        let mut files = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if is_video_file(&name.to_string_lossy()) {
                files.push(LocalEpisodeFile::from_path(entry.path()));
            }
        }

        // read_dir order is platform dependent
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        tracing::debug!("{} episode files in {}", files.len(), self.root.display());
        Ok(files)
    }

    fn name(&self) -> &str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_video_files_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "[HorribleSubs] Attack on Titan - 02 [720p].mkv",
            "[HorribleSubs] Attack on Titan - 01 [720p].mkv",
            "notes.txt",
            "Gate - 01.mp4",
        ] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("Season 2.mkv")).unwrap();

        let source = DirectoryEpisodeSource::new(dir.path());
        let files = source.list_files().await.unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Gate - 01.mp4",
                "[HorribleSubs] Attack on Titan - 01 [720p].mkv",
                "[HorribleSubs] Attack on Titan - 02 [720p].mkv",
            ]
        );
        assert_eq!(files[1].episode, Some(1));
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let source = DirectoryEpisodeSource::new("/definitely/not/here");
        let err = source.list_files().await.unwrap_err();
        assert!(matches!(err, MatcherError::Provider { .. }));
    }
}
