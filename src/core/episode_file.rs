use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::normalize::{normalize, parse_file_name};

/// An episode file found on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalEpisodeFile {
    /// Full path to the file
    pub path: PathBuf,

    /// Raw file name, extension included
    pub file_name: String,

    /// Episode number derived from the file name
    pub episode: Option<u32>,
}

impl LocalEpisodeFile {
    /// Build from a path, deriving the episode number from its file name
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let episode = parse_file_name(&file_name).episode;

        Self {
            path,
            file_name,
            episode,
        }
    }

    /// Show name inferred from the file name (tags, extension and episode removed)
    pub fn show_name(&self) -> String {
        normalize(&self.file_name, true)
    }
}

/// Local files sharing one inferred show name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGroup {
    /// Common normalized name of every member
    pub key: String,
    pub files: Vec<LocalEpisodeFile>,
}

impl FileGroup {
    /// Episode numbers present in this group, sorted and deduplicated
    pub fn episodes(&self) -> Vec<u32> {
        let mut episodes: Vec<u32> = self.files.iter().filter_map(|f| f.episode).collect();
        episodes.sort_unstable();
        episodes.dedup();
        episodes
    }

    /// Highest episode number on disk
    pub fn latest_episode(&self) -> Option<u32> {
        self.files.iter().filter_map(|f| f.episode).max()
    }
}

/// Group files by inferred show name, keeping first-seen order of groups and files.
///
/// Files whose name normalizes to nothing are dropped; they cannot be matched.
pub fn group_files(files: impl IntoIterator<Item = LocalEpisodeFile>) -> Vec<FileGroup> {
    let mut groups: Vec<FileGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for file in files {
        let key = file.show_name();
        if key.is_empty() {
            tracing::debug!("Skipping unnamed file {}", file.path.display());
            continue;
        }

        match index.get(&key) {
            Some(&i) => groups[i].files.push(file),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(FileGroup {
                    key,
                    files: vec![file],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> LocalEpisodeFile {
        LocalEpisodeFile::from_path(PathBuf::from("/anime").join(name))
    }

    #[test]
    fn test_from_path() {
        let f = file("[HorribleSubs] Attack on Titan - 05 [720p].mkv");
        assert_eq!(f.file_name, "[HorribleSubs] Attack on Titan - 05 [720p].mkv");
        assert_eq!(f.episode, Some(5));
        assert_eq!(f.show_name(), "Attack on Titan");
    }

    #[test]
    fn test_group_files() {
        let groups = group_files(vec![
            file("[HorribleSubs] Attack on Titan - 01 [720p].mkv"),
            file("[Erai-raws] Gate - 03 [1080p].mkv"),
            file("[HorribleSubs] Attack on Titan - 02 [720p].mkv"),
            file("[.mkv].mkv"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "Attack on Titan");
        assert_eq!(groups[0].episodes(), vec![1, 2]);
        assert_eq!(groups[0].latest_episode(), Some(2));
        assert_eq!(groups[1].key, "Gate");
        assert_eq!(groups[1].files.len(), 1);
    }

    #[test]
    fn test_group_files_empty() {
        assert!(group_files(Vec::new()).is_empty());
    }
}
