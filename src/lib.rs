//! # Episode Matcher
//!
//! Fuzzy name matching for an anime episode tracker:
//! - Release/file name cleanup (subgroup tags, resolution tags, extensions)
//! - Levenshtein edit distance
//! - Relevance-weighted scorers for catalog entries, local file groups and
//!   plain name pairs
//! - Cutoff-based selection of the closest candidate
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use episode_matcher::{EpisodeMatcher, MatcherConfig, TrackedShow};
//! use episode_matcher::providers::DirectoryEpisodeSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut matcher = EpisodeMatcher::new(MatcherConfig::default());
//!     matcher.add_episode_source(Arc::new(DirectoryEpisodeSource::new("/srv/anime")));
//!
//!     let show = TrackedShow::new("Attack on Titan", "720p");
//!     match matcher.find_local_episodes(&show).await? {
//!         Some(found) => println!("{} ({} files)", found.candidate.key, found.candidate.files.len()),
//!         None => println!("nothing on disk yet"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod distance;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod providers;
pub mod ranking;

// Re-export primary types
pub use config::MatcherConfig;
pub use self::core::{CatalogEntry, FileGroup, LocalEpisodeFile, MatchKind, MatchResponse, TorrentResult, TrackedShow};
pub use distance::levenshtein;
pub use engine::EpisodeMatcher;
pub use error::{MatcherError, Result};
pub use normalize::{normalize, parse_file_name, NormalizedName};
pub use ranking::{rank, select_best, ScoredItem, Scorer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
