pub mod catalog_entry;
pub mod episode_file;
pub mod match_response;
pub mod show;
pub mod torrent;

pub use catalog_entry::CatalogEntry;
pub use episode_file::{group_files, FileGroup, LocalEpisodeFile};
pub use match_response::{MatchKind, MatchResponse};
pub use show::TrackedShow;
pub use torrent::TorrentResult;
