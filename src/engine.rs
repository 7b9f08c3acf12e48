use std::sync::Arc;
use std::time::Instant;

use crate::config::MatcherConfig;
use crate::core::{
    group_files, CatalogEntry, FileGroup, LocalEpisodeFile, MatchKind, MatchResponse, TorrentResult,
    TrackedShow,
};
use crate::error::{MatcherError, Result};
use crate::normalize::normalize;
use crate::providers::{CatalogProvider, EpisodeSource};
use crate::ranking::{rank, within_cutoff, CatalogScorer, FileGroupScorer, NameScorer, ScoredItem, Scorer};

/// Matches tracked shows against catalog entries, torrents and local files.
///
/// Collaborators are handed in explicitly; the matcher itself holds no
/// mutable state, so one instance can serve concurrent lookups.
pub struct EpisodeMatcher {
    config: MatcherConfig,
    catalog_providers: Vec<Arc<dyn CatalogProvider>>,
    episode_sources: Vec<Arc<dyn EpisodeSource>>,
}

impl EpisodeMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            catalog_providers: Vec::new(),
            episode_sources: Vec::new(),
        }
    }

    /// Add a remote catalog provider
    pub fn add_catalog_provider(&mut self, provider: Arc<dyn CatalogProvider>) {
        self.catalog_providers.push(provider);
    }

    /// Add a local episode source
    pub fn add_episode_source(&mut self, source: Arc<dyn EpisodeSource>) {
        self.episode_sources.push(source);
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Search every catalog provider and return the entry closest to the show.
    ///
    /// Catalog ranking has no cutoff: the best of the returned entries wins.
    pub async fn find_catalog_entry(
        &self,
        show: &TrackedShow,
    ) -> Result<Option<MatchResponse<CatalogEntry>>> {
        ensure_named(&show.name)?;

        let mut candidates = Vec::new();
        let mut failures = 0;
        let mut last_error = None;
        for provider in &self.catalog_providers {
            match provider.search(&show.name).await {
                Ok(mut results) => {
                    tracing::debug!("Provider {} returned {} entries", provider.name(), results.len());
                    candidates.append(&mut results);
                }
                Err(e) => {
                    tracing::warn!("Provider {} failed: {}", provider.name(), e);
                    failures += 1;
                    last_error = Some(e);
                }
            }
        }
        all_failed(self.catalog_providers.len(), failures, last_error)?;

        self.rank_catalog_entries(&show.name, &candidates)
    }

    /// Rank already fetched catalog entries against a show name.
    pub fn rank_catalog_entries(
        &self,
        show_name: &str,
        entries: &[CatalogEntry],
    ) -> Result<Option<MatchResponse<CatalogEntry>>> {
        ensure_named(show_name)?;

        let start = Instant::now();
        let ranked = rank(&CatalogScorer, show_name, entries);
        Ok(self.finish(&CatalogScorer, show_name, ranked, None, MatchKind::Catalog, start))
    }

    /// Find the group of local files that belongs to the show.
    pub async fn find_local_episodes(
        &self,
        show: &TrackedShow,
    ) -> Result<Option<MatchResponse<FileGroup>>> {
        ensure_named(&show.name)?;

        let mut files: Vec<LocalEpisodeFile> = Vec::new();
        let mut failures = 0;
        let mut last_error = None;
        for source in &self.episode_sources {
            match source.list_files().await {
                Ok(mut listed) => {
                    tracing::debug!("Source {} listed {} files", source.name(), listed.len());
                    files.append(&mut listed);
                }
                Err(e) => {
                    tracing::warn!("Source {} failed: {}", source.name(), e);
                    failures += 1;
                    last_error = Some(e);
                }
            }
        }
        all_failed(self.episode_sources.len(), failures, last_error)?;

        self.match_file_groups(&show.name, &group_files(files))
    }

    /// Pick the file group closest to a show name, within the file-group cutoff.
    pub fn match_file_groups(
        &self,
        show_name: &str,
        groups: &[FileGroup],
    ) -> Result<Option<MatchResponse<FileGroup>>> {
        ensure_named(show_name)?;

        let start = Instant::now();
        let scorer = FileGroupScorer::new(self.config.file_group.clone());
        let ranked = rank(&scorer, show_name, groups);
        Ok(self.finish(
            &scorer,
            show_name,
            ranked,
            Some(self.config.file_group_cutoff),
            MatchKind::FileGroup,
            start,
        ))
    }

    /// Work out which tracked show a downloaded file belongs to.
    pub fn match_file_to_show(
        &self,
        file_name: &str,
        shows: &[TrackedShow],
    ) -> Result<Option<MatchResponse<TrackedShow>>> {
        let inferred = normalize(file_name, true);
        if inferred.is_empty() {
            tracing::debug!("No show name in {:?}", file_name);
            return Ok(None);
        }

        let start = Instant::now();
        let scorer = NameScorer::new(|show: &TrackedShow| show.name.clone());
        let ranked = rank(&scorer, &inferred, shows);
        Ok(self.finish(
            &scorer,
            &inferred,
            ranked,
            Some(self.config.generic_cutoff),
            MatchKind::Show,
            start,
        ))
    }

    /// Choose the torrent to download for one episode of a show.
    ///
    /// Only results for `episode` that carry the show's resolution are scored.
    pub fn pick_torrent(
        &self,
        show: &TrackedShow,
        episode: u32,
        results: &[TorrentResult],
    ) -> Result<Option<MatchResponse<TorrentResult>>> {
        ensure_named(&show.name)?;

        let eligible: Vec<TorrentResult> = results
            .iter()
            .filter(|r| r.episode == Some(episode) && r.has_resolution(&show.resolution))
            .cloned()
            .collect();
        tracing::debug!(
            "{} of {} torrents eligible for {} episode {}",
            eligible.len(),
            results.len(),
            show.name,
            episode
        );

        let start = Instant::now();
        let scorer = NameScorer::new(|result: &TorrentResult| normalize(&result.title, true));
        let ranked = rank(&scorer, &show.name, &eligible);
        Ok(self.finish(
            &scorer,
            &show.name,
            ranked,
            Some(self.config.generic_cutoff),
            MatchKind::Torrent,
            start,
        ))
    }

    /// Turn a ranked list into a response, or `None` when the best is above the cutoff.
    fn finish<C, S>(
        &self,
        scorer: &S,
        target: &str,
        ranked: Vec<ScoredItem<C>>,
        cutoff: Option<f64>,
        kind: MatchKind,
        start: Instant,
    ) -> Option<MatchResponse<C>>
    where
        S: Scorer<C> + ?Sized,
    {
        let mut ranked = ranked.into_iter();
        let best = ranked.next()?;

        if !within_cutoff(best.score, cutoff) {
            tracing::debug!(
                "[{}] no match for {:?}: best score {:.2} above cutoff {:?}",
                scorer.name(),
                target,
                best.score,
                cutoff
            );
            return None;
        }

        let alternatives: Vec<C> = ranked
            .take_while(|c| within_cutoff(c.score, cutoff))
            .take(self.config.max_alternatives)
            .map(|c| c.item)
            .collect();

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!("[{}] {:?} matched with score {:.2}", scorer.name(), target, best.score);

        Some(
            MatchResponse::new(best.item, best.score, kind)
                .with_alternatives(alternatives)
                .with_latency_ms(latency_ms),
        )
    }
}

impl Default for EpisodeMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

fn ensure_named(show_name: &str) -> Result<()> {
    if show_name.trim().is_empty() {
        return Err(MatcherError::InvalidArgument(
            "show name must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Surface the last collaborator error when every collaborator failed.
fn all_failed(collaborators: usize, failures: usize, last_error: Option<MatcherError>) -> Result<()> {
    match last_error {
        Some(e) if collaborators > 0 && failures == collaborators => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frieren() -> TrackedShow {
        TrackedShow::new("Sousou no Frieren", "1080p")
    }

    #[test]
    fn test_pick_torrent_filters_episode_and_resolution() {
        let matcher = EpisodeMatcher::default();
        let results = vec![
            TorrentResult::new("[SubsPlease] Sousou no Frieren - 07 (720p) [AAAA1111].mkv", Some(7)),
            TorrentResult::new("[SubsPlease] Sousou no Frieren - 06 (1080p) [BBBB2222].mkv", Some(6)),
            TorrentResult::new("[SubsPlease] Sousou no Frieren - 07 (1080p) [CCCC3333].mkv", Some(7)),
            TorrentResult::new("[Other] Frieren Recap - 07 (1080p).mkv", Some(7)),
        ];

        let picked = matcher.pick_torrent(&frieren(), 7, &results).unwrap().unwrap();
        assert!(picked.candidate.title.contains("CCCC3333"));
        assert_eq!(picked.kind, MatchKind::Torrent);
        assert!(picked.is_exact());
    }

    #[test]
    fn test_pick_torrent_none_eligible() {
        let matcher = EpisodeMatcher::default();
        let results = vec![TorrentResult::new("[SubsPlease] Sousou no Frieren - 07 (720p).mkv", Some(7))];
        assert!(matcher.pick_torrent(&frieren(), 7, &results).unwrap().is_none());
    }

    #[test]
    fn test_pick_torrent_blank_show() {
        let matcher = EpisodeMatcher::default();
        let err = matcher
            .pick_torrent(&TrackedShow::new(" ", "720p"), 1, &[])
            .unwrap_err();
        assert!(matches!(err, MatcherError::InvalidArgument(_)));
    }

    #[test]
    fn test_match_file_to_show() {
        let matcher = EpisodeMatcher::default();
        let shows = vec![
            TrackedShow::new("Gate", "720p"),
            TrackedShow::new("Attack on Titan", "720p"),
        ];

        let matched = matcher
            .match_file_to_show("[HorribleSubs] Attack on Titan - 05 [720p].mkv", &shows)
            .unwrap()
            .unwrap();
        assert_eq!(matched.candidate.name, "Attack on Titan");
        assert_eq!(matched.kind, MatchKind::Show);
    }

    #[test]
    fn test_match_file_to_show_no_match() {
        let matcher = EpisodeMatcher::default();
        let shows = vec![TrackedShow::new("Attack on Titan", "720p")];
        let matched = matcher
            .match_file_to_show("[Coalgirls] Clannad After Story - 12.mkv", &shows)
            .unwrap();
        assert!(matched.is_none());
        assert!(matcher.match_file_to_show("[Tag].mkv", &shows).unwrap().is_none());
    }

    #[test]
    fn test_match_file_groups_alternatives_respect_cutoff() {
        let matcher = EpisodeMatcher::default();
        let groups = vec![
            FileGroup { key: "My Hero Academia".to_string(), files: Vec::new() },
            FileGroup { key: "Attack on Titan S3".to_string(), files: Vec::new() },
            FileGroup { key: "Attack on Titan".to_string(), files: Vec::new() },
        ];

        let matched = matcher
            .match_file_groups("Attack on Titan", &groups)
            .unwrap()
            .unwrap();
        assert_eq!(matched.candidate.key, "Attack on Titan");
        assert_eq!(matched.score, 0.0);
        let alternatives: Vec<&str> = matched.alternatives.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(alternatives, vec!["Attack on Titan S3"]);
    }

    #[test]
    fn test_all_failed() {
        assert!(all_failed(2, 2, Some("boom".into())).is_err());
        assert!(all_failed(1, 1, Some("boom".into())).is_err());
        assert!(all_failed(2, 1, Some("boom".into())).is_ok());
        assert!(all_failed(0, 0, None).is_ok());
    }

    #[test]
    fn test_sync_entry_points_reject_blank_name() {
        let matcher = EpisodeMatcher::default();
        let entries = vec![CatalogEntry::new("mal", "1", "Gate")];
        let groups = vec![FileGroup { key: "Gate".to_string(), files: Vec::new() }];

        let err = matcher.rank_catalog_entries("  ", &entries).unwrap_err();
        assert!(matches!(err, MatcherError::InvalidArgument(_)));

        let err = matcher.match_file_groups("", &groups).unwrap_err();
        assert!(matches!(err, MatcherError::InvalidArgument(_)));
    }
}
