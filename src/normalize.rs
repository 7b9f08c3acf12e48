//! Name cleanup for release titles and episode file names.
//!
//! Raw names look like `[HorribleSubs] Attack on Titan - 05 [720p].mkv`.
//! Everything the scorers compare goes through [`normalize`] first so that
//! subgroup tags, resolution tags, checksums and container extensions never
//! contribute to a distance.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// `[...]` or `(...)` annotations plus any whitespace right before them.
static RE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\]]*\]|\s*\([^)]*\)").expect("Invalid regex"));

/// Known video container extensions, wherever they appear.
static RE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(mkv|mp4|avi)").expect("Invalid regex"));

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Video container extensions recognised as episode files.
pub const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi"];

/// A raw name split into its show part and trailing episode number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedName {
    /// Cleaned name with the episode segment removed
    pub show: String,
    /// Episode number parsed from the last hyphen-delimited segment
    pub episode: Option<u32>,
}

/// Clean a raw title or file name for comparison.
///
/// With `strip_episode` the last hyphen-delimited segment (conventionally the
/// episode number) is dropped as well. Names without a hyphen keep their text.
///
/// ```
/// use episode_matcher::normalize::normalize;
///
/// let raw = "[HorribleSubs] Attack on Titan - 05 [720p].mkv";
/// assert_eq!(normalize(raw, false), "Attack on Titan - 05");
/// assert_eq!(normalize(raw, true), "Attack on Titan");
/// ```
pub fn normalize(raw: &str, strip_episode: bool) -> String {
    let mut cleaned = strip_noise(raw);

    if strip_episode {
        cleaned = drop_last_segment(&cleaned);
    }

    collapse_whitespace(&cleaned)
}

/// Split a raw file name into show name and episode number.
pub fn parse_file_name(raw: &str) -> NormalizedName {
    let cleaned = collapse_whitespace(&strip_noise(raw));
    let episode = cleaned
        .rsplit_once('-')
        .and_then(|(_, tail)| parse_episode_token(tail));

    NormalizedName {
        show: collapse_whitespace(&drop_last_segment(&cleaned)),
        episode,
    }
}

/// Lowercase, trimmed, space-split tokens with duplicates removed.
///
/// First occurrence order is kept so callers can still report tokens in the
/// order they appeared.
pub fn tokenize(s: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    s.to_lowercase()
        .split(' ')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

/// Whether a path-like name carries one of [`VIDEO_EXTENSIONS`].
pub fn is_video_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Annotation, underscore and extension removal, repeated until nothing changes.
fn strip_noise(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let pass = RE_ANNOTATION.replace_all(&current, "");
        let pass = pass.replace('_', " ");
        let pass = RE_EXTENSION.replace_all(&pass, "").into_owned();
        if pass == current {
            return current;
        }
        current = pass;
    }
}

fn drop_last_segment(s: &str) -> String {
    match s.rsplit_once('-') {
        Some((head, _)) => head.to_string(),
        None => s.to_string(),
    }
}

fn collapse_whitespace(s: &str) -> String {
    RE_WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// `05`, `05v2` and `12.5` all yield their leading integer.
fn parse_episode_token(token: &str) -> Option<u32> {
    let digits: String = token
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
