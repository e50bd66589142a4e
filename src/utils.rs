use std::{
    collections::{BTreeSet, HashSet},
    fmt,
    time::Duration,
};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    management::PlaylistOrder,
    types::{ArtistRef, Playlist, Track},
};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Formats a track duration in milliseconds as `m:ss`.
pub fn format_duration(millis: u64) -> String {
    format!("{}:{:02}", millis / 60_000, (millis / 1000) % 60)
}

pub fn combine_artist_names(artists: &[ArtistRef], separator: &str) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Case-insensitive sort key that ignores a leading "The ".
pub fn sort_key(name: &str) -> String {
    let lower = name.to_lowercase();
    lower.strip_prefix("the ").map(str::to_string).unwrap_or(lower)
}

pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    // local tracks have no id and are never considered duplicates
    tracks.retain(|track| track.id.is_empty() || seen_ids.insert(track.id.clone()));
}

pub fn sort_playlists(playlists: &mut Vec<Playlist>, order: &PlaylistOrder, custom_order: &[String]) {
    match order {
        PlaylistOrder::Default => {}
        PlaylistOrder::Alphabetical => playlists.sort_by_key(|p| sort_key(&p.name)),
        PlaylistOrder::Custom => playlists.sort_by_key(|p| {
            custom_order
                .iter()
                .position(|id| *id == p.id)
                .unwrap_or(usize::MAX)
        }),
    }
}

pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    let seconds = diff.num_seconds();
    if seconds < 60 {
        return String::from("just now");
    }

    let plural = |amount: i64, unit: &str| {
        format!(
            "{} {}{} ago",
            amount,
            unit,
            if amount == 1 { "" } else { "s" }
        )
    };

    let minutes = diff.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = diff.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = diff.num_days();
    if days < 7 {
        return plural(days, "day");
    }
    if days < 31 {
        return plural(days / 7, "week");
    }
    if days < 365 {
        return plural(days / 30, "month");
    }
    plural(days / 365, "year")
}

/// Formats an ISO-8601 added-at timestamp for display.
///
/// Returns an empty string for missing or unparsable timestamps.
pub fn format_added_at(added_at: &str, relative: bool) -> String {
    let parsed = match DateTime::parse_from_rfc3339(added_at) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(_) => return String::new(),
    };

    if relative {
        relative_time(parsed, Utc::now())
    } else {
        parsed.format("%Y-%m-%d").to_string()
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchKind {
    Track,
    Artist,
    Album,
    Playlist,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Track,
        SearchKind::Artist,
        SearchKind::Album,
        SearchKind::Playlist,
    ];
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchKind::Track => "track",
            SearchKind::Artist => "artist",
            SearchKind::Album => "album",
            SearchKind::Playlist => "playlist",
        };
        write!(f, "{}", name)
    }
}

/// Set of entity kinds to search for, rendered as the comma-separated
/// `type` parameter of the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKinds(pub BTreeSet<SearchKind>);

impl SearchKinds {
    pub fn iter(&self) -> impl Iterator<Item = SearchKind> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SearchKinds {
    fn default() -> Self {
        SearchKinds(BTreeSet::from(SearchKind::ALL))
    }
}

impl fmt::Display for SearchKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}

pub fn parse_search_kinds(raw: &str) -> Result<SearchKinds, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(String::from("search type cannot be empty"));
    }

    let mut kinds = BTreeSet::new();
    for segment in trimmed.split(',') {
        let segment = segment.trim().to_lowercase();
        if segment.is_empty() {
            return Err(String::from("empty segment in search type"));
        }

        match segment.as_str() {
            "all" => kinds.extend(SearchKind::ALL),
            "track" => {
                kinds.insert(SearchKind::Track);
            }
            "artist" => {
                kinds.insert(SearchKind::Artist);
            }
            "album" => {
                kinds.insert(SearchKind::Album);
            }
            "playlist" => {
                kinds.insert(SearchKind::Playlist);
            }
            other => return Err(format!("invalid value '{}' for search type", other)),
        }
    }

    Ok(SearchKinds(kinds))
}
