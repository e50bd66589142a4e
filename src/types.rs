use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// Deserializes an explicit JSON `null` to the type's default value.
///
/// The API sends `"id": null` for local tracks and `"display_name": null`
/// for some accounts.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Simplified artist reference as embedded in tracks and albums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    pub name: String,
}

/// Simplified album reference as embedded in tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    pub name: String,
}

/// A single track.
///
/// `duration` is in milliseconds (`duration_ms` on the wire). `added_at` is
/// not part of the bare track object; it is copied from the enclosing
/// playlist or library item and stays empty otherwise. `album` is absent
/// for tracks listed inside an album response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    pub name: String,
    #[serde(rename = "duration_ms")]
    pub duration: u64,
    #[serde(default)]
    pub album: Option<AlbumRef>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default = "default_true")]
    pub is_playable: bool,
    #[serde(default)]
    pub added_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub tracks: Option<Paging<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub display_name: String,
}

/// Reference to a playlist's track collection, carrying only the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    pub owner: PlaylistOwner,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub snapshot_id: String,
    #[serde(default)]
    pub tracks: Option<PlaylistTracksRef>,
}

/// Offset-based paging envelope used by most list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Item wrapper for playlist and library track listings.
///
/// `track` can be null for tracks that are no longer available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    #[serde(default)]
    pub added_at: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedArtistsResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<Artist>,
    pub next: Option<String>,
    pub cursors: Option<Cursors>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cursors {
    pub after: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

/// Raw search response; categories not requested are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Paging<Track>>,
    #[serde(default)]
    pub artists: Option<Paging<Artist>>,
    #[serde(default)]
    pub albums: Option<Paging<Album>>,
    #[serde(default)]
    pub playlists: Option<Paging<Playlist>>,
}

/// Flattened search results, one ordered sequence per entity kind.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub tracks: Vec<Track>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub playlists: Vec<Playlist>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub title: String,
    pub artists: String,
    pub album: String,
    pub length: String,
    pub added: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub owner: String,
    pub tracks: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub name: String,
    pub artists: String,
    pub released: String,
    pub kind: String,
}
