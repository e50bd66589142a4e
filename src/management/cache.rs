use std::{io::Error, path::PathBuf};

use crate::types::{Playlist, Track};

/// Cache key for the user's saved tracks.
pub const LIBRARY_CACHE_ID: &str = "library";

#[derive(Debug)]
pub enum CacheError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for CacheError {
    fn from(err: Error) -> Self {
        CacheError::IoError(err)
    }
}

/// On-disk cache for one track list, keyed by its source identifier
/// (playlist id, album id or [`LIBRARY_CACHE_ID`]).
pub struct TrackListManager {
    id: String,
    tracks: Vec<Track>,
}

impl TrackListManager {
    pub fn new(id: String, tracks: Option<Vec<Track>>) -> Self {
        Self {
            id,
            tracks: tracks.unwrap_or(Vec::new()),
        }
    }

    pub async fn load(id: String) -> Result<Self, CacheError> {
        let path = Self::cache_path(&id);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| CacheError::IoError(e))?;
        let tracks = serde_json::from_str(&content).map_err(|e| CacheError::SerdeError(e))?;
        Ok(Self { id, tracks })
    }

    pub async fn persist(&self) -> Result<(), CacheError> {
        let path = Self::cache_path(&self.id);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CacheError::IoError(e))?;
        }

        let json =
            serde_json::to_string_pretty(&self.tracks).map_err(|e| CacheError::SerdeError(e))?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| CacheError::IoError(e))
    }

    /// Replaces the cached list with a freshly fetched one. Entries are
    /// never merged; the latest stored list wins.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) -> &mut Self {
        self.tracks.clear();
        self.tracks.extend(tracks);
        self
    }

    pub fn get_tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn cache_path(id: &str) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!("sptcli/cache/tracks/{id}.json"));
        path
    }
}

/// On-disk cache for the current user's playlists.
pub struct PlaylistsManager {
    playlists: Vec<Playlist>,
}

impl PlaylistsManager {
    pub fn new(playlists: Option<Vec<Playlist>>) -> Self {
        Self {
            playlists: playlists.unwrap_or(Vec::new()),
        }
    }

    pub async fn load() -> Result<Self, CacheError> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| CacheError::IoError(e))?;
        let playlists = serde_json::from_str(&content).map_err(|e| CacheError::SerdeError(e))?;
        Ok(Self { playlists })
    }

    pub async fn persist(&self) -> Result<(), CacheError> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CacheError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.playlists)
            .map_err(|e| CacheError::SerdeError(e))?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| CacheError::IoError(e))
    }

    pub fn set_playlists(&mut self, playlists: Vec<Playlist>) -> &mut Self {
        self.playlists.clear();
        self.playlists.extend(playlists);
        self
    }

    pub fn get_playlists(&self) -> Vec<Playlist> {
        self.playlists.clone()
    }

    pub fn find(&self, id: &str) -> Option<Playlist> {
        self.playlists.iter().find(|p| p.id == id).cloned()
    }

    pub fn count(&self) -> usize {
        self.playlists.len()
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sptcli/cache/playlists.json");
        path
    }
}
