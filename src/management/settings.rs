use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    App,
    Style,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistOrder {
    Default,
    Alphabetical,
    Custom,
}

/// Flat application settings record.
///
/// Persisted as a single JSON document; unknown fields are ignored and
/// missing fields fall back to their defaults, so the format survives
/// version changes in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub style_palette: Palette,
    pub style: String,
    pub playlist_order: PlaylistOrder,
    pub custom_playlist_order: Vec<String>,
    pub last_playlist: String,
    pub last_device: String,
    pub last_version: String,
    pub track_numbers: bool,
    pub relative_added: bool,
    pub fixed_width_time: bool,
    pub fallback_icons: bool,
    pub show_changelog: bool,
    pub song_header_sort_by: i32,
    pub last_volume: i32,
    pub refresh_interval: i32,
    pub window_width: u32,
    pub window_height: u32,
    pub window_maximized: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            style_palette: Palette::App,
            style: String::new(),
            playlist_order: PlaylistOrder::Default,
            custom_playlist_order: Vec::new(),
            last_playlist: String::new(),
            last_device: String::new(),
            last_version: String::new(),
            track_numbers: true,
            relative_added: true,
            fixed_width_time: true,
            fallback_icons: false,
            show_changelog: true,
            song_header_sort_by: -1,
            last_volume: 0,
            refresh_interval: 3,
            window_width: 0,
            window_height: 0,
            window_maximized: false,
        }
    }
}

pub struct SettingsManager {
    settings: Settings,
}

impl SettingsManager {
    pub fn new(settings: Settings) -> Self {
        SettingsManager { settings }
    }

    /// Loads settings from disk, falling back to defaults when the file is
    /// missing or unreadable.
    pub async fn load() -> Self {
        let path = Self::settings_path();
        let settings = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Settings::default(),
        };
        Self { settings }
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::settings_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| e.to_string())?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn settings_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sptcli/settings.json");
        path
    }
}
