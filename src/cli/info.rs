use chrono::Utc;

use crate::{
    info,
    management::{
        LIBRARY_CACHE_ID, PlaylistsManager, SettingsManager, TokenManager, TrackListManager,
    },
    warning,
};

/// Displays information about the local application state.
///
/// `--cache` reports what is currently cached and whether the stored
/// access token is still valid; `--settings` prints the settings record.
pub async fn info(cache: bool, settings: bool) {
    if cache {
        let playlist_count = match PlaylistsManager::load().await {
            Ok(mgr) => mgr.count(),
            Err(_) => 0,
        };

        let library_count = match TrackListManager::load(LIBRARY_CACHE_ID.to_string()).await {
            Ok(mgr) => mgr.count(),
            Err(_) => 0,
        };

        info!("Cached playlists: {}", playlist_count);
        info!("Cached library tracks: {}", library_count);

        match TokenManager::load().await {
            Ok(token_mgr) => {
                let token = token_mgr.current_token();
                let expires_at = (token.obtained_at + token.expires_in) as i64;
                let remaining = expires_at - Utc::now().timestamp();
                if remaining > 0 {
                    info!("Access token valid for {} more seconds.", remaining);
                } else {
                    warning!("Access token expired; it will be refreshed on next use.");
                }
            }
            Err(_) => warning!("No token stored. Run sptcli auth."),
        }

        return;
    }

    if settings {
        let settings_mgr = SettingsManager::load().await;
        let settings = settings_mgr.get();

        info!("Palette: {:?}", settings.style_palette);
        info!("Playlist order: {:?}", settings.playlist_order);
        info!("Relative added dates: {}", settings.relative_added);
        info!("Track numbers: {}", settings.track_numbers);
        if !settings.last_playlist.is_empty() {
            info!("Last playlist: {}", settings.last_playlist);
        }
        if !settings.last_device.is_empty() {
            info!("Last device: {}", settings.last_device);
        }
        info!("Refresh interval: {}s", settings.refresh_interval);
    }
}
