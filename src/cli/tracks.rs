use tabled::Table;

use crate::{
    error, info,
    management::{LIBRARY_CACHE_ID, SettingsManager, TokenManager, TrackListManager},
    spotify, success,
    types::{Track, TrackTableRow},
    utils, warning,
};

/// Builds display rows for a track table.
///
/// Local and unavailable tracks are marked in the title column; the added
/// column renders relative or absolute per the user's settings.
pub(crate) fn track_table_rows(tracks: &[Track], relative_added: bool) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|track| TrackTableRow {
            title: if track.is_local {
                format!("{} (local)", track.name)
            } else if !track.is_playable {
                format!("{} (unavailable)", track.name)
            } else {
                track.name.clone()
            },
            artists: utils::combine_artist_names(&track.artists, ", "),
            album: track
                .album
                .as_ref()
                .map(|album| album.name.clone())
                .unwrap_or_default(),
            length: utils::format_duration(track.duration),
            added: utils::format_added_at(&track.added_at, relative_added),
        })
        .collect()
}

pub async fn show_track(id: String) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
        }
    };

    let pb = utils::spinner("Fetching track...");
    let track = match spotify::tracks::get_track(&mut token_mgr, &id).await {
        Ok(track) => track,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch track: {}", e);
        }
    };
    pb.finish_and_clear();

    info!("Title: {}", track.name);
    info!("Artists: {}", utils::combine_artist_names(&track.artists, ", "));
    if let Some(album) = &track.album {
        info!("Album: {}", album.name);
    }
    info!("Length: {}", utils::format_duration(track.duration));
    if track.is_local {
        info!("Local track");
    }
    if !track.is_playable {
        warning!("Not playable in your market.");
    }
}

pub async fn update_library() {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
        }
    };

    let pb = utils::spinner("Fetching saved tracks...");
    let mut tracks = match spotify::tracks::get_saved_tracks(&mut token_mgr).await {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch saved tracks: {}", e);
        }
    };
    pb.finish_and_clear();

    // saves made while paging can repeat a track across page boundaries
    utils::remove_duplicate_tracks(&mut tracks);
    success!("Fetched {} saved tracks!", tracks.len());

    let library_mgr = TrackListManager::new(LIBRARY_CACHE_ID.to_string(), Some(tracks));
    if let Err(e) = library_mgr.persist().await {
        error!("Failed to cache saved tracks. Err: {:?}", e);
    }
}

pub async fn list_library() {
    match TrackListManager::load(LIBRARY_CACHE_ID.to_string()).await {
        Ok(library_mgr) => {
            let settings_mgr = SettingsManager::load().await;
            let tracks = library_mgr.get_tracks();

            info!("{} saved tracks", tracks.len());
            let rows = track_table_rows(&tracks, settings_mgr.get().relative_added);
            println!("{}", Table::new(rows));
        }
        Err(e) => warning!(
            "Failed to load library from cache: {:?}\nRun sptcli library update.",
            e
        ),
    }
}
