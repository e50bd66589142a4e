use tabled::Table;

use crate::{
    cli::tracks,
    error, info,
    management::{PlaylistsManager, SettingsManager, TokenManager, TrackListManager},
    spotify, success,
    types::{PlaylistTableRow, Track},
    utils, warning,
};

pub async fn list_playlists(update: bool) {
    if update {
        let mut token_mgr = match TokenManager::load().await {
            Ok(t) => t,
            Err(e) => {
                error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
            }
        };

        let pb = utils::spinner("Fetching playlists...");
        let playlists = match spotify::playlists::get_user_playlists(&mut token_mgr).await {
            Ok(playlists) => playlists,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch playlists: {}", e);
            }
        };
        pb.finish_and_clear();
        success!("Fetched {} playlists!", playlists.len());

        let playlists_mgr = PlaylistsManager::new(Some(playlists));
        if let Err(e) = playlists_mgr.persist().await {
            error!("Failed to cache playlists. Err: {:?}", e);
        }
        return;
    }

    match PlaylistsManager::load().await {
        Ok(playlists_mgr) => {
            let settings_mgr = SettingsManager::load().await;
            let settings = settings_mgr.get();

            let mut playlists = playlists_mgr.get_playlists();
            utils::sort_playlists(
                &mut playlists,
                &settings.playlist_order,
                &settings.custom_playlist_order,
            );

            let rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|p| PlaylistTableRow {
                    name: p.name,
                    owner: p.owner.display_name,
                    tracks: p
                        .tracks
                        .map(|t| t.total.to_string())
                        .unwrap_or_default(),
                    id: p.id,
                })
                .collect();

            println!("{}", Table::new(rows));
        }
        Err(e) => warning!(
            "Failed to load playlists from cache: {:?}\nRun sptcli playlists update.",
            e
        ),
    }
}

/// Shows the ordered tracks of one playlist.
///
/// Reads the track list from the local cache; a cache miss or `--update`
/// fetches from the API and overwrites the cached copy. The playlist is
/// remembered as the last viewed one.
pub async fn show_playlist(id: String, update: bool) {
    let mut settings_mgr = SettingsManager::load().await;
    let relative_added = settings_mgr.get().relative_added;

    // playlist name known from the playlist cache, if it is there
    let mut name = match PlaylistsManager::load().await {
        Ok(mgr) => mgr.find(&id).map(|p| p.name),
        Err(_) => None,
    };

    let mut cached: Option<Vec<Track>> = None;
    if !update {
        if let Ok(track_mgr) = TrackListManager::load(id.clone()).await {
            cached = Some(track_mgr.get_tracks());
        }
    }

    let tracks = match cached {
        Some(tracks) => tracks,
        None => {
            let mut token_mgr = match TokenManager::load().await {
                Ok(t) => t,
                Err(e) => {
                    error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
                }
            };

            let pb = utils::spinner("Fetching playlist...");
            let playlist = match spotify::playlists::get_playlist(&mut token_mgr, &id).await {
                Ok(playlist) => playlist,
                Err(e) => {
                    pb.finish_and_clear();
                    error!("Failed to fetch playlist: {}", e);
                }
            };
            name = Some(playlist.name);

            pb.set_message("Fetching playlist tracks...");
            let fetched = match spotify::playlists::get_playlist_tracks(&mut token_mgr, &id).await {
                Ok(tracks) => tracks,
                Err(e) => {
                    pb.finish_and_clear();
                    error!("Failed to fetch playlist tracks: {}", e);
                }
            };
            pb.finish_and_clear();

            let mut track_mgr = TrackListManager::new(id.clone(), None);
            track_mgr.set_tracks(fetched.clone());
            if let Err(e) = track_mgr.persist().await {
                warning!("Failed to cache playlist tracks: {:?}", e);
            }
            fetched
        }
    };

    match &name {
        Some(name) => info!("Playlist: {}", name),
        None => info!("Playlist: {}", id),
    }
    info!("{} tracks", tracks.len());

    let rows = tracks::track_table_rows(&tracks, relative_added);
    println!("{}", Table::new(rows));

    settings_mgr.get_mut().last_playlist = id;
    if let Err(e) = settings_mgr.persist().await {
        warning!("Failed to save settings: {}", e);
    }
}
