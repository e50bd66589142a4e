use tabled::Table;

use crate::{
    cli::tracks,
    error, info,
    management::{SettingsManager, TokenManager, TrackListManager},
    spotify,
    types::Track,
    utils, warning,
};

/// Shows an album and its track listing.
///
/// Track lists are cached by album id; a cache miss or `--update` fetches
/// from the API and overwrites the cached copy.
pub async fn show_album(id: String, update: bool) {
    let settings_mgr = SettingsManager::load().await;
    let relative_added = settings_mgr.get().relative_added;

    let mut cached: Option<Vec<Track>> = None;
    if !update {
        if let Ok(track_mgr) = TrackListManager::load(id.clone()).await {
            cached = Some(track_mgr.get_tracks());
        }
    }

    let tracks = match cached {
        Some(tracks) => {
            info!("Album: {}", id);
            tracks
        }
        None => {
            let mut token_mgr = match TokenManager::load().await {
                Ok(t) => t,
                Err(e) => {
                    error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
                }
            };

            let pb = utils::spinner("Fetching album...");
            let album = match spotify::albums::get_album(&mut token_mgr, &id).await {
                Ok(album) => album,
                Err(e) => {
                    pb.finish_and_clear();
                    error!("Failed to fetch album: {}", e);
                }
            };

            pb.set_message("Fetching album tracks...");
            let fetched = match spotify::albums::get_album_tracks(&mut token_mgr, &id).await {
                Ok(tracks) => tracks,
                Err(e) => {
                    pb.finish_and_clear();
                    error!("Failed to fetch album tracks: {}", e);
                }
            };
            pb.finish_and_clear();

            info!(
                "Album: {} by {}",
                album.name,
                utils::combine_artist_names(&album.artists, ", ")
            );
            if !album.release_date.is_empty() {
                info!("Released: {}", album.release_date);
            }

            let mut track_mgr = TrackListManager::new(id.clone(), None);
            track_mgr.set_tracks(fetched.clone());
            if let Err(e) = track_mgr.persist().await {
                warning!("Failed to cache album tracks: {:?}", e);
            }
            fetched
        }
    };

    info!("{} tracks", tracks.len());
    let rows = tracks::track_table_rows(&tracks, relative_added);
    println!("{}", Table::new(rows));
}
