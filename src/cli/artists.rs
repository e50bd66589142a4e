use tabled::Table;

use crate::{
    cli::tracks,
    error, info,
    management::{SettingsManager, TokenManager},
    spotify, success,
    types::{AlbumTableRow, Artist, ArtistTableRow},
    utils,
};

pub async fn list_followed() {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
        }
    };

    let pb = utils::spinner("Fetching followed artists...");

    let mut all_artists: Vec<Artist> = Vec::new();
    let mut after: Option<String> = None;

    loop {
        let result = spotify::artists::get_followed_artists(&mut token_mgr, 50, after.clone()).await;

        match result {
            Ok((artists, next_after)) => {
                if artists.is_empty() {
                    break;
                }

                all_artists.extend(artists);
                pb.set_message(format!("Fetched {} artists...", all_artists.len()));
                after = next_after;

                if after.is_none() {
                    break;
                }
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch followed artists: {}", e);
            }
        }
    }

    pb.finish_and_clear();
    success!("Fetched {} artists!", all_artists.len());

    all_artists.sort_by_key(|a| utils::sort_key(&a.name));

    let rows: Vec<ArtistTableRow> = all_artists
        .into_iter()
        .map(|a| ArtistTableRow {
            name: a.name,
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub async fn show_artist(id: String) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
        }
    };

    let settings_mgr = SettingsManager::load().await;

    let pb = utils::spinner("Fetching artist...");
    let artist = match spotify::artists::get_artist(&mut token_mgr, &id).await {
        Ok(artist) => artist,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch artist: {}", e);
        }
    };

    pb.set_message("Fetching top tracks...");
    let top_tracks = match spotify::artists::get_top_tracks(&mut token_mgr, &id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch top tracks: {}", e);
        }
    };

    pb.set_message("Fetching releases...");
    let albums = match spotify::albums::get_artist_albums(&mut token_mgr, &id, 20).await {
        Ok(albums) => albums,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch releases: {}", e);
        }
    };
    pb.finish_and_clear();

    info!("Artist: {}", artist.name);
    if !artist.genres.is_empty() {
        info!("Genres: {}", artist.genres.join(", "));
    }

    if !top_tracks.is_empty() {
        info!("Top tracks");
        let rows = tracks::track_table_rows(&top_tracks, settings_mgr.get().relative_added);
        println!("{}", Table::new(rows));
    }

    if !albums.is_empty() {
        info!("Releases");
        let rows: Vec<AlbumTableRow> = albums
            .into_iter()
            .map(|album| AlbumTableRow {
                name: album.name,
                artists: utils::combine_artist_names(&album.artists, ", "),
                released: album.release_date,
                kind: album.album_type,
            })
            .collect();
        println!("{}", Table::new(rows));
    }
}
