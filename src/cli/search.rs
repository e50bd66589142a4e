use tabled::Table;

use crate::{
    cli::tracks,
    error, info,
    management::{SettingsManager, TokenManager},
    spotify,
    types::{AlbumTableRow, ArtistTableRow, PlaylistTableRow},
    utils::{self, SearchKinds},
};

pub async fn search(query: String, kinds: SearchKinds, limit: u32) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load token. Please run sptcli auth\n Error: {}", e);
        }
    };

    let settings_mgr = SettingsManager::load().await;
    let relative_added = settings_mgr.get().relative_added;

    let pb = utils::spinner("Searching...");
    let results = match spotify::search::search(&mut token_mgr, &query, &kinds, limit).await {
        Ok(results) => results,
        Err(e) => {
            pb.finish_and_clear();
            error!("Search failed: {}", e);
        }
    };
    pb.finish_and_clear();

    if results.tracks.is_empty()
        && results.artists.is_empty()
        && results.albums.is_empty()
        && results.playlists.is_empty()
    {
        info!("No results for '{}'.", query);
        return;
    }

    if !results.tracks.is_empty() {
        info!("Tracks");
        let rows = tracks::track_table_rows(&results.tracks, relative_added);
        println!("{}", Table::new(rows));
    }

    if !results.artists.is_empty() {
        info!("Artists");
        let rows: Vec<ArtistTableRow> = results
            .artists
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

    if !results.albums.is_empty() {
        info!("Albums");
        let rows: Vec<AlbumTableRow> = results
            .albums
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

    if !results.playlists.is_empty() {
        info!("Playlists");
        let rows: Vec<PlaylistTableRow> = results
            .playlists
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
}
