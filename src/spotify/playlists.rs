use crate::{
    config,
    management::TokenManager,
    spotify::{ApiError, request, tracks},
    types::{Paging, Playlist, Track, TrackItem},
};

/// Retrieves all playlists of the current user.
///
/// Follows the paging envelope's `next` links until the collection is
/// complete, 50 playlists per page.
///
/// # Example
///
/// ```
/// let playlists = get_user_playlists(&mut token_mgr).await?;
/// println!("You have {} playlists", playlists.len());
/// ```
pub async fn get_user_playlists(token_mgr: &mut TokenManager) -> Result<Vec<Playlist>, ApiError> {
    let mut playlists = Vec::new();
    let mut url = format!("{uri}/me/playlists?limit=50", uri = &config::spotify_apiurl());

    loop {
        let page: Paging<Playlist> = request::get_json(token_mgr, &url).await?;
        playlists.extend(page.items);

        match page.next {
            Some(next) => url = next,
            None => break,
        }
    }

    Ok(playlists)
}

/// Retrieves a single playlist by its ID.
pub async fn get_playlist(token_mgr: &mut TokenManager, id: &str) -> Result<Playlist, ApiError> {
    let url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = id
    );

    request::get_json(token_mgr, &url).await
}

/// Retrieves the ordered tracks of a playlist.
///
/// Follows pagination at 100 items per page. Each item's `added_at`
/// timestamp and local flag are copied onto the track itself; items whose
/// track is no longer available are skipped.
pub async fn get_playlist_tracks(
    token_mgr: &mut TokenManager,
    id: &str,
) -> Result<Vec<Track>, ApiError> {
    let mut collected = Vec::new();
    let mut url = format!(
        "{uri}/playlists/{id}/tracks?limit=100",
        uri = &config::spotify_apiurl(),
        id = id
    );

    loop {
        let page: Paging<TrackItem> = request::get_json(token_mgr, &url).await?;
        collected.extend(tracks::flatten_track_items(page.items));

        match page.next {
            Some(next) => url = next,
            None => break,
        }
    }

    Ok(collected)
}
