use crate::{
    config,
    management::TokenManager,
    spotify::{ApiError, request},
    types::{Album, Paging, Track},
};

/// Retrieves detailed information for a single album.
///
/// The response includes the album's track listing as a paging object;
/// tracks inside it carry no album reference of their own.
pub async fn get_album(token_mgr: &mut TokenManager, id: &str) -> Result<Album, ApiError> {
    let url = format!(
        "{uri}/albums/{id}",
        uri = &config::spotify_apiurl(),
        id = id
    );

    request::get_json(token_mgr, &url).await
}

/// Retrieves the complete track listing of an album.
///
/// Follows pagination at 50 tracks per page, so albums longer than one
/// page come back whole. Tracks carry no album reference here.
pub async fn get_album_tracks(
    token_mgr: &mut TokenManager,
    id: &str,
) -> Result<Vec<Track>, ApiError> {
    let mut tracks = Vec::new();
    let mut url = format!(
        "{uri}/albums/{id}/tracks?limit=50",
        uri = &config::spotify_apiurl(),
        id = id
    );

    loop {
        let page: Paging<Track> = request::get_json(token_mgr, &url).await?;
        tracks.extend(page.items);

        match page.next {
            Some(next) => url = next,
            None => break,
        }
    }

    Ok(tracks)
}

/// Retrieves releases of an artist.
///
/// Covers albums, singles and compilations in one page of up to `limit`
/// entries, newest first as returned by the API.
pub async fn get_artist_albums(
    token_mgr: &mut TokenManager,
    artist_id: &str,
    limit: u32,
) -> Result<Vec<Album>, ApiError> {
    let url = format!(
        "{uri}/artists/{id}/albums?include_groups=album,single,compilation&limit={limit}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        limit = limit
    );

    let page: Paging<Album> = request::get_json(token_mgr, &url).await?;
    Ok(page.items)
}
