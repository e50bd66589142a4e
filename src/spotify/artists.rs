use crate::{
    config,
    management::TokenManager,
    spotify::{ApiError, request},
    types::{Artist, FollowedArtistsResponse, TopTracksResponse, Track},
};

/// Retrieves a single artist by its ID.
pub async fn get_artist(token_mgr: &mut TokenManager, id: &str) -> Result<Artist, ApiError> {
    let url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = id
    );

    request::get_json(token_mgr, &url).await
}

/// Retrieves a page of artists the user follows.
///
/// The endpoint uses cursor-based pagination: pass the cursor returned by
/// the previous call as `after` to fetch the next page.
///
/// # Arguments
///
/// * `limit` - Maximum number of artists in this page (1-50)
/// * `after` - Optional cursor from the previous page
///
/// # Returns
///
/// The page of artists and the cursor for the next page, if any.
///
/// # Example
///
/// ```
/// let (artists, next_cursor) = get_followed_artists(&mut token_mgr, 50, None).await?;
/// if let Some(cursor) = next_cursor {
///     let (more, _) = get_followed_artists(&mut token_mgr, 50, Some(cursor)).await?;
/// }
/// ```
pub async fn get_followed_artists(
    token_mgr: &mut TokenManager,
    limit: u64,
    after: Option<String>,
) -> Result<(Vec<Artist>, Option<String>), ApiError> {
    let mut url = format!(
        "{uri}/me/following?type=artist&limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = limit
    );
    if let Some(after_val) = &after {
        url.push_str(&format!("&after={}", after_val));
    }

    let res: FollowedArtistsResponse = request::get_json(token_mgr, &url).await?;
    let next_after = res.artists.cursors.and_then(|c| c.after);

    Ok((res.artists.items, next_after))
}

/// Retrieves the top tracks of an artist for the configured market.
pub async fn get_top_tracks(token_mgr: &mut TokenManager, id: &str) -> Result<Vec<Track>, ApiError> {
    let url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = id,
        market = &config::spotify_market()
    );

    let res: TopTracksResponse = request::get_json(token_mgr, &url).await?;
    Ok(res.tracks)
}
