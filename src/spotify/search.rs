use reqwest::Url;

use crate::{
    config,
    management::TokenManager,
    spotify::{ApiError, request},
    types::{SearchResponse, SearchResults},
    utils::SearchKinds,
};

/// Searches the catalog for tracks, artists, albums and playlists.
///
/// Queries one endpoint for all requested entity kinds at once; kinds not
/// included in `kinds` come back empty. Result order within each category
/// is the API's relevance order and is preserved.
///
/// # Arguments
///
/// * `query` - Free-text search query
/// * `kinds` - Entity kinds to search for
/// * `limit` - Maximum number of results per category (1-50)
pub async fn search(
    token_mgr: &mut TokenManager,
    query: &str,
    kinds: &SearchKinds,
    limit: u32,
) -> Result<SearchResults, ApiError> {
    // query strings need percent-encoding, so the URL is built properly here
    let url = Url::parse_with_params(
        &format!("{uri}/search", uri = &config::spotify_apiurl()),
        &[
            ("q", query),
            ("type", kinds.to_string().as_str()),
            ("limit", limit.to_string().as_str()),
        ],
    )
    .expect("invalid Spotify API URL");

    let response: SearchResponse = request::get_json(token_mgr, url.as_str()).await?;

    Ok(SearchResults {
        tracks: response.tracks.map(|page| page.items).unwrap_or_default(),
        artists: response.artists.map(|page| page.items).unwrap_or_default(),
        albums: response.albums.map(|page| page.items).unwrap_or_default(),
        playlists: response.playlists.map(|page| page.items).unwrap_or_default(),
    })
}
