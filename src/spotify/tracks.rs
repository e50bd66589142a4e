use crate::{
    config,
    management::TokenManager,
    spotify::{ApiError, request},
    types::{Paging, Track, TrackItem},
};

/// Retrieves a single track by its ID.
pub async fn get_track(token_mgr: &mut TokenManager, id: &str) -> Result<Track, ApiError> {
    let url = format!(
        "{uri}/tracks/{id}",
        uri = &config::spotify_apiurl(),
        id = id
    );

    request::get_json(token_mgr, &url).await
}

/// Retrieves all of the user's saved tracks, following pagination.
///
/// The save timestamp of each item lands in the track's `added_at` field.
pub async fn get_saved_tracks(token_mgr: &mut TokenManager) -> Result<Vec<Track>, ApiError> {
    let mut collected = Vec::new();
    let mut url = format!("{uri}/me/tracks?limit=50", uri = &config::spotify_apiurl());

    loop {
        let page: Paging<TrackItem> = request::get_json(token_mgr, &url).await?;
        collected.extend(flatten_track_items(page.items));

        match page.next {
            Some(next) => url = next,
            None => break,
        }
    }

    Ok(collected)
}

/// Unwraps item envelopes into bare tracks, carrying the envelope's
/// added-at timestamp and local flag over. Unavailable tracks are dropped.
pub(crate) fn flatten_track_items(items: Vec<TrackItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| {
            let mut track = item.track?;
            if let Some(added_at) = item.added_at {
                track.added_at = added_at;
            }
            if item.is_local {
                track.is_local = true;
            }
            Some(track)
        })
        .collect()
}
