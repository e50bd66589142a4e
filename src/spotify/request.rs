use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{management::TokenManager, spotify::ApiError, warning};

/// Longest Retry-After the client is willing to wait out.
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Delay before retrying a 502 Bad Gateway response.
const BAD_GATEWAY_DELAY_SECS: u64 = 10;

/// How to proceed after inspecting a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Response is usable, parse the body.
    Accept,
    /// Refresh the access token, then retry the request.
    RefreshAndRetry,
    /// Transient failure, wait the given number of seconds and retry.
    Wait(u64),
    /// Give up and surface the status to the caller.
    Fail,
}

/// Decides how to proceed for a response status.
///
/// A 401 triggers a token refresh exactly once per request; `refreshed`
/// reports whether that refresh already happened, so a second 401 fails.
/// Rate limiting waits out the advertised Retry-After unless it exceeds
/// [`MAX_RETRY_AFTER_SECS`]; a 502 gets a fixed delay before the retry.
pub fn retry_decision(status: u16, refreshed: bool, retry_after: Option<u64>) -> RetryDecision {
    match status {
        200..=299 => RetryDecision::Accept,
        401 if !refreshed => RetryDecision::RefreshAndRetry,
        429 => {
            let wait = retry_after.unwrap_or(1);
            if wait <= MAX_RETRY_AFTER_SECS {
                RetryDecision::Wait(wait)
            } else {
                RetryDecision::Fail
            }
        }
        502 => RetryDecision::Wait(BAD_GATEWAY_DELAY_SECS),
        _ => RetryDecision::Fail,
    }
}

/// Sends an authenticated GET request and parses the JSON response body.
///
/// This is the single dispatch point for all read operations. The access
/// token is taken from the token manager, which refreshes proactively near
/// expiry; an unexpected 401 still refreshes once and retries, after which
/// a second 401 — or a failed refresh — fails the request.
///
/// # Errors
///
/// - `ApiError::Http` - network failure or malformed JSON body
/// - `ApiError::Status` - error status the retry rules gave up on
/// - `ApiError::Token` - the 401-triggered token refresh failed
pub async fn get_json<T: DeserializeOwned>(
    token_mgr: &mut TokenManager,
    url: &str,
) -> Result<T, ApiError> {
    let client = Client::new();
    let mut refreshed = false;

    loop {
        let token = token_mgr.get_valid_token().await;
        let response = client
            .get(url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());

        match retry_decision(status.as_u16(), refreshed, retry_after) {
            RetryDecision::Accept => {
                return response.json::<T>().await.map_err(ApiError::Http);
            }
            RetryDecision::RefreshAndRetry => {
                refreshed = true;
                token_mgr.force_refresh().await.map_err(ApiError::Token)?;
            }
            RetryDecision::Wait(secs) => {
                if status == StatusCode::TOO_MANY_REQUESTS {
                    warning!("Rate limited, retrying in {} seconds...", secs);
                }
                sleep(Duration::from_secs(secs)).await;
            }
            RetryDecision::Fail => {
                return Err(ApiError::Status(status));
            }
        }
    }
}
