//! # Spotify Integration Module
//!
//! This module implements the client side of the Spotify Web API: OAuth 2.0
//! PKCE authentication, authenticated request dispatch, and the typed read
//! operations the CLI is built on. It abstracts away HTTP details, token
//! lifecycle and API quirks behind plain async functions returning parsed
//! entities.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Request Dispatch (bearer auth, retry rules)
//!     ├── Playlists / Tracks / Albums / Artists
//!     └── Search
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 PKCE flow: verifier and challenge
//! generation, a temporary local callback server, browser hand-off,
//! code-for-token exchange and refresh-token grants. PKCE needs no client
//! secret, which keeps the stored configuration down to a client ID.
//!
//! ## Request dispatch
//!
//! [`request`] is the single entry point every read operation goes
//! through. It attaches the bearer token, and reacts to error statuses:
//!
//! - **401 Unauthorized**: the access token is refreshed exactly once and
//!   the request retried; a second 401 or a failed refresh fails the
//!   operation.
//! - **429 Too Many Requests**: the `Retry-After` header is honoured up to
//!   a bound before the request is retried.
//! - **502 Bad Gateway**: treated as transient, retried after a delay.
//!
//! Anything else — network errors, other error statuses, malformed JSON —
//! propagates to the caller as an [`ApiError`].
//!
//! ## Operations
//!
//! - [`playlists`] - the user's playlists, single playlists and their
//!   ordered tracks
//! - [`tracks`] - single tracks and the user's saved tracks
//! - [`albums`] - album details with track listings, artist discographies
//! - [`artists`] - artist details, followed artists, top tracks
//! - [`search`] - catalog search across entity kinds
//!
//! Endpoint paths and field names mirror the remote API exactly; they are
//! not under this crate's control.
//!
//! ## Error Types
//!
//! All operations return `Result<T, ApiError>`. Transport failures and
//! application failures share that one channel and render to a single
//! message for the caller.

use std::fmt;

pub mod albums;
pub mod artists;
pub mod auth;
pub mod playlists;
pub mod request;
pub mod search;
pub mod tracks;

/// Failure of an API operation.
///
/// Covers transport errors, error statuses the dispatch layer gave up on,
/// and token refresh failures.
#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    Token(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(err) => write!(f, "{}", err),
            ApiError::Status(status) => write!(f, "request failed with status {}", status),
            ApiError::Token(msg) => write!(f, "token refresh failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
