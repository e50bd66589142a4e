//! # CLI Module
//!
//! This module provides the command-line interface layer of sptcli. It
//! implements all user-facing commands and coordinates between the API
//! client, the local caches and settings, and terminal output.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - OAuth 2.0 PKCE flow for API access
//!
//! ### Catalog
//!
//! - [`search`] - Search for tracks, artists, albums and playlists
//! - [`show_track`] - Details of a single track
//! - [`show_album`] - Album details and its track listing
//! - [`show_artist`] - Artist details, top tracks and releases
//! - [`list_followed`] - Artists the user follows
//!
//! ### Playlists and Library
//!
//! - [`list_playlists`] - Cached playlists of the user, with refresh
//! - [`show_playlist`] - Ordered tracks of one playlist, cache-first
//! - [`list_library`] / [`update_library`] - The user's saved tracks
//!
//! ### Information
//!
//! - [`info`] - Cache and settings status
//!
//! ## Architecture Design
//!
//! Each command delegates to the spotify and management modules and keeps
//! its own responsibilities to user interaction:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token/Cache/Settings)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Caching Strategy
//!
//! Query commands read from the local cache and direct the user to the
//! matching update command when data is missing; update commands and
//! cache misses fetch from the API and overwrite the cached copy. Long
//! fetches show progress spinners, results are printed as tables.

mod albums;
mod artists;
mod auth;
mod info;
mod playlists;
mod search;
mod tracks;

pub use albums::show_album;
pub use artists::list_followed;
pub use artists::show_artist;
pub use auth::auth;
pub use info::info;
pub use playlists::list_playlists;
pub use playlists::show_playlist;
pub use search::search;
pub use tracks::list_library;
pub use tracks::show_track;
pub use tracks::update_library;
