//! # API Module
//!
//! HTTP endpoints served by the temporary local web server during the
//! OAuth authentication flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code from the remote
//!   authorization server and completes the PKCE code exchange.
//! - [`health`] - Health check returning application status and version.
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async
//! function plugged into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
