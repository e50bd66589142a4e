mod auth;
mod cache;
mod settings;

pub use auth::TokenManager;
pub use cache::CacheError;
pub use cache::LIBRARY_CACHE_ID;
pub use cache::PlaylistsManager;
pub use cache::TrackListManager;
pub use settings::Palette;
pub use settings::PlaylistOrder;
pub use settings::Settings;
pub use settings::SettingsManager;
