use std::path::PathBuf;

use chrono::Utc;

use crate::{spotify, types::Token, warning};

/// Seconds before actual expiry at which a token already counts as expired.
const EXPIRY_BUFFER_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns an access token for the next request, refreshing it first
    /// when it is expired or about to expire.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Err(e) = self.force_refresh().await {
                warning!("Failed to refresh token: {}", e);
            }
        }

        self.token.access_token.clone()
    }

    /// Exchanges the refresh token for a new access token and persists it.
    ///
    /// The token endpoint may omit the refresh token in its response; the
    /// previous one stays valid in that case and is kept.
    pub async fn force_refresh(&mut self) -> Result<(), String> {
        let mut new_token = spotify::auth::refresh_token(&self.token.refresh_token).await?;
        if new_token.refresh_token.is_empty() {
            new_token.refresh_token = self.token.refresh_token.clone();
        }

        self.token = new_token;
        self.persist().await
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - EXPIRY_BUFFER_SECS
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sptcli/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
