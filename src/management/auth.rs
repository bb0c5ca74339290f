use std::{io::ErrorKind, path::PathBuf};

use chrono::Utc;
use reqwest::Client;

use crate::{config::SpotifyCredentials, error::ClientError, spotify, types::Token};

/// Seconds before expiry at which a token is already treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Owns the OAuth token, refreshing it on demand and caching it on disk.
pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    /// Wraps `token`, caching it at `path`.
    pub fn new(token: Token, path: PathBuf) -> Self {
        TokenManager { token, path }
    }

    pub async fn load(path: PathBuf) -> Result<Self, String> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token, path })
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Deletes the cached token. A missing cache file is not an error.
    pub async fn forget(&self) -> Result<(), String> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Returns an access token, refreshing it first when it is about to expire.
    ///
    /// A failed refresh is an error: handing out a stale token would only
    /// move the failure to the next API call.
    pub async fn get_valid_token(
        &mut self,
        client: &Client,
        token_url: &str,
        credentials: &SpotifyCredentials,
    ) -> Result<String, ClientError> {
        if self.is_expired() {
            let new_token = spotify::auth::refresh_token(
                client,
                token_url,
                credentials,
                &self.token.refresh_token,
            )
            .await?;
            self.token = new_token;
            if let Err(e) = self.persist().await {
                tracing::warn!("Failed to cache refreshed token: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        Self::expired_at(&self.token, Utc::now().timestamp().max(0) as u64)
    }

    fn expired_at(token: &Token, now: u64) -> bool {
        let deadline = token
            .obtained_at
            .saturating_add(token.expires_in)
            .saturating_sub(EXPIRY_MARGIN_SECS);
        now >= deadline
    }

    /// Default cache location, `moodlist/cache/token.json` in the local data dir.
    pub fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("moodlist/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
