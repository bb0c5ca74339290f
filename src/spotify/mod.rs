//! # Spotify Integration Module
//!
//! A small client for the Spotify Web API covering exactly what the
//! playlist generator needs: identifying the current user, searching
//! tracks, creating a playlist and adding tracks to it, plus the OAuth 2.0
//! authorization-code flow that grants access to the user's account.
//!
//! ## Architecture
//!
//! ```text
//! Generator / Web handlers / CLI
//!          ↓
//! MusicClient + Authorizer traits
//!          ↓
//! SpotifyClient
//!     ├── auth      (authorize URL, code exchange, refresh)
//!     ├── user      (GET /me)
//!     ├── search    (GET /search)
//!     └── playlist  (POST /users/{id}/playlists, POST /playlists/{id}/tracks)
//!          ↓
//! reqwest
//! ```
//!
//! The traits are the seam the rest of the crate programs against, so the
//! generator and the web handlers can be exercised without network access.
//!
//! ## Shared handle
//!
//! A single `SpotifyClient` is built at startup when credentials are present
//! and shared behind an `Arc`. Its only interior state is the token slot and
//! the pending authorization request, both behind async mutexes.
//!
//! ## Error handling
//!
//! Every call returns [`ClientError`]. Non-2xx responses are turned into
//! [`ClientError::Api`] carrying the HTTP status and Spotify's message. No
//! call is retried. A refresh the token endpoint refuses, or a 401 from the
//! API, disconnects the client and deletes the cached token.

pub mod auth;
pub mod playlist;
pub mod search;
pub mod user;

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    config::{SpotifyCredentials, SpotifyEndpoints},
    error::ClientError,
    management::TokenManager,
    types::{ApiErrorResponse, CreatePlaylistRequest, CurrentUser, PkceToken, Playlist, Token, Track},
};

/// Requests taking longer than this fail with a transport error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations the playlist generator needs from a music service.
#[async_trait]
pub trait MusicClient: Send + Sync {
    async fn current_user(&self) -> Result<CurrentUser, ClientError>;

    /// Track search. `query` uses Spotify's field filter syntax, e.g. `genre:pop`.
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        market: &str,
    ) -> Result<Vec<Track>, ClientError>;

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, ClientError>;

    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<(), ClientError>;
}

/// Connecting a user account to the client.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Starts an authorization request and returns the URL to send the user to.
    async fn authorize_url(&self) -> Result<String, ClientError>;

    /// Completes the request started by [`Authorizer::authorize_url`].
    async fn complete_authorization(&self, code: &str, state: &str) -> Result<(), ClientError>;

    async fn is_connected(&self) -> bool;
}

/// Spotify Web API client shared by the whole process.
pub struct SpotifyClient {
    http: Client,
    credentials: SpotifyCredentials,
    endpoints: SpotifyEndpoints,
    token_cache: PathBuf,
    tokens: Mutex<Option<TokenManager>>,
    pending: Mutex<Option<PkceToken>>,
}

impl SpotifyClient {
    /// Builds a client against the configured Spotify endpoints, caching the
    /// token at [`TokenManager::token_path`].
    pub fn new(credentials: SpotifyCredentials) -> Result<Self, ClientError> {
        Self::with_endpoints(
            credentials,
            SpotifyEndpoints::from_env(),
            TokenManager::token_path(),
        )
    }

    pub fn with_endpoints(
        credentials: SpotifyCredentials,
        endpoints: SpotifyEndpoints,
        token_cache: PathBuf,
    ) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            credentials,
            endpoints,
            token_cache,
            tokens: Mutex::new(None),
            pending: Mutex::new(None),
        })
    }

    /// Installs a token, e.g. one obtained out of band.
    pub async fn set_token(&self, token: Token) {
        *self.tokens.lock().await = Some(TokenManager::new(token, self.token_cache.clone()));
    }

    /// Restores a previously persisted token, if any.
    pub async fn restore_cached_token(&self) -> bool {
        match TokenManager::load(self.token_cache.clone()).await {
            Ok(manager) => {
                *self.tokens.lock().await = Some(manager);
                true
            }
            Err(_) => false,
        }
    }

    /// Drops the token and its cache, so the next action asks for a new login.
    pub async fn disconnect(&self) {
        let manager = self.tokens.lock().await.take();
        forget(manager).await;
    }

    async fn access_token(&self) -> Result<String, ClientError> {
        let mut tokens = self.tokens.lock().await;
        let manager = tokens.as_mut().ok_or(ClientError::NotAuthorized)?;
        let result = manager
            .get_valid_token(&self.http, &self.endpoints.token_url, &self.credentials)
            .await;

        // A refresh token the server refuses will never work again; transport
        // failures keep it for the next attempt.
        if let Err(ClientError::Api { status: 400..=499, .. }) = &result {
            tracing::warn!("Spotify refused the token refresh, disconnecting");
            forget(tokens.take()).await;
        }
        result
    }

    /// Disconnects when Spotify answered 401, i.e. the access token was revoked.
    async fn checked<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(ClientError::Api { status: 401, .. }) = &result {
            tracing::warn!("Spotify rejected the access token, disconnecting");
            self.disconnect().await;
        }
        result
    }
}

async fn forget(manager: Option<TokenManager>) {
    let Some(manager) = manager else {
        return;
    };
    if let Err(e) = manager.forget().await {
        tracing::warn!("Failed to remove cached token: {}", e);
    }
}

#[async_trait]
impl MusicClient for SpotifyClient {
    async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        let token = self.access_token().await?;
        let result = user::current_user(&self.http, &self.endpoints.api_url, &token).await;
        self.checked(result).await
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        market: &str,
    ) -> Result<Vec<Track>, ClientError> {
        let token = self.access_token().await?;
        let result = search::search_tracks(
            &self.http,
            &self.endpoints.api_url,
            &token,
            query,
            limit,
            market,
        )
        .await;
        self.checked(result).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, ClientError> {
        let token = self.access_token().await?;
        let result =
            playlist::create(&self.http, &self.endpoints.api_url, &token, user_id, request).await;
        self.checked(result).await
    }

    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<(), ClientError> {
        let token = self.access_token().await?;
        let result = playlist::add_tracks(
            &self.http,
            &self.endpoints.api_url,
            &token,
            playlist_id,
            uris,
        )
        .await
        .map(|_| ());
        self.checked(result).await
    }
}

/// Decodes a successful response, or turns an error response into
/// [`ClientError::Api`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => body,
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
