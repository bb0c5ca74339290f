use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    config::{SPOTIFY_SCOPE, SpotifyCredentials},
    error::ClientError,
    management::TokenManager,
    server::start_api_server,
    spotify::{Authorizer, SpotifyClient, read_json},
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Builds the URL of Spotify's authorization page.
///
/// The request uses the authorization-code flow with a PKCE S256 challenge
/// and an opaque `state` value that the callback must echo back.
///
/// # Errors
///
/// Returns [`ClientError::Authorization`] if `auth_url` is not a valid URL.
pub fn build_authorize_url(
    auth_url: &str,
    credentials: &SpotifyCredentials,
    pkce: &PkceToken,
) -> Result<String, ClientError> {
    let code_challenge = utils::generate_code_challenge(&pkce.code_verifier);
    let url = Url::parse_with_params(
        auth_url,
        &[
            ("client_id", credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", credentials.redirect_uri.as_str()),
            ("code_challenge", code_challenge.as_str()),
            ("code_challenge_method", "S256"),
            ("scope", SPOTIFY_SCOPE),
            ("state", pkce.state.as_str()),
        ],
    )
    .map_err(|e| ClientError::Authorization(format!("invalid authorization URL: {}", e)))?;

    Ok(url.into())
}

/// Exchanges an authorization code for a token.
///
/// Authenticates with the client secret (HTTP basic) and proves possession
/// of the PKCE verifier.
pub async fn exchange_code_pkce(
    client: &Client,
    token_url: &str,
    credentials: &SpotifyCredentials,
    code: &str,
    verifier: &str,
) -> Result<Token, ClientError> {
    let response = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", credentials.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let json = read_json::<TokenResponse>(response).await?;
    let refresh_token = json.refresh_token.ok_or_else(|| {
        ClientError::Authorization("token response without refresh token".to_string())
    })?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token,
        scope: json.scope.unwrap_or_default(),
        expires_in: json.expires_in,
        obtained_at: utils::now_timestamp(),
    })
}

/// Refreshes an expired access token.
///
/// Spotify may or may not rotate the refresh token; when the response omits
/// it, the previous one is kept.
pub async fn refresh_token(
    client: &Client,
    token_url: &str,
    credentials: &SpotifyCredentials,
    refresh_token: &str,
) -> Result<Token, ClientError> {
    let response = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    let json = read_json::<TokenResponse>(response).await?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .unwrap_or_else(|| refresh_token.to_string()),
        scope: json.scope.unwrap_or_default(),
        expires_in: json.expires_in,
        obtained_at: utils::now_timestamp(),
    })
}

#[async_trait]
impl Authorizer for SpotifyClient {
    async fn authorize_url(&self) -> Result<String, ClientError> {
        let pkce = PkceToken {
            code_verifier: utils::generate_code_verifier(),
            state: utils::generate_state(),
        };
        let url = build_authorize_url(&self.endpoints.auth_url, &self.credentials, &pkce)?;
        *self.pending.lock().await = Some(pkce);
        Ok(url)
    }

    async fn complete_authorization(&self, code: &str, state: &str) -> Result<(), ClientError> {
        let pkce = {
            let mut pending = self.pending.lock().await;
            let state_matches = pending.as_ref().map(|p| p.state == state);
            match state_matches {
                Some(true) => pending.take(),
                Some(false) => {
                    return Err(ClientError::Authorization(
                        "state mismatch, start the login again".to_string(),
                    ));
                }
                None => None,
            }
        }
        .ok_or_else(|| ClientError::Authorization("no login in progress".to_string()))?;

        let token = exchange_code_pkce(
            &self.http,
            &self.endpoints.token_url,
            &self.credentials,
            code,
            &pkce.code_verifier,
        )
        .await?;

        let manager = TokenManager::new(token, self.token_cache.clone());
        if let Err(e) = manager.persist().await {
            tracing::warn!("Failed to cache token: {}", e);
        }
        *self.tokens.lock().await = Some(manager);
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.tokens.lock().await.is_some()
    }
}

/// Runs the interactive login from the command line.
///
/// Starts the web server in the background so it can receive the callback,
/// opens the authorization page in the browser and waits for the token.
/// Returns `true` once the account is connected and the token cached.
pub async fn auth(client: Arc<SpotifyClient>) -> bool {
    let server_client = Arc::clone(&client);
    tokio::spawn(async move {
        start_api_server(Some(server_client), None).await;
    });

    let auth_url = match client.authorize_url().await {
        Ok(url) => url,
        Err(e) => {
            warning!("{}", e);
            return false;
        }
    };

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    if !wait_for_token(&client).await {
        return false;
    }

    success!("Authentication successful!");
    true
}

/// Polls until the callback has stored a token, for at most 60 seconds.
async fn wait_for_token(client: &SpotifyClient) -> bool {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if client.is_connected().await {
            return true;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    false
}
