//! Configuration management for the mood playlist generator.
//!
//! Configuration comes from environment variables, optionally populated from
//! `.env` files. Two locations are read, the current working directory first
//! and then the local data directory (`moodlist/.env`). Variables already set
//! in the environment are never overridden.
//!
//! Only the Spotify client id and secret are required, and only for the
//! real-playlist path. Without them the application runs in demo mode.

use dotenv;
use std::{env, path::PathBuf};

use crate::error::MoodError;

/// Permissions requested during authorization.
pub const SPOTIFY_SCOPE: &str = "playlist-modify-public playlist-modify-private user-read-private";

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8506/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8506";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Variables named when credentials are missing, on every surface.
pub const CREDENTIAL_VARIABLES: &str = "SPOTIPY_CLIENT_ID & SECRET";

/// The error reported wherever Spotify is used without credentials.
pub fn missing_credentials() -> MoodError {
    MoodError::ConfigurationMissing(CREDENTIAL_VARIABLES.to_string())
}

/// Loads environment variables from `.env` files.
///
/// Reads `./.env` if present, then `moodlist/.env` in the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/moodlist/.env`
/// - macOS: `~/Library/Application Support/moodlist/.env`
/// - Windows: `%LOCALAPPDATA%/moodlist/.env`
///
/// Missing files are not an error. The data directory is created so the
/// user has an obvious place to put the file.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    dotenv::dotenv().ok();

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodlist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Application credentials registered with Spotify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Resolves credentials through `lookup`.
///
/// Each setting accepts the `SPOTIPY_` name first and the `SPOTIFY_` name as
/// a fallback. Empty values count as missing. The redirect URI defaults to
/// [`DEFAULT_REDIRECT_URI`].
///
/// # Errors
///
/// [`MoodError::ConfigurationMissing`] when the client id or secret is absent.
pub fn credentials_from<F>(lookup: F) -> Result<SpotifyCredentials, MoodError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |primary: &str, fallback: &str| {
        lookup(primary)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup(fallback).filter(|v| !v.trim().is_empty()))
    };

    let client_id = get("SPOTIPY_CLIENT_ID", "SPOTIFY_CLIENT_ID");
    let client_secret = get("SPOTIPY_CLIENT_SECRET", "SPOTIFY_CLIENT_SECRET");

    match (client_id, client_secret) {
        (Some(client_id), Some(client_secret)) => Ok(SpotifyCredentials {
            client_id,
            client_secret,
            redirect_uri: get("SPOTIPY_REDIRECT_URI", "SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
        }),
        _ => Err(missing_credentials()),
    }
}

/// Resolves credentials from the process environment.
pub fn spotify_credentials() -> Result<SpotifyCredentials, MoodError> {
    credentials_from(|key| env::var(key).ok())
}

/// Address the web server binds to, e.g. `127.0.0.1:8506`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Base URL of the Spotify Web API.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Spotify authorization endpoint users are redirected to.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Spotify token endpoint for code exchange and refresh.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Base URLs the Spotify client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyEndpoints {
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
}

impl SpotifyEndpoints {
    /// Endpoints from `SPOTIFY_API_URL`, `SPOTIFY_API_AUTH_URL` and
    /// `SPOTIFY_API_TOKEN_URL`, falling back to Spotify's public hosts.
    pub fn from_env() -> Self {
        SpotifyEndpoints {
            api_url: spotify_apiurl(),
            auth_url: spotify_apiauth_url(),
            token_url: spotify_apitoken_url(),
        }
    }
}
