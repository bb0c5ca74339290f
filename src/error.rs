use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failures of the external music client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spotify API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Not connected to Spotify. Connect your account first.")]
    NotAuthorized,

    #[error("Authorization failed: {0}")]
    Authorization(String),
}

/// Domain errors of the playlist generator.
#[derive(Debug, thiserror::Error)]
pub enum MoodError {
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Spotify credentials missing – set {0} in your .env.")]
    ConfigurationMissing(String),

    #[error("Search failed for {genre}: {source}")]
    SearchFailed {
        genre: String,
        #[source]
        source: ClientError,
    },

    #[error("Playlist creation failed: {source}")]
    PlaylistCreationFailed {
        /// Playlist left behind on the remote side when only the add call failed.
        orphaned_playlist: Option<String>,
        #[source]
        source: ClientError,
    },

    #[error("No tracks found for that mood. Try a different one.")]
    NoTracks {
        mood: String,
        /// Per-genre search failures that led to the empty result.
        search_warnings: Vec<String>,
    },

    #[error("Spotify error: {0}")]
    Client(#[from] ClientError),
}

impl IntoResponse for MoodError {
    fn into_response(self) -> Response {
        let status = match &self {
            MoodError::UnknownMood(_) => StatusCode::NOT_FOUND,
            MoodError::ConfigurationMissing(_) => StatusCode::SERVICE_UNAVAILABLE,
            MoodError::NoTracks { .. } => StatusCode::NOT_FOUND,
            MoodError::Client(ClientError::NotAuthorized) => StatusCode::UNAUTHORIZED,
            MoodError::SearchFailed { .. }
            | MoodError::PlaylistCreationFailed { .. }
            | MoodError::Client(_) => {
                tracing::error!("Spotify request failed: {:?}", self);
                StatusCode::BAD_GATEWAY
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, MoodError>;
