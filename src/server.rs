use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api::{self, AppState},
    config, error,
    spotify::{Authorizer, MusicClient, SpotifyClient},
};

/// State backed by a single shared Spotify client, or demo-only without one.
pub fn app_state(spotify: Option<Arc<SpotifyClient>>) -> AppState {
    match spotify {
        Some(client) => AppState::new(
            Some(Arc::clone(&client) as Arc<dyn MusicClient>),
            Some(client as Arc<dyn Authorizer>),
        ),
        None => AppState::default(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/demo", post(api::demo))
        .route("/playlist", post(api::playlist))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/health", get(api::health))
        .route("/api/moods", get(api::list_moods))
        .route("/api/moods/{mood}", get(api::get_mood))
        .with_state(state)
}

/// Serves the web UI until the process is stopped.
///
/// `addr` overrides the configured `SERVER_ADDRESS`.
pub async fn start_api_server(spotify: Option<Arc<SpotifyClient>>, addr: Option<String>) {
    let app = router(app_state(spotify));

    let addr_str = addr.unwrap_or_else(config::server_addr);
    let addr = match SocketAddr::from_str(&addr_str) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address {}: {}", addr_str, e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    tracing::info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
    }
}
