use crate::{cli::spotify_client, error, spotify};

pub async fn auth() {
    let Some(client) = spotify_client() else {
        error!("Cannot authorize without Spotify credentials.");
    };

    if !spotify::auth::auth(client).await {
        error!("Authentication failed or timed out.");
    }
}
