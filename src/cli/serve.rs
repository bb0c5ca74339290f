use crate::{cli::spotify_client, info, server::start_api_server, success};

pub async fn serve(addr: Option<String>) {
    let client = spotify_client();

    match &client {
        Some(client) => {
            success!("Spotify credentials found.");
            if client.restore_cached_token().await {
                info!("Restored cached Spotify login.");
            }
        }
        None => info!("Running in demo mode only."),
    }

    start_api_server(client, addr).await;
}
