use reqwest::Client;

use crate::{
    error::ClientError,
    spotify::read_json,
    types::{AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest, Playlist},
};

/// Creates a playlist owned by `user_id` (`POST /users/{user_id}/playlists`).
pub async fn create(
    client: &Client,
    api_url: &str,
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<Playlist, ClientError> {
    let response = client
        .post(format!(
            "{uri}/users/{user_id}/playlists",
            uri = api_url,
            user_id = user_id
        ))
        .bearer_auth(token)
        .json(request)
        .send()
        .await?;

    read_json::<Playlist>(response).await
}

/// Appends tracks to a playlist (`POST /playlists/{playlist_id}/tracks`).
///
/// The endpoint accepts at most 100 URIs per request; callers stay below
/// that.
pub async fn add_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<AddTrackToPlaylistResponse, ClientError> {
    let body = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
    };

    let response = client
        .post(format!(
            "{uri}/playlists/{id}/tracks",
            uri = api_url,
            id = playlist_id
        ))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    read_json::<AddTrackToPlaylistResponse>(response).await
}
