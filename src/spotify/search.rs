use reqwest::Client;

use crate::{
    error::ClientError,
    spotify::read_json,
    types::{SearchResponse, Track},
};

/// Searches the catalog for tracks matching `query` (`GET /search`).
///
/// # Arguments
///
/// * `query` - Search string, field filters allowed (e.g. `genre:jazz`)
/// * `limit` - Maximum number of tracks to return (1-50)
/// * `market` - ISO 3166-1 alpha-2 country code restricting results
///
/// # Errors
///
/// Transport failures, non-2xx responses (including 429 rate limiting) and
/// malformed bodies all come back as [`ClientError`]. Nothing is retried.
pub async fn search_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
    limit: u32,
    market: &str,
) -> Result<Vec<Track>, ClientError> {
    let limit = limit.clamp(1, 50).to_string();
    let response = client
        .get(format!("{uri}/search", uri = api_url))
        .query(&[
            ("q", query),
            ("type", "track"),
            ("limit", limit.as_str()),
            ("market", market),
        ])
        .bearer_auth(token)
        .send()
        .await?;

    let json = read_json::<SearchResponse>(response).await?;
    Ok(json.tracks.items)
}
