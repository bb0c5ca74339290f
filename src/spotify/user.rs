use reqwest::Client;

use crate::{error::ClientError, spotify::read_json, types::CurrentUser};

/// Retrieves the profile of the user owning `token` (`GET /me`).
pub async fn current_user(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<CurrentUser, ClientError> {
    let response = client
        .get(format!("{uri}/me", uri = api_url))
        .bearer_auth(token)
        .send()
        .await?;

    read_json::<CurrentUser>(response).await
}
