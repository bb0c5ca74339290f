use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::api::AppState;

/// Sends the user to Spotify's authorization page.
pub async fn login(State(state): State<AppState>) -> Response {
    let Some(auth) = state.auth else {
        return Html("<h4>Spotify credentials missing.</h4><p><a href='/'>Back</a></p>")
            .into_response();
    };

    match auth.authorize_url().await {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            tracing::error!("Cannot start authorization: {}", e);
            Html("<h4>Cannot start Spotify login.</h4><p><a href='/'>Back</a></p>")
                .into_response()
        }
    }
}

/// Receives the authorization code and exchanges it for a token.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(auth) = state.auth else {
        return Html("<h4>Spotify credentials missing.</h4>").into_response();
    };

    if let Some(error) = params.get("error") {
        tracing::warn!("Authorization denied: {}", error);
        return Html("<h4>Login cancelled.</h4><p><a href='/'>Back</a></p>").into_response();
    }

    let (Some(code), Some(oauth_state)) = (params.get("code"), params.get("state")) else {
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    match auth.complete_authorization(code, oauth_state).await {
        Ok(()) => {
            tracing::info!("Spotify account connected");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4><p><a href='/login'>Try again</a></p>").into_response()
        }
    }
}
