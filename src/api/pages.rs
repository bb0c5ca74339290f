use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    api::AppState,
    catalog::Mood,
    config,
    error::MoodError,
    generator,
    render::{self, Outcome, PageView, SpotifyStatus},
};

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub mood: Option<String>,
}

/// Form posted by the action buttons. A missing field is reported like any
/// other unknown mood instead of being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct MoodForm {
    pub mood: Option<String>,
}

impl MoodForm {
    fn mood(&self) -> Result<Mood, (Mood, Outcome)> {
        parse_mood(self.mood.as_deref().unwrap_or_default())
    }
}

async fn spotify_status(state: &AppState) -> SpotifyStatus {
    match (&state.music, &state.auth) {
        (None, _) => SpotifyStatus::Missing,
        (Some(_), Some(auth)) => {
            if auth.is_connected().await {
                SpotifyStatus::Connected
            } else {
                SpotifyStatus::Disconnected
            }
        }
        (Some(_), None) => SpotifyStatus::Connected,
    }
}

async fn page(state: &AppState, selected: Mood, outcome: Option<Outcome>) -> Html<String> {
    let view = PageView {
        selected,
        spotify: spotify_status(state).await,
        outcome,
    };
    Html(render::render_page(&view))
}

/// Parses the submitted mood, falling back to the first catalog entry with an
/// error banner for anything outside the closed set.
fn parse_mood(raw: &str) -> Result<Mood, (Mood, Outcome)> {
    raw.parse::<Mood>().map_err(|e| {
        tracing::error!("{}", e);
        (Mood::ALL[0], Outcome::Error(e.to_string()))
    })
}

pub async fn index(State(state): State<AppState>, Query(query): Query<MoodQuery>) -> Html<String> {
    match query.mood.as_deref().map(parse_mood) {
        None => page(&state, Mood::ALL[0], None).await,
        Some(Ok(mood)) => page(&state, mood, None).await,
        Some(Err((mood, outcome))) => page(&state, mood, Some(outcome)).await,
    }
}

pub async fn demo(State(state): State<AppState>, Form(form): Form<MoodForm>) -> Html<String> {
    match form.mood() {
        Ok(mood) => {
            tracing::info!(%mood, "rendering demo playlist");
            page(&state, mood, Some(Outcome::Demo(mood))).await
        }
        Err((mood, outcome)) => page(&state, mood, Some(outcome)).await,
    }
}

pub async fn playlist(State(state): State<AppState>, Form(form): Form<MoodForm>) -> Response {
    let mood = match form.mood() {
        Ok(mood) => mood,
        Err((mood, outcome)) => return page(&state, mood, Some(outcome)).await.into_response(),
    };

    let Some(music) = state.music.clone() else {
        let err = config::missing_credentials();
        return page(&state, mood, Some(Outcome::Warning(vec![err.to_string()])))
            .await
            .into_response();
    };

    if let Some(auth) = &state.auth {
        if !auth.is_connected().await {
            return Redirect::to("/login").into_response();
        }
    }

    let outcome = match generator::generate(mood, music.as_ref()).await {
        Ok(generated) => {
            tracing::info!(
                %mood,
                playlist = %generated.playlist.id,
                tracks = generated.tracks.len(),
                "playlist created"
            );
            Outcome::Created(generated)
        }
        Err(MoodError::NoTracks {
            search_warnings, ..
        }) => {
            let mut messages = search_warnings;
            messages.push("No tracks found for that mood. Try a different one.".to_string());
            Outcome::Warning(messages)
        }
        Err(e) => {
            tracing::error!(%mood, "playlist generation failed: {}", e);
            Outcome::Error(render::user_message(&e))
        }
    };

    page(&state, mood, Some(outcome)).await.into_response()
}
