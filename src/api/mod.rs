//! # API Module
//!
//! HTTP handlers of the web UI.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`index`] - `GET /`, the mood picker (optionally `?mood=Sad`)
//! - [`demo`] - `POST /demo`, renders the demo playlist of the chosen mood
//! - [`playlist`] - `POST /playlist`, creates a real playlist on Spotify
//!
//! ### Authentication
//!
//! - [`login`] - `GET /login`, redirects to Spotify's authorization page
//! - [`callback`] - `GET /callback`, completes the authorization-code flow
//!
//! ### JSON
//!
//! - [`list_moods`] - `GET /api/moods`
//! - [`get_mood`] - `GET /api/moods/{mood}`
//! - [`health`] - `GET /health`
//!
//! Page handlers always answer with a full page. A failed action shows up as
//! a warning or error banner while the mood picker stays usable, so the user
//! can simply try again.

mod callback;
mod health;
mod moods;
mod pages;

use std::sync::Arc;

pub use callback::{callback, login};
pub use health::health;
pub use moods::{get_mood, list_moods};
pub use pages::{demo, index, playlist};

use crate::spotify::{Authorizer, MusicClient};

/// Shared state of all handlers.
///
/// Both handles are `None` when credentials are missing. In production they
/// point at the same `SpotifyClient`.
#[derive(Clone, Default)]
pub struct AppState {
    pub music: Option<Arc<dyn MusicClient>>,
    pub auth: Option<Arc<dyn Authorizer>>,
}

impl AppState {
    pub fn new(music: Option<Arc<dyn MusicClient>>, auth: Option<Arc<dyn Authorizer>>) -> Self {
        Self { music, auth }
    }
}
