//! # CLI Module
//!
//! Command implementations behind the `moodlist` binary.
//!
//! - [`serve`] - Runs the web UI (the main way to use the application)
//! - [`moods`] - Prints the quick mood guide
//! - [`demo`] - Prints the demo playlist of a mood, no account needed
//! - [`auth`] - Connects a Spotify account through the browser
//! - [`playlist`] - Creates a real playlist using the cached token
//!
//! ```bash
//! moodlist serve                # open http://127.0.0.1:8506
//! moodlist demo chill
//! moodlist auth && moodlist playlist happy
//! ```
//!
//! Missing credentials are never fatal for `serve`, `moods` and `demo`; the
//! commands that need Spotify stop with a message instead.

mod auth;
mod demo;
mod playlist;
mod serve;

pub use auth::auth;
pub use demo::{demo, moods};
pub use playlist::playlist;
pub use serve::serve;

use std::sync::Arc;

use crate::{config, spotify::SpotifyClient, warning};

/// Builds the shared Spotify client when credentials are configured.
fn spotify_client() -> Option<Arc<SpotifyClient>> {
    let credentials = match config::spotify_credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            warning!("{}", e);
            return None;
        }
    };

    match SpotifyClient::new(credentials) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warning!("Spotify client setup failed. Check your credentials. Err: {}", e);
            None
        }
    }
}
