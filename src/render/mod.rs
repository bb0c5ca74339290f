//! # Render Module
//!
//! Presentation only: turns catalog entries and generation results into an
//! HTML page for the web UI or tables for the terminal. Nothing in here
//! talks to Spotify or makes decisions about what to show.

mod html;
mod text;

pub use html::{Outcome, PageView, SpotifyStatus, render_demo, render_page, render_playlist};
pub use text::{demo_table, mood_table, playlist_table};

use crate::error::MoodError;

/// Message shown to the user for a failed action.
pub fn user_message(err: &MoodError) -> String {
    match err {
        MoodError::PlaylistCreationFailed {
            orphaned_playlist: Some(id),
            source,
        } => format!(
            "Spotify error: {} (an empty playlist {} was left in your account)",
            source, id
        ),
        MoodError::PlaylistCreationFailed {
            orphaned_playlist: None,
            source,
        } => format!("Spotify error: {}", source),
        other => other.to_string(),
    }
}
