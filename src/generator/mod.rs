//! # Generator Module
//!
//! Turns a mood into a real playlist:
//!
//! ```text
//! current user ──► resolve(genres) ──► assemble(first 10 tracks)
//!                       │
//!                       └─ empty ──► NoTracks (assembler never called)
//! ```
//!
//! Every step runs sequentially against a [`MusicClient`]. Only per-genre
//! search failures are tolerated; any other failure aborts the action.

mod assembler;
mod resolver;

pub use assembler::{MAX_PLAYLIST_TRACKS, PlaylistResult, assemble};
pub use resolver::{ResolvedTracks, SEARCH_LIMIT, SEARCH_MARKET, resolve};

use crate::{
    catalog::Mood,
    error::MoodError,
    spotify::MusicClient,
    types::{Playlist, Track},
};

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedPlaylist {
    pub mood: Mood,
    pub playlist: Playlist,
    /// Tracks added to the playlist, in playlist order.
    pub tracks: Vec<Track>,
    /// Search failures that were skipped along the way.
    pub warnings: Vec<String>,
}

/// Creates a playlist for `mood` in the connected user's account.
///
/// # Errors
///
/// - [`MoodError::Client`] when the current user cannot be identified
/// - [`MoodError::NoTracks`] when every genre search failed or came back empty
/// - [`MoodError::PlaylistCreationFailed`] when creating or filling the playlist failed
pub async fn generate<C>(mood: Mood, client: &C) -> Result<GeneratedPlaylist, MoodError>
where
    C: MusicClient + ?Sized,
{
    let user = client.current_user().await?;
    tracing::debug!(user = %user.id, %mood, "generating playlist");

    let resolved = resolve(mood.entry().genres, client).await;
    let warnings: Vec<String> = resolved.warnings.iter().map(ToString::to_string).collect();

    if resolved.tracks.is_empty() {
        return Err(MoodError::NoTracks {
            mood: mood.to_string(),
            search_warnings: warnings,
        });
    }

    let result = assemble(mood, &resolved.tracks, &user.id, client).await?;

    Ok(GeneratedPlaylist {
        mood,
        playlist: result.playlist,
        tracks: result.tracks,
        warnings,
    })
}
