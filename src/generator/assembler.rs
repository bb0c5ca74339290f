use crate::{
    catalog::Mood,
    error::MoodError,
    spotify::MusicClient,
    types::{CreatePlaylistRequest, Playlist, Track},
    utils,
};

/// Hard cap on the number of tracks added to a generated playlist.
pub const MAX_PLAYLIST_TRACKS: usize = 10;

#[derive(Debug, Clone)]
pub struct PlaylistResult {
    pub playlist: Playlist,
    pub tracks: Vec<Track>,
}

/// Creates a public playlist for `mood` and fills it with the first
/// [`MAX_PLAYLIST_TRACKS`] of `tracks`.
///
/// Both remote calls form one unit: if either fails the whole assembly fails
/// with [`MoodError::PlaylistCreationFailed`]. A playlist created before a
/// failed add call is left on the remote side and its id is reported in the
/// error. Calling this again creates another playlist.
///
/// # Errors
///
/// [`MoodError::NoTracks`] without touching the client when `tracks` is
/// empty, [`MoodError::PlaylistCreationFailed`] otherwise.
pub async fn assemble<C>(
    mood: Mood,
    tracks: &[Track],
    user_id: &str,
    client: &C,
) -> Result<PlaylistResult, MoodError>
where
    C: MusicClient + ?Sized,
{
    if tracks.is_empty() {
        return Err(MoodError::NoTracks {
            mood: mood.to_string(),
            search_warnings: Vec::new(),
        });
    }

    let selected: Vec<Track> = tracks.iter().take(MAX_PLAYLIST_TRACKS).cloned().collect();

    let request = CreatePlaylistRequest {
        name: utils::playlist_name(mood),
        description: utils::playlist_description(mood),
        public: true,
    };

    let playlist = client
        .create_playlist(user_id, &request)
        .await
        .map_err(|source| MoodError::PlaylistCreationFailed {
            orphaned_playlist: None,
            source,
        })?;

    let uris: Vec<String> = selected.iter().map(|t| t.uri.clone()).collect();
    if let Err(source) = client.add_items(&playlist.id, &uris).await {
        tracing::error!(
            playlist = %playlist.id,
            "adding tracks failed, playlist left empty: {}",
            source
        );
        return Err(MoodError::PlaylistCreationFailed {
            orphaned_playlist: Some(playlist.id),
            source,
        });
    }

    Ok(PlaylistResult {
        playlist,
        tracks: selected,
    })
}
