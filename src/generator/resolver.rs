use crate::{error::MoodError, spotify::MusicClient, types::Track};

/// Tracks requested per genre.
pub const SEARCH_LIMIT: u32 = 3;
pub const SEARCH_MARKET: &str = "US";

/// Search results of all genres plus the searches that failed.
#[derive(Debug, Default)]
pub struct ResolvedTracks {
    /// Concatenated results in genre order.
    pub tracks: Vec<Track>,
    /// One [`MoodError::SearchFailed`] per failed genre.
    pub warnings: Vec<MoodError>,
}

/// Searches each genre once, in order, and concatenates the results.
///
/// A failed search is recorded in [`ResolvedTracks::warnings`] and the
/// remaining genres are still searched. Results are neither deduplicated nor
/// reordered. If every search fails the result is simply empty.
pub async fn resolve<C, S>(genres: &[S], client: &C) -> ResolvedTracks
where
    C: MusicClient + ?Sized,
    S: AsRef<str>,
{
    let mut resolved = ResolvedTracks::default();

    for genre in genres {
        let genre = genre.as_ref();
        let query = format!("genre:{}", genre);

        match client
            .search_tracks(&query, SEARCH_LIMIT, SEARCH_MARKET)
            .await
        {
            Ok(tracks) => {
                tracing::debug!(genre, found = tracks.len(), "genre search done");
                resolved.tracks.extend(tracks);
            }
            Err(source) => {
                tracing::warn!(genre, "search failed: {}", source);
                resolved.warnings.push(MoodError::SearchFailed {
                    genre: genre.to_string(),
                    source,
                });
            }
        }
    }

    resolved
}
