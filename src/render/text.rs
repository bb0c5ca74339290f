use tabled::Table;

use crate::{
    catalog::{CATALOG, Mood, demo_tracks},
    generator::GeneratedPlaylist,
    types::{MoodTableRow, TrackTableRow},
};

/// The Quick Mood Guide as a terminal table.
pub fn mood_table() -> String {
    let rows: Vec<MoodTableRow> = CATALOG
        .iter()
        .map(|entry| MoodTableRow {
            mood: entry.name().to_string(),
            description: entry.description.to_string(),
            genres: entry.genres.join(", "),
        })
        .collect();

    Table::new(rows).to_string()
}

pub fn demo_table(mood: Mood) -> String {
    let rows: Vec<TrackTableRow> = demo_tracks(mood)
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.title.to_string(),
            artists: t.artist.to_string(),
            link: t.link.to_string(),
        })
        .collect();

    Table::new(rows).to_string()
}

pub fn playlist_table(generated: &GeneratedPlaylist) -> String {
    let rows: Vec<TrackTableRow> = generated
        .tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.name.clone(),
            artists: t.artist_names(),
            link: t.spotify_url().unwrap_or_default().to_string(),
        })
        .collect();

    Table::new(rows).to_string()
}
