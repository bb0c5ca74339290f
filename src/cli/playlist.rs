use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    catalog::Mood, cli::spotify_client, error, error::MoodError, generator, info, render,
    success, warning,
};

pub async fn playlist(mood: Mood) {
    let Some(client) = spotify_client() else {
        error!("Cannot create a playlist without Spotify credentials.");
    };

    if !client.restore_cached_token().await {
        error!("Not connected to Spotify. Please run moodlist auth");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Authorising & fetching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = generator::generate(mood, client.as_ref()).await;
    pb.finish_and_clear();

    match result {
        Ok(generated) => {
            for w in &generated.warnings {
                warning!("{}", w);
            }
            success!("Playlist created!");
            info!("{}", generated.playlist.name);
            if let Some(url) = generated.playlist.spotify_url() {
                info!("Open in Spotify: {}", url);
            }
            println!("{}", render::playlist_table(&generated));
        }
        Err(MoodError::NoTracks {
            search_warnings, ..
        }) => {
            for w in &search_warnings {
                warning!("{}", w);
            }
            warning!("No tracks found for that mood. Try a different one.");
        }
        Err(e) => error!("{}", render::user_message(&e)),
    }
}
