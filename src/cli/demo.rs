use crate::{catalog::Mood, info, render, success};

pub fn moods() {
    println!("{}", render::mood_table());
}

pub fn demo(mood: Mood) {
    let entry = mood.entry();
    info!("{} Vibes: {}", mood, entry.description);
    info!("Genres: {}", entry.genres.join(", "));
    success!("Demo Playlist – {} Vibes", mood);
    println!("{}", render::demo_table(mood));
    info!("This is a demo only – connect Spotify to create a real playlist.");
}
