use serde::Serialize;

use crate::{catalog::Mood, error::MoodError};

/// A fixed example track shown in demo mode.
#[derive(Debug, Serialize)]
pub struct DemoTrack {
    pub title: &'static str,
    pub artist: &'static str,
    pub link: &'static str,
}

const fn track(title: &'static str, artist: &'static str, link: &'static str) -> DemoTrack {
    DemoTrack {
        title,
        artist,
        link,
    }
}

static HAPPY: [DemoTrack; 3] = [
    track(
        "Happy",
        "Pharrell Williams",
        "https://open.spotify.com/track/60nZcImufyMA1MKQY3dcCH",
    ),
    track(
        "Can't Stop the Feeling!",
        "Justin Timberlake",
        "https://open.spotify.com/track/3WcC6NH9J77xPEvj1x7BeB",
    ),
    track(
        "Good Time",
        "Owl City & Carly Rae Jepsen",
        "https://open.spotify.com/track/1kP5bgJQIk0JpiuYfLUTjx",
    ),
];

static SAD: [DemoTrack; 3] = [
    track(
        "Someone Like You",
        "Adele",
        "https://open.spotify.com/track/1U4QN2CgYHN6YK3aFbLw7U",
    ),
    track(
        "All of Me",
        "John Legend",
        "https://open.spotify.com/track/3U4isOIWM3VvDubwSI3y7Z",
    ),
    track(
        "Say Something",
        "A Great Big World",
        "https://open.spotify.com/track/6Vc5wAMmXdKIAM7WUoEb7N",
    ),
];

static ENERGETIC: [DemoTrack; 3] = [
    track(
        "Eye of the Tiger",
        "Survivor",
        "https://open.spotify.com/track/2HHtWyy5CgwQZqBcI0r0uM",
    ),
    track(
        "We Will Rock You",
        "Queen",
        "https://open.spotify.com/track/54flyrjcdnQdco7300avMJ",
    ),
    track(
        "Don't Stop Believin'",
        "Journey",
        "https://open.spotify.com/track/4bHsxqR3GMrXTxEPLuK5ue",
    ),
];

static CHILL: [DemoTrack; 3] = [
    track(
        "Weightless",
        "Marconi Union",
        "https://open.spotify.com/track/3iIxFyoF2JkcXJw3Q5k2uD",
    ),
    track(
        "Clair de Lune",
        "Debussy",
        "https://open.spotify.com/track/1hnVm4tS30Eb7cWMsTqA5q",
    ),
    track(
        "River Flows in You",
        "Yiruma",
        "https://open.spotify.com/track/7yS7TgKosLgZtHNaR0upMz",
    ),
];

/// Demo tracks of a mood.
pub fn demo_tracks(mood: Mood) -> &'static [DemoTrack] {
    match mood {
        Mood::Happy => &HAPPY,
        Mood::Sad => &SAD,
        Mood::Energetic => &ENERGETIC,
        Mood::Chill => &CHILL,
    }
}

/// Demo tracks by mood name.
///
/// # Errors
///
/// Returns [`MoodError::UnknownMood`] for anything outside the closed set.
pub fn lookup_demo(name: &str) -> Result<&'static [DemoTrack], MoodError> {
    name.parse::<Mood>().map(demo_tracks)
}
