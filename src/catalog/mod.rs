//! # Catalog Module
//!
//! Immutable reference data: the closed set of moods with their genre tags,
//! and the fixed demo tracks shown when no Spotify account is connected.
//! Everything here is `static` and never changes at runtime.

mod demo;
mod mood;

pub use demo::{DemoTrack, demo_tracks, lookup_demo};
pub use mood::{CATALOG, Mood, MoodEntry, lookup};
