use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::MoodError;

/// One of the four moods driving genre selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Chill,
}

impl Mood {
    /// All moods in catalog order.
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Energetic, Mood::Chill];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Chill => "Chill",
        }
    }

    pub fn entry(&self) -> &'static MoodEntry {
        &CATALOG[*self as usize]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MoodError::UnknownMood(s.to_string()))
    }
}

/// Genre tags, description and display color of a mood.
#[derive(Debug, Serialize)]
pub struct MoodEntry {
    pub mood: Mood,
    pub genres: &'static [&'static str],
    pub description: &'static str,
    pub color: &'static str,
}

impl MoodEntry {
    pub fn name(&self) -> &'static str {
        self.mood.name()
    }
}

/// The mood catalog, indexed by `Mood as usize`.
pub static CATALOG: [MoodEntry; 4] = [
    MoodEntry {
        mood: Mood::Happy,
        genres: &["pop", "dance", "electronic"],
        description: "Upbeat and energetic tracks to lift your spirits!",
        color: "#FFD700",
    },
    MoodEntry {
        mood: Mood::Sad,
        genres: &["indie", "folk", "acoustic"],
        description: "Gentle and soothing tracks for reflection and comfort.",
        color: "#87CEEB",
    },
    MoodEntry {
        mood: Mood::Energetic,
        genres: &["rock", "metal", "electronic"],
        description: "High-energy tracks to get you pumped up!",
        color: "#FF6B6B",
    },
    MoodEntry {
        mood: Mood::Chill,
        genres: &["chill", "ambient", "jazz"],
        description: "Relaxing and laid-back vibes for unwinding.",
        color: "#98FB98",
    },
];

/// Looks up a mood by name, case-insensitively.
///
/// # Errors
///
/// Returns [`MoodError::UnknownMood`] for anything outside the closed set.
pub fn lookup(name: &str) -> Result<&'static MoodEntry, MoodError> {
    name.parse::<Mood>().map(|mood| mood.entry())
}
