use moodlist::{
    catalog::{CATALOG, Mood, demo_tracks, lookup, lookup_demo},
    error::MoodError,
};

#[test]
fn test_every_mood_has_three_genres_and_a_description() {
    for mood in Mood::ALL {
        let entry = lookup(mood.name()).expect("known mood");
        assert_eq!(entry.mood, mood);
        assert_eq!(entry.genres.len(), 3, "{} genres", mood);
        assert!(!entry.description.is_empty());
        assert!(entry.color.starts_with('#') && entry.color.len() == 7);
    }
}

#[test]
fn test_lookup_unknown_mood_fails() {
    let err = lookup("Unknown").unwrap_err();
    assert!(matches!(err, MoodError::UnknownMood(ref name) if name == "Unknown"));
    assert_eq!(err.to_string(), "Unknown mood: Unknown");
}

#[test]
fn test_lookup_is_case_insensitive() {
    assert_eq!(lookup("chill").unwrap().mood, Mood::Chill);
    assert_eq!(lookup(" ENERGETIC ").unwrap().name(), "Energetic");
}

#[test]
fn test_reference_genres() {
    assert_eq!(Mood::Happy.entry().genres, ["pop", "dance", "electronic"]);
    assert_eq!(Mood::Sad.entry().genres, ["indie", "folk", "acoustic"]);
    assert_eq!(Mood::Energetic.entry().genres, ["rock", "metal", "electronic"]);
    assert_eq!(Mood::Chill.entry().genres, ["chill", "ambient", "jazz"]);
}

#[test]
fn test_catalog_order_matches_enum() {
    let names: Vec<&str> = CATALOG.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Happy", "Sad", "Energetic", "Chill"]);
}

#[test]
fn test_happy_demo_tracks() {
    let tracks = demo_tracks(Mood::Happy);
    let pairs: Vec<(&str, &str)> = tracks.iter().map(|t| (t.title, t.artist)).collect();
    assert_eq!(
        pairs,
        vec![
            ("Happy", "Pharrell Williams"),
            ("Can't Stop the Feeling!", "Justin Timberlake"),
            ("Good Time", "Owl City & Carly Rae Jepsen"),
        ]
    );
}

#[test]
fn test_every_mood_has_three_demo_tracks() {
    for mood in Mood::ALL {
        let tracks = demo_tracks(mood);
        assert_eq!(tracks.len(), 3);
        assert!(
            tracks
                .iter()
                .all(|t| t.link.starts_with("https://open.spotify.com/track/"))
        );
    }
}

#[test]
fn test_lookup_demo_unknown_mood() {
    assert!(matches!(lookup_demo("Angry"), Err(MoodError::UnknownMood(_))));
    assert_eq!(lookup_demo("sad").unwrap()[0].artist, "Adele");
}
