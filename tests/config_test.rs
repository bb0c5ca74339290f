use std::collections::HashMap;

use moodlist::{
    config::{
        CREDENTIAL_VARIABLES, DEFAULT_REDIRECT_URI, SPOTIFY_SCOPE, credentials_from,
        missing_credentials,
    },
    error::MoodError,
};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_credentials_from_spotipy_names() {
    let vars = env(&[
        ("SPOTIPY_CLIENT_ID", "id"),
        ("SPOTIPY_CLIENT_SECRET", "secret"),
        ("SPOTIPY_REDIRECT_URI", "http://localhost:9000/callback"),
    ]);
    let creds = credentials_from(|k| vars.get(k).cloned()).unwrap();

    assert_eq!(creds.client_id, "id");
    assert_eq!(creds.client_secret, "secret");
    assert_eq!(creds.redirect_uri, "http://localhost:9000/callback");
}

#[test]
fn test_credentials_fall_back_to_spotify_names() {
    let vars = env(&[
        ("SPOTIFY_CLIENT_ID", "id2"),
        ("SPOTIFY_CLIENT_SECRET", "secret2"),
    ]);
    let creds = credentials_from(|k| vars.get(k).cloned()).unwrap();

    assert_eq!(creds.client_id, "id2");
    assert_eq!(creds.client_secret, "secret2");
    assert_eq!(creds.redirect_uri, DEFAULT_REDIRECT_URI);
}

#[test]
fn test_spotipy_names_take_precedence() {
    let vars = env(&[
        ("SPOTIPY_CLIENT_ID", "primary"),
        ("SPOTIFY_CLIENT_ID", "fallback"),
        ("SPOTIFY_CLIENT_SECRET", "secret"),
    ]);
    let creds = credentials_from(|k| vars.get(k).cloned()).unwrap();
    assert_eq!(creds.client_id, "primary");
}

#[test]
fn test_missing_secret_is_configuration_missing() {
    let vars = env(&[("SPOTIPY_CLIENT_ID", "id"), ("SPOTIPY_CLIENT_SECRET", "  ")]);
    let err = credentials_from(|k| vars.get(k).cloned()).unwrap_err();

    assert!(matches!(err, MoodError::ConfigurationMissing(_)));
    assert_eq!(
        err.to_string(),
        "Spotify credentials missing – set SPOTIPY_CLIENT_ID & SECRET in your .env."
    );
}

#[test]
fn test_nothing_configured() {
    let err = credentials_from(|_| None).unwrap_err();

    assert_eq!(err.to_string(), missing_credentials().to_string());
    assert!(err.to_string().contains(CREDENTIAL_VARIABLES));
}

#[test]
fn test_scope_is_fixed() {
    assert_eq!(
        SPOTIFY_SCOPE,
        "playlist-modify-public playlist-modify-private user-read-private"
    );
}
