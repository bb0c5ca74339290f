mod common;

use common::{MockClient, make_track};
use moodlist::{
    catalog::Mood,
    error::{ClientError, MoodError},
    generator::{MAX_PLAYLIST_TRACKS, assemble, generate, resolve},
    types::Track,
};

const HAPPY_GENRES: [&str; 3] = ["pop", "dance", "electronic"];

fn names(tracks: &[Track]) -> Vec<String> {
    tracks.iter().map(|t| t.name.clone()).collect()
}

#[tokio::test]
async fn test_resolve_concatenates_in_genre_order() {
    let client = MockClient::default();
    let resolved = resolve(&HAPPY_GENRES, &client).await;

    assert_eq!(resolved.tracks.len(), 9);
    assert!(resolved.warnings.is_empty());
    assert_eq!(resolved.tracks[0].name, "pop song 0");
    assert_eq!(resolved.tracks[3].name, "dance song 0");
    assert_eq!(resolved.tracks[8].name, "electronic song 2");

    let searches = client.calls.lock().unwrap().searches.clone();
    assert_eq!(searches, vec!["genre:pop", "genre:dance", "genre:electronic"]);
}

#[tokio::test]
async fn test_resolve_skips_failed_genre() {
    let client = MockClient::failing_genres(&["dance"]);
    let resolved = resolve(&HAPPY_GENRES, &client).await;

    assert_eq!(resolved.tracks.len(), 6);
    assert_eq!(
        names(&resolved.tracks),
        vec![
            "pop song 0",
            "pop song 1",
            "pop song 2",
            "electronic song 0",
            "electronic song 1",
            "electronic song 2",
        ]
    );

    assert_eq!(resolved.warnings.len(), 1);
    match &resolved.warnings[0] {
        MoodError::SearchFailed { genre, source } => {
            assert_eq!(genre, "dance");
            assert!(matches!(source, ClientError::Api { status: 429, .. }));
        }
        other => panic!("unexpected warning: {:?}", other),
    }
    assert!(resolved.warnings[0].to_string().contains("Search failed for dance"));

    // the failure did not stop the remaining searches
    assert_eq!(client.calls.lock().unwrap().searches.len(), 3);
}

#[tokio::test]
async fn test_resolve_all_failing_is_empty_not_error() {
    let client = MockClient::failing_genres(&HAPPY_GENRES);
    let resolved = resolve(&HAPPY_GENRES, &client).await;

    assert!(resolved.tracks.is_empty());
    assert_eq!(resolved.warnings.len(), 3);
}

#[tokio::test]
async fn test_resolve_keeps_duplicates() {
    let client = MockClient::default();
    let resolved = resolve(&["rock", "rock"], &client).await;

    assert_eq!(resolved.tracks.len(), 6);
    assert_eq!(resolved.tracks[0], resolved.tracks[3]);
}

#[tokio::test]
async fn test_assemble_truncates_to_ten() {
    let client = MockClient::default();
    let tracks: Vec<Track> = (0..15).map(|i| make_track("pop", i)).collect();

    let result = assemble(Mood::Happy, &tracks, "listener", &client)
        .await
        .expect("assembly succeeds");

    assert_eq!(result.tracks.len(), MAX_PLAYLIST_TRACKS);
    assert_eq!(result.tracks, tracks[..10].to_vec());

    let calls = client.calls.lock().unwrap();
    assert_eq!(calls.created.len(), 1);
    let (user, request) = &calls.created[0];
    assert_eq!(user, "listener");
    assert_eq!(request.name, "Mood Playlist – Happy Vibes");
    assert_eq!(request.description, "Generated for a happy mood");
    assert!(request.public);

    assert_eq!(calls.added.len(), 1);
    let (playlist_id, uris) = &calls.added[0];
    assert_eq!(playlist_id, "pl123");
    assert_eq!(uris.len(), 10);
    assert_eq!(uris[0], "spotify:track:pop0");
    assert_eq!(uris[9], "spotify:track:pop9");
}

#[tokio::test]
async fn test_assemble_keeps_short_lists_whole() {
    let client = MockClient::default();
    let tracks: Vec<Track> = (0..4).map(|i| make_track("jazz", i)).collect();

    let result = assemble(Mood::Chill, &tracks, "listener", &client)
        .await
        .expect("assembly succeeds");

    assert_eq!(result.tracks.len(), 4);
    assert_eq!(result.playlist.name, "Mood Playlist – Chill Vibes");
}

#[tokio::test]
async fn test_assemble_create_failure() {
    let client = MockClient {
        fail_create: true,
        ..MockClient::default()
    };
    let tracks = vec![make_track("pop", 0)];

    let err = assemble(Mood::Happy, &tracks, "listener", &client)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MoodError::PlaylistCreationFailed {
            orphaned_playlist: None,
            ..
        }
    ));
    assert!(client.calls.lock().unwrap().added.is_empty());
}

#[tokio::test]
async fn test_assemble_add_failure_reports_orphan() {
    let client = MockClient {
        fail_add: true,
        ..MockClient::default()
    };
    let tracks = vec![make_track("pop", 0)];

    let err = assemble(Mood::Happy, &tracks, "listener", &client)
        .await
        .unwrap_err();

    match err {
        MoodError::PlaylistCreationFailed {
            orphaned_playlist,
            source,
        } => {
            assert_eq!(orphaned_playlist.as_deref(), Some("pl123"));
            assert!(matches!(source, ClientError::Api { status: 502, .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_assemble_without_tracks_never_calls_client() {
    let client = MockClient::default();
    let err = assemble(Mood::Sad, &[], "listener", &client)
        .await
        .unwrap_err();

    assert!(matches!(err, MoodError::NoTracks { .. }));
    assert!(client.calls.lock().unwrap().created.is_empty());
}

#[tokio::test]
async fn test_generate_happy_path() {
    let client = MockClient::default();
    let generated = generate(Mood::Energetic, &client).await.expect("generated");

    assert_eq!(generated.mood, Mood::Energetic);
    assert_eq!(generated.tracks.len(), 9);
    assert_eq!(generated.playlist.name, "Mood Playlist – Energetic Vibes");
    assert!(generated.warnings.is_empty());

    let searches = client.calls.lock().unwrap().searches.clone();
    assert_eq!(searches, vec!["genre:rock", "genre:metal", "genre:electronic"]);
}

#[tokio::test]
async fn test_generate_carries_search_warnings() {
    let client = MockClient::failing_genres(&["folk"]);
    let generated = generate(Mood::Sad, &client).await.expect("generated");

    assert_eq!(generated.tracks.len(), 6);
    assert_eq!(generated.warnings.len(), 1);
    assert!(generated.warnings[0].contains("folk"));
}

#[tokio::test]
async fn test_generate_short_circuits_on_empty_resolution() {
    let client = MockClient::failing_genres(&["chill", "ambient", "jazz"]);
    let err = generate(Mood::Chill, &client).await.unwrap_err();

    match err {
        MoodError::NoTracks {
            mood,
            search_warnings,
        } => {
            assert_eq!(mood, "Chill");
            assert_eq!(search_warnings.len(), 3);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let calls = client.calls.lock().unwrap();
    assert!(calls.created.is_empty());
    assert!(calls.added.is_empty());
}

#[tokio::test]
async fn test_generate_no_results_short_circuits() {
    let client = MockClient {
        tracks_per_genre: 0,
        ..MockClient::default()
    };
    let err = generate(Mood::Happy, &client).await.unwrap_err();

    assert!(matches!(err, MoodError::NoTracks { .. }));
    assert!(client.calls.lock().unwrap().created.is_empty());
}

#[tokio::test]
async fn test_generate_aborts_when_user_unknown() {
    let client = MockClient {
        fail_user: true,
        ..MockClient::default()
    };
    let err = generate(Mood::Happy, &client).await.unwrap_err();

    assert!(matches!(err, MoodError::Client(ClientError::Api { status: 401, .. })));
    assert!(err.to_string().starts_with("Spotify error:"));
    assert!(client.calls.lock().unwrap().searches.is_empty());
}
