#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use moodlist::{
    error::ClientError,
    spotify::MusicClient,
    types::{CreatePlaylistRequest, CurrentUser, Playlist, Track, TrackArtist},
};

pub fn make_track(genre: &str, i: usize) -> Track {
    Track {
        id: format!("{}{}", genre, i),
        name: format!("{} song {}", genre, i),
        uri: format!("spotify:track:{}{}", genre, i),
        artists: vec![
            TrackArtist {
                id: None,
                name: format!("{} artist", genre),
            },
            TrackArtist {
                id: None,
                name: "Guest".to_string(),
            },
        ],
        external_urls: HashMap::from([(
            "spotify".to_string(),
            format!("https://open.spotify.com/track/{}{}", genre, i),
        )]),
    }
}

#[derive(Default)]
pub struct Calls {
    pub searches: Vec<String>,
    pub created: Vec<(String, CreatePlaylistRequest)>,
    pub added: Vec<(String, Vec<String>)>,
}

/// In-memory music client with switchable failures.
pub struct MockClient {
    pub tracks_per_genre: usize,
    pub failing_genres: Vec<String>,
    pub fail_user: bool,
    pub fail_create: bool,
    pub fail_add: bool,
    pub calls: Mutex<Calls>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self {
            tracks_per_genre: 3,
            failing_genres: Vec::new(),
            fail_user: false,
            fail_create: false,
            fail_add: false,
            calls: Mutex::new(Calls::default()),
        }
    }
}

impl MockClient {
    pub fn failing_genres(genres: &[&str]) -> Self {
        Self {
            failing_genres: genres.iter().map(|g| g.to_string()).collect(),
            ..Self::default()
        }
    }

    fn api_error(status: u16, message: &str) -> ClientError {
        ClientError::Api {
            status,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl MusicClient for MockClient {
    async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        if self.fail_user {
            return Err(Self::api_error(401, "The access token expired"));
        }
        Ok(CurrentUser {
            id: "listener".to_string(),
            display_name: Some("Listener".to_string()),
        })
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        market: &str,
    ) -> Result<Vec<Track>, ClientError> {
        assert_eq!(limit, 3);
        assert_eq!(market, "US");
        self.calls.lock().unwrap().searches.push(query.to_string());

        let genre = query.strip_prefix("genre:").unwrap_or(query);
        if self.failing_genres.iter().any(|g| g == genre) {
            return Err(Self::api_error(429, "API rate limit exceeded"));
        }

        Ok((0..self.tracks_per_genre)
            .map(|i| make_track(genre, i))
            .collect())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .created
            .push((user_id.to_string(), request.clone()));

        if self.fail_create {
            return Err(Self::api_error(403, "Insufficient client scope"));
        }

        Ok(Playlist {
            id: "pl123".to_string(),
            name: request.name.clone(),
            description: Some(request.description.clone()),
            public: Some(request.public),
            external_urls: HashMap::from([(
                "spotify".to_string(),
                "https://open.spotify.com/playlist/pl123".to_string(),
            )]),
        })
    }

    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<(), ClientError> {
        self.calls
            .lock()
            .unwrap()
            .added
            .push((playlist_id.to_string(), uris.to_vec()));

        if self.fail_add {
            return Err(Self::api_error(502, "Bad gateway"));
        }
        Ok(())
    }
}
