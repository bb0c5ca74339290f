use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::catalog::Mood;

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    random_alphanumeric(32)
}

pub fn now_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Name of the playlist created for `mood`.
pub fn playlist_name(mood: Mood) -> String {
    format!("Mood Playlist – {} Vibes", mood)
}

pub fn playlist_description(mood: Mood) -> String {
    format!("Generated for a {} mood", mood.name().to_lowercase())
}

/// Escapes text for interpolation into HTML content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
