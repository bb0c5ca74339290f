use crate::{
    catalog::{CATALOG, Mood, MoodEntry, demo_tracks},
    config,
    generator::GeneratedPlaylist,
    utils::escape_html,
};

const STYLE: &str = r#"
  body{font-family:sans-serif;margin:0;display:flex;}
  aside.sidebar{width:16rem;padding:1rem;background:#f8f9fb;min-height:100vh;}
  main{flex:1;display:flex;gap:2rem;padding:1rem 2rem;}
  .main-col{flex:2;} .side-col{flex:1;}
  .main-header{font-size:3rem;font-weight:bold;text-align:center;color:#1DB954;margin-bottom:2rem;}
  .playlist-card{background:#f0f2f6;padding:1rem;border-radius:10px;margin:0.5rem 0;border-left:4px solid #1DB954;}
  .demo-notice{background:#d4edda;border:1px solid #c3e6cb;border-radius:5px;padding:1rem;margin:1rem 0;}
  .spotify-green{color:#1DB954;}
  .alert{padding:0.75rem 1rem;border-radius:5px;margin:0.5rem 0;}
  .alert.success{background:#d4edda;} .alert.warning{background:#fff3cd;} .alert.error{background:#f8d7da;}
  button{width:100%;padding:0.6rem;margin:0.3rem 0;font-size:1rem;cursor:pointer;}
  button.primary{background:#ff4b4b;color:#fff;border:none;border-radius:5px;}
"#;

/// Whether and how Spotify can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyStatus {
    /// Client id or secret not configured; demo mode only.
    Missing,
    /// Configured, no account connected yet.
    Disconnected,
    Connected,
}

/// Result of the last action, rendered below the action buttons.
#[derive(Debug, Clone)]
pub enum Outcome {
    Demo(Mood),
    Created(GeneratedPlaylist),
    /// Warnings, the last one being the reason the action stopped.
    Warning(Vec<String>),
    Error(String),
}

pub struct PageView {
    pub selected: Mood,
    pub spotify: SpotifyStatus,
    pub outcome: Option<Outcome>,
}

fn alert(level: &str, message: &str) -> String {
    format!(
        "<div class='alert {level}'>{message}</div>\n",
        level = level,
        message = escape_html(message)
    )
}

pub fn render_page(view: &PageView) -> String {
    let mut body = String::new();

    body.push_str(&render_sidebar());
    body.push_str("<main>\n<section class='main-col'>\n");
    body.push_str("<h1 class='main-header'>🎵 Mood Playlist Generator</h1>\n");
    body.push_str(
        "<p style='text-align:center;color:#666;'>Create personalised playlists based on your mood!</p>\n",
    );

    body.push_str("<h2>🎭 Select your mood</h2>\n");
    body.push_str(&render_picker(view));
    body.push_str(&render_mood_card(view.selected.entry()));

    match &view.outcome {
        Some(Outcome::Demo(mood)) => body.push_str(&render_demo(*mood)),
        Some(Outcome::Created(generated)) => body.push_str(&render_playlist(generated)),
        Some(Outcome::Warning(messages)) => {
            for message in messages {
                body.push_str(&alert("warning", message));
            }
        }
        Some(Outcome::Error(message)) => body.push_str(&alert("error", message)),
        None => {}
    }

    body.push_str("</section>\n<section class='side-col'>\n");
    body.push_str(&render_guide());
    body.push_str("</section>\n</main>\n");

    format!(
        "<!DOCTYPE html>\n<html lang='en'>\n<head>\n<meta charset='utf-8'>\n<title>Mood Playlist Generator</title>\n<style>{style}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        style = STYLE,
        body = body
    )
}

fn render_sidebar() -> String {
    "<aside class='sidebar'>\n<h2>📋 How to Use</h2>\n<ol>\n\
     <li><strong>Choose your mood</strong></li>\n\
     <li><strong>Generate demo playlist</strong> (no login)</li>\n\
     <li><strong>Connect Spotify</strong></li>\n\
     <li><strong>Generate real playlist &amp; enjoy!</strong></li>\n\
     </ol>\n</aside>\n"
        .to_string()
}

/// Mood select plus the action buttons, all in one form.
fn render_picker(view: &PageView) -> String {
    let mut html = String::from(
        "<form id='mood-form' method='post' action='/demo'>\n<label for='mood'>Mood:</label>\n\
         <select id='mood' name='mood' onchange=\"window.location='/?mood='+this.value\">\n",
    );

    for entry in CATALOG.iter() {
        let selected = if entry.mood == view.selected {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value='{name}'{selected}>{name} – {description}</option>\n",
            name = entry.name(),
            selected = selected,
            description = escape_html(entry.description)
        ));
    }
    html.push_str("</select>\n");

    html.push_str(
        "<div class='demo-notice'>🎯 <b>Try Demo Mode First:</b> click below to see how it works without logging in.</div>\n",
    );
    html.push_str(
        "<button class='primary' type='submit' formaction='/demo'>🎵 Generate Demo Playlist</button>\n",
    );

    html.push_str("<hr>\n<h2>🔗 Spotify Integration</h2>\n");
    match view.spotify {
        SpotifyStatus::Missing => {
            html.push_str(&alert("warning", &config::missing_credentials().to_string()));
        }
        SpotifyStatus::Disconnected | SpotifyStatus::Connected => {
            html.push_str(&alert("success", "✅ Spotify credentials found."));
            if view.spotify == SpotifyStatus::Disconnected {
                html.push_str(
                    "<p><a class='spotify-green' href='/login'>Connect Spotify</a> to create playlists in your account.</p>\n",
                );
            }
            html.push_str(
                "<button type='submit' formaction='/playlist'>🎵 Create Real Spotify Playlist</button>\n",
            );
        }
    }

    html.push_str("</form>\n");
    html
}

fn render_mood_card(entry: &MoodEntry) -> String {
    format!(
        "<div class='mood-card' style=\"background:{color}20;border-left:4px solid {color};padding:1rem;border-radius:10px;\">\n\
         <h3>🎵 {name} Vibes</h3>\n<p>{description}</p>\n<p><strong>Genres:</strong> {genres}</p>\n</div>\n",
        color = entry.color,
        name = entry.name(),
        description = escape_html(entry.description),
        genres = escape_html(&entry.genres.join(", "))
    )
}

/// Demo output for `mood`.
pub fn render_demo(mood: Mood) -> String {
    let tracks = demo_tracks(mood);
    let mut html = alert("success", "✅ Demo playlist created!");

    html.push_str(&format!(
        "<div class='playlist-card'>\n<h3>🎵 Demo Playlist – {mood} Vibes</h3>\n\
         <p><strong>Tracks:</strong> {count}</p>\n\
         <p><em>This is a demo only – connect Spotify to create a real playlist.</em></p>\n</div>\n",
        mood = mood,
        count = tracks.len()
    ));

    html.push_str("<h3>📋 Tracks</h3>\n<ol class='tracks'>\n");
    for track in tracks {
        html.push_str(&format!(
            "<li><a href='{link}'>{title} – <em>{artist}</em></a></li>\n",
            link = escape_html(track.link),
            title = escape_html(track.title),
            artist = escape_html(track.artist)
        ));
    }
    html.push_str("</ol>\n");
    html
}

/// Output of a successfully created playlist.
pub fn render_playlist(generated: &GeneratedPlaylist) -> String {
    let mut html = String::new();
    for warning in &generated.warnings {
        html.push_str(&alert("warning", warning));
    }
    html.push_str(&alert("success", "✅ Playlist created!"));

    let link = generated
        .playlist
        .spotify_url()
        .map(|url| {
            format!(
                "<a class='spotify-green' href='{url}' target='_blank'>🎧 Open in Spotify</a>\n",
                url = escape_html(url)
            )
        })
        .unwrap_or_default();

    html.push_str(&format!(
        "<div class='playlist-card'>\n<h3>🎵 {name}</h3>\n<p><strong>Tracks:</strong> {count}</p>\n{link}</div>\n",
        name = escape_html(&generated.playlist.name),
        count = generated.tracks.len(),
        link = link
    ));

    html.push_str("<h3>📋 Tracks</h3>\n<ol class='tracks'>\n");
    for track in &generated.tracks {
        html.push_str(&format!(
            "<li>{title} – <em>{artists}</em></li>\n",
            title = escape_html(&track.name),
            artists = escape_html(&track.artist_names())
        ));
    }
    html.push_str("</ol>\n");
    html
}

fn render_guide() -> String {
    let mut html = String::from("<h2>🎯 Quick Mood Guide</h2>\n");
    for entry in CATALOG.iter() {
        html.push_str(&format!(
            "<details>\n<summary>🎭 {name}</summary>\n\
             <p><strong>Description:</strong> {description}</p>\n\
             <p><strong>Genres:</strong> {genres}</p>\n</details>\n",
            name = entry.name(),
            description = escape_html(entry.description),
            genres = escape_html(&entry.genres.join(", "))
        ));
    }
    html
}
