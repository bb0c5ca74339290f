//! Mood Playlist Generator Library
//!
//! Maps a mood to a handful of music genres and either shows a fixed demo
//! playlist or searches Spotify by genre and creates a real playlist in the
//! user's account. The same flow is exposed through a small web UI and a
//! command-line interface.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the web UI, the OAuth callback and the JSON API
//! - `catalog` - Static mood catalog and demo track table
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Domain error taxonomy
//! - `generator` - Track resolution and playlist assembly
//! - `management` - OAuth token lifecycle and caching
//! - `render` - HTML and terminal presentation
//! - `server` - Web server wiring
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moodlist::{catalog, config};
//!
//! #[tokio::main]
//! async fn main() -> moodlist::Res<()> {
//!     config::load_env().await?;
//!     let entry = catalog::lookup("Happy")?;
//!     println!("{}", entry.description);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod management;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by CLI plumbing where any error is simply reported to the user.
/// Domain operations return [`error::MoodError`] instead.
///
/// # Example
///
/// ```
/// use moodlist::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching {} genres...", genres.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist created!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal CLI or startup failures. Request handlers of the web
/// server never use it; a failed action there is rendered, not fatal.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}", addr);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Search failed for {}: {}", genre, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
