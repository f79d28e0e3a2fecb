//! Player session
//!
//! Owns the playback cursor and the playlist table, and implements every
//! player command as a transition over that state plus catalog lookups.

pub mod config;
mod cursor;
mod error;
mod outcome;
mod session;

pub use config::PlayerConfig;
pub use cursor::Cursor;
pub use error::{PlayerError, PlayerResult};
pub use outcome::{Flagged, NowPlaying, Pause, Playback, SearchKind, SearchResults};
pub use session::Session;
