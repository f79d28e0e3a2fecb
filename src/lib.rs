//! Video Player - in-memory video catalog command processor
//!
//! This library tracks a fixed catalog of videos, a single playback cursor
//! and user-created playlists, and lets videos be flagged as unavailable.

pub mod console;
pub mod model;
pub mod player;
pub mod source;

pub use console::Console;
pub use player::{PlayerConfig, PlayerError, Session};
