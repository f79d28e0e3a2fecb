//! Data model for the video catalog
//!
//! Videos are immutable once loaded; the catalog tracks which of them are
//! flagged, and playlists reference videos by ID.

mod catalog;
mod playlist;
mod video;

pub use catalog::{Catalog, FlagState, DEFAULT_FLAG_REASON};
pub use playlist::Playlist;
pub use video::Video;
