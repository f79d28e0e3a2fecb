//! Success outcomes of player operations

use crate::model::Video;

/// A video started playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    /// Video that was loaded before and had to be stopped
    pub stopped: Option<Video>,

    /// Video now playing
    pub playing: Video,
}

/// Result of a pause request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pause {
    Paused(Video),
    AlreadyPaused(Video),
}

/// Snapshot of the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// A video was flagged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flagged {
    pub video: Video,
    pub reason: String,

    /// Set when the flagged video was loaded and got stopped
    pub stopped: Option<Video>,
}

/// Which predicate a search applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Case-insensitive substring of the title
    Title,

    /// Case-insensitive exact tag
    Tag,
}

/// Playable videos matching a search, sorted by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub term: String,
    pub videos: Vec<Video>,
}

impl SearchResults {
    /// Result by 1-based position, as numbered for display
    pub fn get(&self, number: usize) -> Option<&Video> {
        number.checked_sub(1).and_then(|index| self.videos.get(index))
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
