use super::Video;
use std::collections::HashMap;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Flag status of a single video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagState {
    pub reason: String,
}

/// Fixed collection of videos plus their mutable flag status
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All videos indexed by their ID
    videos: HashMap<String, Video>,

    /// Flagged videos by ID; absence means not flagged
    flags: HashMap<String, FlagState>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
            flags: HashMap::new(),
        }
    }

    /// Build a catalog from loaded videos
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut catalog = Self::new();
        for video in videos {
            catalog.add_video(video);
        }
        catalog
    }

    /// Add a video to the catalog, replacing any with the same ID
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    /// Get a video by ID (exact match)
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// All videos, in no particular order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Videos that are not flagged, in no particular order
    pub fn playable(&self) -> impl Iterator<Item = &Video> {
        self.videos
            .values()
            .filter(move |video| !self.flags.contains_key(&video.id))
    }

    pub fn is_flagged(&self, id: &str) -> bool {
        self.flags.contains_key(id)
    }

    /// Reason a video was flagged, if it is
    pub fn flag_reason(&self, id: &str) -> Option<&str> {
        self.flags.get(id).map(|state| state.reason.as_str())
    }

    /// Mark a video as flagged.
    ///
    /// Unconditional: the caller checks that the video exists and is not
    /// already flagged.
    pub fn flag(&mut self, id: &str, reason: &str) {
        self.flags.insert(
            id.to_string(),
            FlagState {
                reason: reason.to_string(),
            },
        );
    }

    /// Clear the flag on a video
    pub fn allow(&mut self, id: &str) {
        self.flags.remove(id);
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
