use serde::{Deserialize, Serialize};

/// A user-created playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, casing as originally supplied
    pub name: String,

    /// Video IDs in insertion order, never duplicated
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Lookup key shared by every casing of a playlist name
    pub fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Append a video; returns false if it was already a member
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove a video; returns false if it was not a member
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(pos) => {
                self.video_ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Remove every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Video IDs in playlist order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}
