//! Player configuration

use crate::model::DEFAULT_FLAG_REASON;
use std::path::PathBuf;

/// Default location of the video list
pub const DEFAULT_VIDEOS_PATH: &str = "videos.txt";

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Video list the catalog is loaded from
    pub videos_path: PathBuf,

    /// Reason recorded when a video is flagged without one
    pub default_flag_reason: String,

    /// Seed for random play (None = OS entropy)
    pub seed: Option<u64>,
}

impl PlayerConfig {
    /// Create a new player configuration
    pub fn new(videos_path: PathBuf) -> Self {
        Self {
            videos_path,
            default_flag_reason: DEFAULT_FLAG_REASON.to_string(),
            seed: None,
        }
    }

    /// Make random play reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reason used when none is given to a flag request
    pub fn with_default_flag_reason(mut self, reason: impl Into<String>) -> Self {
        self.default_flag_reason = reason.into();
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_VIDEOS_PATH))
    }
}
