//! Failure outcomes of player operations

use crate::model::Video;
use thiserror::Error;

/// Every reason a player operation can be rejected.
///
/// A rejected operation never mutates session state, with one exception:
/// `play_random` stops the loaded video before discovering that nothing is
/// playable, and reports that in `NoVideosAvailable::stopped`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("A playlist with the same name already exists")]
    DuplicatePlaylist,

    #[error("Video already added")]
    AlreadyAdded,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("No video is currently playing")]
    NoVideoPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable { stopped: Option<Video> },
}

pub type PlayerResult<T> = Result<T, PlayerError>;
