//! Catalog data source
//!
//! Reads the plain-text video list and builds the catalog the player
//! session runs against.

mod videos;

pub use videos::{parse_videos, parse_videos_from};

use crate::model::Catalog;
use anyhow::Result;
use std::path::Path;

/// Load a complete catalog from a video list file
///
/// # Arguments
/// * `path` - Path to the video list (typically `videos.txt`)
///
/// # Returns
/// A catalog with every video unflagged
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    log::info!("Loading video list from {:?}", path);
    let videos = parse_videos(path)?;

    let catalog = Catalog::from_videos(videos);

    log::info!("Loaded catalog: {} videos", catalog.video_count());

    Ok(catalog)
}
