//! Video list (videos.txt) parser

use crate::model::Video;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a videos file and extract every well-formed video
pub fn parse_videos(path: &Path) -> Result<Vec<Video>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open video list: {:?}", path))?;

    parse_videos_from(BufReader::new(file))
        .with_context(|| format!("Failed to read video list: {:?}", path))
}

/// Parse videos from any line-oriented reader.
///
/// Each line reads `Title | video_id | #tag1 , #tag2`. Malformed lines and
/// repeated IDs are skipped with a warning; the first occurrence of an ID wins.
pub fn parse_videos_from<R: BufRead>(reader: R) -> Result<Vec<Video>> {
    let mut videos = Vec::new();
    let mut seen = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let Some(video) = parse_line(&line) else {
            log::warn!("Skipping malformed video entry on line {}: {:?}", line_number, line);
            continue;
        };

        if !seen.insert(video.id.clone()) {
            log::warn!(
                "Skipping duplicate video id {:?} on line {}",
                video.id,
                line_number
            );
            continue;
        }

        videos.push(video);
    }

    log::info!("Parsed {} videos from video list", videos.len());
    Ok(videos)
}

/// Convert one line into a Video
fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|t| !t.is_empty())?;
    let id = fields.next().filter(|i| !i.is_empty())?;
    let tags = fields
        .next()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
