//! Formatting of player outcomes into console lines

use crate::model::{Catalog, Video};
use crate::player::{Flagged, NowPlaying, Pause, Playback, PlayerError, SearchResults};

pub const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

pub const GREETING: &str = "Hello and welcome to YouTube, what would you like to do?";
pub const GREETING_HINT: &str =
    "Enter HELP for list of available commands or EXIT to terminate.";
pub const FAREWELL: &str = "YouTube has now terminated its execution. Thank you and goodbye!";

pub const SEARCH_PROMPT: &str = "Would you like to play any of the above? If yes, specify the number of the video.\nIf your answer is not a valid number, we will assume it's a no.";

pub const HELP: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, id and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> [flag_reason] - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// `Title (id) [tags]`, with the flag marker when flagged
pub fn video_line(catalog: &Catalog, video: &Video) -> String {
    match catalog.flag_reason(&video.id) {
        Some(reason) => format!("{} - FLAGGED (reason: {})", video, reason),
        None => video.to_string(),
    }
}

/// Every rejected operation reads `Cannot <action>: <reason>`
pub fn failure(action: &str, error: &PlayerError) -> Vec<String> {
    match error {
        PlayerError::NoVideosAvailable { stopped } => {
            let mut lines: Vec<String> = stopped.iter().map(stopping).collect();
            lines.push(error.to_string());
            lines
        }
        _ => vec![format!("Cannot {}: {}", action, error)],
    }
}

pub fn number_of_videos(count: usize) -> Vec<String> {
    vec![format!("{} videos in the library", count)]
}

pub fn all_videos(catalog: &Catalog, videos: &[Video]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(|v| format!("  {}", video_line(catalog, v))));
    lines
}

fn stopping(video: &Video) -> String {
    format!("Stopping video: {}", video.title)
}

pub fn playback(playback: &Playback) -> Vec<String> {
    let mut lines: Vec<String> = playback.stopped.iter().map(stopping).collect();
    lines.push(format!("Playing video: {}", playback.playing.title));
    lines
}

pub fn stopped(video: &Video) -> Vec<String> {
    vec![stopping(video)]
}

pub fn pause(pause: &Pause) -> Vec<String> {
    match pause {
        Pause::Paused(video) => vec![format!("Pausing video: {}", video.title)],
        Pause::AlreadyPaused(video) => vec![format!("Video already paused: {}", video.title)],
    }
}

pub fn continued(video: &Video) -> Vec<String> {
    vec![format!("Continuing video: {}", video.title)]
}

pub fn now_playing(now: Option<&NowPlaying>) -> Vec<String> {
    match now {
        Some(NowPlaying {
            video,
            paused: true,
        }) => vec![format!("Currently playing: {} - PAUSED", video)],
        Some(NowPlaying { video, .. }) => vec![format!("Currently playing: {}", video)],
        None => vec!["No video is currently playing".to_string()],
    }
}

pub fn playlist_created(name: &str) -> Vec<String> {
    vec![format!("Successfully created new playlist: {}", name)]
}

pub fn added_to_playlist(name: &str, video: &Video) -> Vec<String> {
    vec![format!("Added video to {}: {}", name, video.title)]
}

pub fn removed_from_playlist(name: &str, video: &Video) -> Vec<String> {
    vec![format!("Removed video from {}: {}", name, video.title)]
}

pub fn playlist_cleared(name: &str) -> Vec<String> {
    vec![format!("Successfully removed all videos from {}", name)]
}

pub fn playlist_deleted(name: &str) -> Vec<String> {
    vec![format!("Deleted playlist: {}", name)]
}

pub fn all_playlists(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }

    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().map(|name| format!("  {}", name)));
    lines
}

pub fn playlist(catalog: &Catalog, name: &str, videos: &[Video]) -> Vec<String> {
    let mut lines = vec![format!("Showing playlist: {}", name)];
    if videos.is_empty() {
        lines.push("  No videos here yet".to_string());
    } else {
        lines.extend(videos.iter().map(|v| format!("  {}", video_line(catalog, v))));
    }
    lines
}

/// Numbered results followed by the selection prompt
pub fn search_results(results: &SearchResults) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No search results for {}", results.term)];
    }

    let mut lines = vec![format!("Here are the results for {}:", results.term)];
    lines.extend(
        results
            .videos
            .iter()
            .enumerate()
            .map(|(index, video)| format!("  {}) {}", index + 1, video)),
    );
    lines.extend(SEARCH_PROMPT.lines().map(str::to_string));
    lines
}

pub fn flagged(flagged: &Flagged) -> Vec<String> {
    let mut lines: Vec<String> = flagged.stopped.iter().map(stopping).collect();
    lines.push(format!(
        "Successfully flagged video: {} (reason: {})",
        flagged.video.title, flagged.reason
    ));
    lines
}

pub fn allowed(video: &Video) -> Vec<String> {
    vec![format!("Successfully removed flag from video: {}", video.title)]
}
