//! Interactive console
//!
//! Reads commands line by line, runs them against a player session and
//! writes the rendered outcome. After a search with results, the next input
//! line is read as the number of the result to play.

mod command;
pub mod render;

pub use command::{Command, CommandError};

use crate::player::{SearchKind, Session};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "YT> ";

/// Whether the console should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Console bound to one session and one input/output pair
pub struct Console<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Greet, then process commands until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        self.write_lines([render::GREETING, render::GREETING_HINT])?;

        loop {
            write!(self.output, "{}", PROMPT).context("Failed to write prompt")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                log::debug!("End of input");
                writeln!(self.output)?;
                break;
            };

            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Parse and execute a single console line
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                self.write_lines([render::INVALID_COMMAND])?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        log::debug!("Executing {:?}", command);

        let lines = match command {
            Command::NumberOfVideos => render::number_of_videos(self.session.number_of_videos()),
            Command::ShowAllVideos => {
                render::all_videos(self.session.catalog(), &self.session.all_videos())
            }
            Command::Play { video_id } => self.play(&video_id),
            Command::Stop => match self.session.stop() {
                Ok(video) => render::stopped(&video),
                Err(e) => render::failure("stop video", &e),
            },
            Command::PlayRandom => match self.session.play_random() {
                Ok(playback) => render::playback(&playback),
                Err(e) => render::failure("play random video", &e),
            },
            Command::Pause => match self.session.pause() {
                Ok(pause) => render::pause(&pause),
                Err(e) => render::failure("pause video", &e),
            },
            Command::Continue => match self.session.continue_video() {
                Ok(video) => render::continued(&video),
                Err(e) => render::failure("continue video", &e),
            },
            Command::ShowPlaying => render::now_playing(self.session.show_playing().as_ref()),
            Command::CreatePlaylist { name } => match self.session.create_playlist(&name) {
                Ok(()) => render::playlist_created(&name),
                Err(e) => render::failure("create playlist", &e),
            },
            Command::AddToPlaylist { playlist, video_id } => {
                match self.session.add_to_playlist(&playlist, &video_id) {
                    Ok(video) => render::added_to_playlist(&playlist, &video),
                    Err(e) => render::failure(&format!("add video to {}", playlist), &e),
                }
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                match self.session.remove_from_playlist(&playlist, &video_id) {
                    Ok(video) => render::removed_from_playlist(&playlist, &video),
                    Err(e) => render::failure(&format!("remove video from {}", playlist), &e),
                }
            }
            Command::ClearPlaylist { name } => match self.session.clear_playlist(&name) {
                Ok(()) => render::playlist_cleared(&name),
                Err(e) => render::failure(&format!("clear playlist {}", name), &e),
            },
            Command::DeletePlaylist { name } => match self.session.delete_playlist(&name) {
                Ok(_) => render::playlist_deleted(&name),
                Err(e) => render::failure(&format!("delete playlist {}", name), &e),
            },
            Command::ShowAllPlaylists => render::all_playlists(&self.session.playlist_names()),
            Command::ShowPlaylist { name } => match self.session.show_playlist(&name) {
                Ok(videos) => render::playlist(self.session.catalog(), &name, &videos),
                Err(e) => render::failure(&format!("show playlist {}", name), &e),
            },
            Command::SearchVideos { term } => return self.search(SearchKind::Title, &term),
            Command::SearchVideosWithTag { tag } => return self.search(SearchKind::Tag, &tag),
            Command::FlagVideo { video_id, reason } => {
                match self.session.flag(&video_id, reason.as_deref()) {
                    Ok(flagged) => render::flagged(&flagged),
                    Err(e) => render::failure("flag video", &e),
                }
            }
            Command::AllowVideo { video_id } => match self.session.allow(&video_id) {
                Ok(video) => render::allowed(&video),
                Err(e) => render::failure("remove flag from video", &e),
            },
            Command::Help => render::HELP.lines().map(str::to_string).collect(),
            Command::Exit => {
                self.write_lines([render::FAREWELL])?;
                return Ok(Flow::Exit);
            }
        };

        self.write_lines(lines)?;
        Ok(Flow::Continue)
    }

    fn play(&mut self, video_id: &str) -> Vec<String> {
        match self.session.play(video_id) {
            Ok(playback) => render::playback(&playback),
            Err(e) => render::failure("play video", &e),
        }
    }

    /// Show results, then read the follow-up selection.
    ///
    /// Anything other than a number within range means "no".
    fn search(&mut self, kind: SearchKind, term: &str) -> Result<Flow> {
        let results = self.session.search(kind, term);
        self.write_lines(render::search_results(&results))?;

        if results.is_empty() {
            return Ok(Flow::Continue);
        }

        self.output.flush()?;
        let selection = self.read_line()?;
        let chosen = selection
            .as_deref()
            .and_then(|answer| answer.trim().parse::<usize>().ok())
            .and_then(|number| results.get(number));

        match chosen {
            Some(video) => {
                let lines = self.play(&video.id);
                self.write_lines(lines)?;
            }
            None => log::debug!("No search result selected from {:?}", selection),
        }

        Ok(Flow::Continue)
    }

    /// Next input line without its terminator, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read console input")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            writeln!(self.output, "{}", line.as_ref()).context("Failed to write output")?;
        }
        Ok(())
    }
}
