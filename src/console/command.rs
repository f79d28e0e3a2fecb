//! Console command parsing

use thiserror::Error;

/// A single console command with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// Why a console line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("wrong number of arguments for {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse one console line. Keywords are case-insensitive; arguments keep
    /// their casing.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(CommandError::Empty)?.to_uppercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => expect_args::<0>("NUMBER_OF_VIDEOS", args)
                .map(|_| Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => {
                expect_args::<0>("SHOW_ALL_VIDEOS", args).map(|_| Command::ShowAllVideos)?
            }
            "PLAY" => {
                let [video_id] = expect_args::<1>("PLAY", args)?;
                Command::Play { video_id }
            }
            "STOP" => expect_args::<0>("STOP", args).map(|_| Command::Stop)?,
            "PLAY_RANDOM" => expect_args::<0>("PLAY_RANDOM", args).map(|_| Command::PlayRandom)?,
            "PAUSE" => expect_args::<0>("PAUSE", args).map(|_| Command::Pause)?,
            "CONTINUE" => expect_args::<0>("CONTINUE", args).map(|_| Command::Continue)?,
            "SHOW_PLAYING" => {
                expect_args::<0>("SHOW_PLAYING", args).map(|_| Command::ShowPlaying)?
            }
            "CREATE_PLAYLIST" => {
                let [name] = expect_args::<1>("CREATE_PLAYLIST", args)?;
                Command::CreatePlaylist { name }
            }
            "ADD_TO_PLAYLIST" => {
                let [playlist, video_id] = expect_args::<2>("ADD_TO_PLAYLIST", args)?;
                Command::AddToPlaylist { playlist, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let [playlist, video_id] = expect_args::<2>("REMOVE_FROM_PLAYLIST", args)?;
                Command::RemoveFromPlaylist { playlist, video_id }
            }
            "CLEAR_PLAYLIST" => {
                let [name] = expect_args::<1>("CLEAR_PLAYLIST", args)?;
                Command::ClearPlaylist { name }
            }
            "DELETE_PLAYLIST" => {
                let [name] = expect_args::<1>("DELETE_PLAYLIST", args)?;
                Command::DeletePlaylist { name }
            }
            "SHOW_ALL_PLAYLISTS" => {
                expect_args::<0>("SHOW_ALL_PLAYLISTS", args).map(|_| Command::ShowAllPlaylists)?
            }
            "SHOW_PLAYLIST" => {
                let [name] = expect_args::<1>("SHOW_PLAYLIST", args)?;
                Command::ShowPlaylist { name }
            }
            "SEARCH_VIDEOS" => {
                let [term] = expect_args::<1>("SEARCH_VIDEOS", args)?;
                Command::SearchVideos { term }
            }
            "SEARCH_VIDEOS_WITH_TAG" => {
                let [tag] = expect_args::<1>("SEARCH_VIDEOS_WITH_TAG", args)?;
                Command::SearchVideosWithTag { tag }
            }
            "FLAG_VIDEO" => {
                let mut args = args.into_iter();
                let video_id = args.next().ok_or(CommandError::Usage("FLAG_VIDEO"))?;
                let reason: Vec<String> = args.collect();
                Command::FlagVideo {
                    video_id,
                    reason: (!reason.is_empty()).then(|| reason.join(" ")),
                }
            }
            "ALLOW_VIDEO" => {
                let [video_id] = expect_args::<1>("ALLOW_VIDEO", args)?;
                Command::AllowVideo { video_id }
            }
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword)),
        };

        Ok(command)
    }
}

/// Require exactly `N` arguments
fn expect_args<const N: usize>(
    keyword: &'static str,
    args: Vec<String>,
) -> Result<[String; N], CommandError> {
    args.try_into().map_err(|_| CommandError::Usage(keyword))
}
