use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::player::config::DEFAULT_VIDEOS_PATH;
use video_player::{Console, PlayerConfig, Session};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Play, organise and moderate a catalog of videos", long_about = None)]
struct Args {
    /// Path to the video list (one `Title | id | #tags` entry per line)
    #[arg(short = 'd', long, default_value = DEFAULT_VIDEOS_PATH)]
    videos: String,

    /// Seed for PLAY_RANDOM (reproducible selection)
    #[arg(long)]
    seed: Option<u64>,

    /// Reason recorded by FLAG_VIDEO when none is given
    #[arg(long, default_value = video_player::model::DEFAULT_FLAG_REASON)]
    flag_reason: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let videos_path = shellexpand::tilde(&args.videos);

    let mut config = PlayerConfig::new(PathBuf::from(videos_path.as_ref()))
        .with_default_flag_reason(args.flag_reason);
    if let Some(seed) = args.seed {
        log::info!("Random play seeded with {}", seed);
        config = config.with_seed(seed);
    }

    let catalog = video_player::source::load_catalog(&config.videos_path)?;
    let session = Session::with_config(catalog, &config);

    let stdin = io::stdin();
    let mut console = Console::new(session, stdin.lock(), io::stdout().lock());
    console.run()?;

    log::info!("Session finished");
    Ok(())
}
