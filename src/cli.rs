use clap::Parser;
use std::path::PathBuf;

use crate::ffmpeg::default_ffmpeg_path;

/// Pick an MP4 file, extract its audio tracks with ffmpeg and zip them.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Directory to scan for .mp4 files. Output folders are created here too.
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Path to the ffmpeg binary (defaults to the one next to this program).
    #[arg(short = 'f', long)]
    pub ffmpeg: Option<PathBuf>,

    /// Show debug logs.
    #[arg(short = 'g', long)]
    pub debug: bool,
}

/// Everything a session needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub ffmpeg: PathBuf,
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        Settings {
            root: args.dir.clone(),
            ffmpeg: args.ffmpeg.clone().unwrap_or_else(default_ffmpeg_path),
        }
    }
}
