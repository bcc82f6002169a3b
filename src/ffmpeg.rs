use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FFmpegError {
    #[error("`{0}` not found. Place the ffmpeg binary next to this program or pass --ffmpeg.")]
    CommandNotFound(String),
    #[error("Failed to launch `{0}`: {1}")]
    LaunchFailed(String, io::Error),
    #[error("Failed to run `{0}`: {1}")]
    CommandFailed(String, String),
}

/// Default location of the transcoder: alongside the program, in the working directory.
pub fn default_ffmpeg_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("./ffmpeg.exe")
    } else {
        PathBuf::from("./ffmpeg")
    }
}

/// Renders a command line the way it is echoed to the terminal.
pub fn command_line(program: &Path, args: &[&str]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Runs the transcoder once and blocks until it exits.
///
/// The command is echoed before it starts. The child's stdout and stderr are
/// inherited so its progress shows up live; stdin is closed.
pub fn run_ffmpeg(program: &Path, args: &[&str]) -> Result<(), FFmpegError> {
    let line = command_line(program, args);
    println!("▶️ Running: {}", line);
    tracing::debug!(program = %program.display(), ?args, "spawning transcoder");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FFmpegError::CommandNotFound(program.display().to_string())
            } else {
                FFmpegError::LaunchFailed(program.display().to_string(), e)
            }
        })?;

    if !status.success() {
        tracing::warn!(%status, "transcoder exited unsuccessfully");
        return Err(FFmpegError::CommandFailed(line, status.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoed_line_joins_program_and_args() {
        let line = command_line(Path::new("./ffmpeg"), &["-i", "a.mp4", "-map", "0:1"]);
        assert_eq!(line, "./ffmpeg -i a.mp4 -map 0:1");
    }

    #[test]
    fn missing_binary_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("no-such-ffmpeg");
        let err = run_ffmpeg(&program, &["-version"]).unwrap_err();
        assert!(matches!(err, FFmpegError::CommandNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure() {
        let err = run_ffmpeg(Path::new("false"), &[]).unwrap_err();
        match err {
            FFmpegError::CommandFailed(line, _) => assert_eq!(line, "false"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
