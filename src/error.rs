use thiserror::Error;

use crate::ffmpeg::FFmpegError;

/// Every way a run can end early. None of them are retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse track list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid selection '{input}': expected a number between 1 and {count}")]
    Selection { input: String, count: usize },

    #[error(transparent)]
    ExternalProcess(#[from] FFmpegError),

    #[error("Could not write archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(String),
}
