pub mod app;
pub mod archive;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod ffmpeg;
pub mod track_spec;
pub mod util;

pub use app::{RunOutcome, run};
pub use error::AppError;
