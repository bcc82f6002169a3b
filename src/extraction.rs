use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use crate::error::AppError;
use crate::ffmpeg::run_ffmpeg;
use crate::track_spec::TrackSpec;
use crate::util::{base_name, path_to_str};

pub const AUDIO_EXTENSION: &str = "mp3";
pub const AUDIO_BITRATE: &str = "129k";
/// Base name of the implicit first track.
pub const DEFAULT_TRACK_NAME: &str = "bz";
/// Stream holding the default audio track; stream 0 is the video.
pub const DEFAULT_STREAM_INDEX: i64 = 1;

/// One transcoder invocation: a single stream of `source` written to `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionJob {
    pub source: PathBuf,
    pub stream_index: i64,
    pub output: PathBuf,
}

impl ExtractionJob {
    /// Fixed argument template: map one stream, re-encode it as mp3, drop video.
    ///
    /// `-y` lets a later job with the same label overwrite the earlier file.
    pub fn ffmpeg_args(&self) -> Result<Vec<String>, AppError> {
        Ok(vec![
            "-y".to_string(),
            "-i".to_string(),
            path_to_str(&self.source)?.to_string(),
            "-map".to_string(),
            format!("0:{}", self.stream_index),
            "-b:a".to_string(),
            AUDIO_BITRATE.to_string(),
            "-f".to_string(),
            AUDIO_EXTENSION.to_string(),
            "-vn".to_string(),
            path_to_str(&self.output)?.to_string(),
        ])
    }
}

/// Directory that receives every output of `source`: `<root>/<source base name>`.
pub fn output_dir_for(root: &Path, source: &Path) -> PathBuf {
    root.join(base_name(source))
}

/// Build the N+1 jobs for a run: the default track first, then one per spec
/// in the order given (callers pass the specs already sorted).
pub fn plan_jobs(source: &Path, output_dir: &Path, specs: &[TrackSpec]) -> Vec<ExtractionJob> {
    let default_job = ExtractionJob {
        source: source.to_path_buf(),
        stream_index: DEFAULT_STREAM_INDEX,
        output: output_dir.join(format!("{}.{}", DEFAULT_TRACK_NAME, AUDIO_EXTENSION)),
    };

    std::iter::once(default_job)
        .chain(specs.iter().map(|spec| ExtractionJob {
            source: source.to_path_buf(),
            stream_index: spec.stream_index(),
            output: output_dir.join(format!(
                "{}.{}",
                label_path(&spec.label).display(),
                AUDIO_EXTENSION
            )),
        }))
        .collect()
}

/// Keeps only the normal components of a label, so `/tmp/x` and `../x` stay
/// inside the output directory as `tmp/x` and `x`.
fn label_path(label: &str) -> PathBuf {
    Path::new(label)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Run every job in order, stopping at the first failure.
///
/// `output_dir` is created before the first job. Returns the produced files in
/// job order.
pub fn run_jobs(
    ffmpeg: &Path,
    output_dir: &Path,
    jobs: &[ExtractionJob],
) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(output_dir)?;

    let mut outputs = Vec::with_capacity(jobs.len());
    for (i, job) in jobs.iter().enumerate() {
        tracing::info!(
            job = i + 1,
            total = jobs.len(),
            stream = job.stream_index,
            output = %job.output.display(),
            "extracting track"
        );
        let args = job.ffmpeg_args()?;
        let args: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
        run_ffmpeg(ffmpeg, &args)?;
        outputs.push(job.output.clone());
    }
    Ok(outputs)
}
