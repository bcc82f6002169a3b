use comfy_table::{Table, presets::UTF8_FULL};
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use crate::archive::{archive_path_for, archive_size, write_archive};
use crate::cli::Settings;
use crate::discovery::find_media_files;
use crate::error::AppError;
use crate::extraction::{ExtractionJob, output_dir_for, plan_jobs, run_jobs};
use crate::track_spec::parse_track_specs;
use crate::util::base_name;

/// How a session ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The scan found no media files; nothing was asked or written.
    NoCandidates,
    /// Every track was extracted and packed into `archive`.
    Completed { archive: PathBuf, tracks: usize },
}

/// Run one interactive session: menu, track list, extraction, archive.
///
/// Prompts and reports go to `out`; answers are read line by line from `input`.
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> Result<RunOutcome, AppError> {
    let files = find_media_files(&settings.root)?;
    if files.is_empty() {
        writeln!(
            out,
            "ℹ️ No .mp4 files found in {}.",
            settings.root.display()
        )?;
        return Ok(RunOutcome::NoCandidates);
    }

    writeln!(out, "Select a video file:")?;
    for (i, file) in files.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, display_path(&settings.root, file))?;
    }
    let answer = prompt(input, out, "Enter the video file number: ")?;
    let source = select_candidate(&files, &answer)?;
    tracing::debug!(source = %source.display(), "video selected");

    let line = prompt(input, out, "Enter the track list (JSON): ")?;
    let specs = parse_track_specs(&line)?;

    let output_dir = output_dir_for(&settings.root, source);
    let jobs = plan_jobs(source, &output_dir, &specs);
    writeln!(out, "\n▶️ Extraction Plan:")?;
    writeln!(out, "{}", plan_table(&jobs))?;
    out.flush()?;

    let outputs = run_jobs(&settings.ffmpeg, &output_dir, &jobs)?;

    let archive = archive_path_for(&output_dir, source);
    writeln!(out, "\n▶️ Packing {} audio files...", outputs.len())?;
    write_archive(&archive, &outputs)?;
    writeln!(
        out,
        "✅ All audio files of '{}' packed into {} ({} bytes)",
        base_name(source),
        archive.display(),
        archive_size(&archive)?
    )?;

    Ok(RunOutcome::Completed {
        archive,
        tracks: outputs.len(),
    })
}

/// Resolve a 1-based menu answer to one of `files`.
pub fn select_candidate<'a>(files: &'a [PathBuf], answer: &str) -> Result<&'a PathBuf, AppError> {
    let answer = answer.trim();
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| files.get(i))
        .ok_or_else(|| AppError::Selection {
            input: answer.to_string(),
            count: files.len(),
        })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn display_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).display().to_string()
}

fn plan_table(jobs: &[ExtractionJob]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Stream", "Track", "Output"]);
    for (i, job) in jobs.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            format!("0:{}", job.stream_index),
            base_name(&job.output),
            job.output.display().to_string(),
        ]);
    }
    table
}
