#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use trackzip::cli::Settings;
use trackzip::{AppError, RunOutcome};

/// Writes a stand-in for ffmpeg that logs its arguments to `calls.log` next to
/// itself and writes the same argument line into its output file (the last
/// argument). `extra` is inserted before the output is written.
pub fn fake_ffmpeg(dir: &Path, extra: &str) -> PathBuf {
    let script = dir.join("ffmpeg");
    let body = format!(
        "#!/bin/sh\necho \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n{extra}\nfor last; do :; done\nprintf '%s' \"$*\" > \"$last\"\n"
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

pub fn calls(tools: &Path) -> Vec<String> {
    fs::read_to_string(tools.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn run_session(root: &Path, ffmpeg: &Path, answers: &str) -> Result<RunOutcome, AppError> {
    let settings = Settings {
        root: root.to_path_buf(),
        ffmpeg: ffmpeg.to_path_buf(),
    };
    let mut input = Cursor::new(answers.as_bytes().to_vec());
    let mut out = Vec::new();
    trackzip::run(&settings, &mut input, &mut out)
}

/// Entry names of a zip archive in stored order.
pub fn archive_entries(archive: &Path) -> Vec<String> {
    let mut zip = zip::ZipArchive::new(fs::File::open(archive).unwrap()).unwrap();
    (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Contents of one archive entry as text.
pub fn archive_entry_text(archive: &Path, name: &str) -> String {
    use std::io::Read;

    let mut zip = zip::ZipArchive::new(fs::File::open(archive).unwrap()).unwrap();
    let mut text = String::new();
    zip.by_name(name).unwrap().read_to_string(&mut text).unwrap();
    text
}
