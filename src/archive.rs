use std::{
    collections::HashSet,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::error::AppError;
use crate::util::base_name;

/// `<output_dir>/<source base name>_output.zip`
pub fn archive_path_for(output_dir: &Path, source: &Path) -> PathBuf {
    output_dir.join(format!("{}_output.zip", base_name(source)))
}

/// Write `files` into a new deflate-compressed zip at `archive_path`.
///
/// Entries are stored under their file names only, in input order. A name that
/// was already added is skipped: both entries would point at the same file on
/// disk.
pub fn write_archive(archive_path: &Path, files: &[PathBuf]) -> Result<(), AppError> {
    let mut zip = ZipWriter::new(BufWriter::new(File::create(archive_path)?));
    let mut seen = HashSet::new();

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("no file name in {}", path.display()),
                )
            })?;
        if !seen.insert(name.clone()) {
            tracing::warn!(entry = %name, "duplicate archive entry skipped");
            continue;
        }

        let mut source = File::open(path)?;
        let options = entry_options(&source)?;
        zip.start_file(name.as_str(), options)?;
        io::copy(&mut source, &mut zip)?;
        tracing::debug!(entry = %name, "added to archive");
    }

    zip.finish()?.flush()?;
    Ok(())
}

fn entry_options(file: &File) -> io::Result<SimpleFileOptions> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(file.metadata()?.permissions().mode())
    };
    #[cfg(not(unix))]
    let _ = file;
    Ok(options)
}

/// Size in bytes of the archive on disk.
pub fn archive_size(archive_path: &Path) -> io::Result<u64> {
    Ok(fs::metadata(archive_path)?.len())
}
