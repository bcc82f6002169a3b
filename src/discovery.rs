use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Suffix a file name must end with to be offered in the menu.
pub const MEDIA_EXTENSION: &str = ".mp4";

/// Recursively collect every regular file under `root` whose name ends in `.mp4`.
///
/// The match is a case-sensitive suffix check on the file name. Entries of each
/// directory are visited in file-name order, so the menu is stable between runs.
/// Any unreadable directory aborts the walk.
pub fn find_media_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    tracing::debug!(root = %root.display(), found = files.len(), "media scan finished");
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&path, files)?;
        } else if file_type.is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(MEDIA_EXTENSION)
        {
            files.push(path);
        }
    }
    Ok(())
}
