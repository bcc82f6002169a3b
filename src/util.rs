use std::path::Path;

use crate::error::AppError;

/// Helper to convert a Path to &str, returning an error if not valid UTF-8.
pub fn path_to_str(path: &Path) -> Result<&str, AppError> {
    path.to_str()
        .ok_or_else(|| AppError::NonUtf8Path(path.display().to_string()))
}

/// File name without its final extension, e.g. `clips/show.mp4` -> `show`.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directory_and_extension() {
        assert_eq!(base_name(Path::new("./clips/show.mp4")), "show");
        assert_eq!(base_name(Path::new("a.b.mp4")), "a.b");
    }
}
