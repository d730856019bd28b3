use crate::restamp_core::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list every regular file under `root`.
///
/// Enumeration is all-or-nothing: an unreadable directory anywhere in the
/// tree fails the whole listing instead of returning a partial set.
/// Symbolic links are not followed.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
