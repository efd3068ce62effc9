use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::discovery::glob::TestFileMatcher;
use crate::error::IoError;

/// Walks every regular file below `root` and keeps those the matcher selects.
///
/// Returned paths are relative to `root` and sorted. Symbolic links are
/// neither followed nor reported, even when they point at a regular file.
pub fn walk_test_files(root: &Path, matcher: &TestFileMatcher) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| IoError::directory_scan(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if matcher.is_selected(relative) {
            trace!(file = %relative.display(), "selected test file");
            files.push(relative.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
