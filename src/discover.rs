//! Discovery of `.sql` files under a root directory.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{AppResult, walk_error};

/// File name suffix of validation candidates (case-sensitive)
pub const SQL_EXTENSION: &str = ".sql";

/// Walk `root` depth-first and yield every `.sql` candidate.
///
/// Entries within a directory are visited in file name order, so the
/// sequence is stable for an unchanged tree. Symlinks are not followed.
/// A directory listing error is yielded as `Err`; callers stop at the
/// first one.
pub fn discover(root: &Path) -> impl Iterator<Item = AppResult<PathBuf>> {
    let root_display = root.display().to_string();
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if is_candidate(&entry) => {
                debug!(path = %entry.path().display(), "discovered");
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(walk_error(&root_display, e)))
        })
}

fn is_candidate(entry: &DirEntry) -> bool {
    !entry.file_type().is_dir() && entry.file_name().to_string_lossy().ends_with(SQL_EXTENSION)
}
