use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::errors::ScoutError;

/// Recursively collect every file named `file_name` under `root`.
///
/// Paths matching any of the `exclude` globs are skipped. Returned paths are
/// absolute and sorted. Unreadable sub-directories are logged and skipped;
/// only a `root` that is not a directory is an error.
pub fn find_descriptor_files(
    root: &Path,
    file_name: &str,
    exclude: &[String],
) -> Result<Vec<PathBuf>, ScoutError> {
    if !root.is_dir() {
        return Err(ScoutError::Directory {
            path: root.to_path_buf(),
        });
    }
    let root = std::path::absolute(root)?;
    let excluded = build_globset(exclude)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_file() || entry.file_name() != OsStr::new(file_name) {
            continue;
        }
        let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        if excluded.is_match(relative) {
            tracing::debug!("Excluded {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }
    files.sort();
    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ScoutError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ScoutError::Config {
            message: format!("invalid exclude pattern '{pattern}': {e}"),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| ScoutError::Config {
        message: format!("invalid exclude patterns: {e}"),
    })
}
