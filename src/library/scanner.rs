//! Finds the audio files in a single directory

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use log::info;
use walkdir::WalkDir;

use crate::{config::LibrarySource, library::error::LibraryError};

/// Case-sensitive match of a file name against the configured suffix
pub fn matches_suffix(file_name: &OsStr, suffix: &str) -> bool {
    file_name.to_string_lossy().ends_with(suffix)
}

/// Lists the files directly inside `dir` whose name ends with the configured suffix.
///
/// Subdirectories are not descended into. Paths come back in the order the
/// filesystem enumerates them.
pub fn scan_dir(dir: &Path, source: &LibrarySource) -> Result<Vec<PathBuf>, LibraryError> {
    if !dir.exists() {
        return Err(LibraryError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(LibraryError::NotADirectory(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(source.follow_symlinks);

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !matches_suffix(entry.file_name(), &source.suffix) {
            continue;
        }

        info!("Found: {}", entry.file_name().to_string_lossy());
        paths.push(entry.into_path());
    }

    Ok(paths)
}
