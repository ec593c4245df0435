//! Filesystem helpers: finding source pages and preparing the output directory.

use crate::site::BuildError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
pub const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect every file with `extension` under `dir`, recursively, in path order.
///
/// Fails if `dir` is missing, not a directory, or cannot be walked.
pub fn collect_source_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BuildError> {
    let meta = fs::metadata(dir).map_err(|err| BuildError::input(dir, err))?;
    if !meta.is_dir() {
        return Err(BuildError::input(
            dir,
            io::Error::other("not a directory"),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            BuildError::input(path, err.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Make sure the output directory exists.
///
/// When `clean` is true, removes all existing content first.
pub fn prepare_output_dir(output: &Path, clean: bool) -> Result<(), BuildError> {
    if clean && output.exists() {
        fs::remove_dir_all(output).map_err(|err| BuildError::output(output, err))?;
    }
    fs::create_dir_all(output).map_err(|err| BuildError::output(output, err))
}
