//! Source file discovery
//!
//! Walks a root directory for configuration files, skipping dot-prefixed
//! subdirectories, and returns them sorted by full path so that two runs
//! over identical inputs aggregate identically.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{TfDeltaError, TfDeltaResult};

/// Recursively collect `.{extension}` files under `root`, sorted by path.
///
/// Hidden (dot-prefixed) directories are skipped entirely; hidden files
/// with the right extension are still picked up, matching how Terraform
/// itself scans module directories.
pub fn source_files(root: &Path, extension: &str) -> TfDeltaResult<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_hidden_dir = entry.file_type().is_some_and(|t| t.is_dir())
                && entry.file_name().to_string_lossy().starts_with('.');
            !is_hidden_dir
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| TfDeltaError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::other(err),
        })?;
        if entry.file_type().is_some_and(|t| t.is_file())
            && entry.path().extension().is_some_and(|e| e == extension)
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
