//! Top-level comparison driver
//!
//! Two inputs (files or directories) are independently discovered, parsed
//! and aggregated, then handed to the differ. Structural failures (IO,
//! parse errors, mismatched input kinds) abort the run; value-level
//! anomalies surface as diagnostics on the returned report.

use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::{aggregate, SourceUnit};
use crate::config::Config;
use crate::diff::report::ChangeReport;
use crate::diff::{DiffOptions, TreeDiffer};
use crate::discover::source_files;
use crate::error::{TfDeltaError, TfDeltaResult};

/// Compare two configuration snapshots.
///
/// Each input may be a single file or a directory, but the kinds must
/// match. The run is single-threaded and owns its report exclusively;
/// concurrent comparisons just need separate calls.
pub fn compare_paths(
    original: &Path,
    modified: &Path,
    config: &Config,
) -> TfDeltaResult<ChangeReport> {
    let original_is_dir = is_dir(original)?;
    let modified_is_dir = is_dir(modified)?;
    if original_is_dir != modified_is_dir {
        return Err(TfDeltaError::InputKindMismatch {
            original: original.to_path_buf(),
            modified: modified.to_path_buf(),
        });
    }

    let original_units = load_units(original, original_is_dir, config)?;
    let modified_units = load_units(modified, modified_is_dir, config)?;

    let (original_tree, mut diagnostics) = aggregate(&original_units);
    let (modified_tree, modified_diagnostics) = aggregate(&modified_units);
    diagnostics.extend(modified_diagnostics);

    let differ = TreeDiffer::new(DiffOptions {
        matching: config.matching,
        descend_past_attribute_changes: config.descend_past_attribute_changes,
    });
    let mut report = ChangeReport::new();
    report.diagnostics = diagnostics;
    differ.diff_into(&original_tree, &modified_tree, &mut report);
    Ok(report)
}

fn is_dir(path: &Path) -> TfDeltaResult<bool> {
    fs::metadata(path)
        .map(|m| m.is_dir())
        .map_err(|source| TfDeltaError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn load_units(input: &Path, is_dir: bool, config: &Config) -> TfDeltaResult<Vec<SourceUnit>> {
    let files: Vec<PathBuf> = if is_dir {
        source_files(input, &config.extension)?
    } else {
        vec![input.to_path_buf()]
    };

    let mut units = Vec::with_capacity(files.len());
    for path in files {
        let text = fs::read_to_string(&path).map_err(|source| TfDeltaError::Io {
            path: path.clone(),
            source,
        })?;
        let body = hcl::parse(&text).map_err(|err| TfDeltaError::Parse {
            file: path.clone(),
            message: err.to_string(),
        })?;
        units.push(SourceUnit { path, body });
    }
    Ok(units)
}
