//! Change report and non-fatal diagnostics
//!
//! The externally consumed result of a comparison run: a de-duplicated set
//! of slash-joined paths at which the two trees disagree, attribute-level
//! context for rendering, and the diagnostics collected along the way.
//! Paths are write-once, read-many; nothing is ever removed.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use crate::diff::attributes::AttributeDiff;

/// Non-fatal finding collected during aggregation or comparison.
///
/// These are surfaced as values on the report instead of a process-wide
/// debug log, so callers decide how (and whether) to show them.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Attribute name seen more than once at one level; first occurrence wins
    DuplicateAttribute { name: String, file: PathBuf },
    /// A leaf expression could not be forced to a concrete value
    ValueEvaluation {
        path: String,
        name: String,
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateAttribute { name, file } => write!(
                f,
                "duplicate attribute '{}' in {} (first occurrence wins)",
                name,
                file.display()
            ),
            Diagnostic::ValueEvaluation {
                path,
                name,
                message,
            } => {
                let at = if path.is_empty() { "(root)" } else { path };
                write!(f, "cannot evaluate '{}' at {}: {}", name, at, message)
            }
        }
    }
}

/// Accumulated set of paths at which original and modified trees disagree.
#[derive(Debug, Clone, Default)]
pub struct ChangeReport {
    paths: BTreeSet<String>,
    attribute_diffs: BTreeMap<String, AttributeDiff>,
    /// Non-fatal findings from aggregation and value forcing
    pub diagnostics: Vec<Diagnostic>,
}

impl ChangeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a changed path. Idempotent: re-adding an already-present path
    /// has no further observable effect.
    pub fn add(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Record a changed path together with its attribute-level context.
    ///
    /// A path can be visited more than once (repeated block identities
    /// render the same segment); contexts accumulate instead of replacing.
    pub fn record_attributes(&mut self, path: impl Into<String>, diff: AttributeDiff) {
        let path = path.into();
        self.paths.insert(path.clone());
        self.attribute_diffs
            .entry(path)
            .or_default()
            .changes
            .extend(diff.changes);
    }

    pub fn has_changes(&self) -> bool {
        !self.paths.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of distinct changed paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Changed paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Attribute context recorded for a changed path, if any
    pub fn attribute_diff(&self, path: &str) -> Option<&AttributeDiff> {
        self.attribute_diffs.get(path)
    }
}
