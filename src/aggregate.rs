//! Multi-file aggregation
//!
//! Terraform treats every `.tf` file in a directory as part of one module,
//! so comparison happens between aggregates, not file pairs. Aggregation
//! merges an ordered list of parsed source units into a single logical
//! tree: attribute collisions across files resolve first-wins with a
//! diagnostic, blocks concatenate in file order and are matched later by
//! the differ regardless of which file they came from.

use std::path::PathBuf;

use hcl::Body;

use crate::diff::report::Diagnostic;
use crate::model::ConfigTree;

/// One parsed source file, in discovery order.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub body: Body,
}

/// Merge source units into one configuration tree.
///
/// Deterministic for a deterministic input order; callers supply units
/// sorted by path (see [`crate::discover`]), so two runs over identical
/// inputs yield identical aggregates.
pub fn aggregate(units: &[SourceUnit]) -> (ConfigTree, Vec<Diagnostic>) {
    let mut tree = ConfigTree::new();
    let mut diagnostics = Vec::new();
    for unit in units {
        tree.absorb(&unit.body, &unit.path, &mut diagnostics);
    }
    (tree, diagnostics)
}
