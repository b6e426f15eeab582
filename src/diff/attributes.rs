//! Attribute-set diff
//!
//! Compares two name-keyed attribute sets with the total equality from
//! [`crate::value`]. Names present on only one side are always reported;
//! output carries both sides of each change for contextual rendering.

use std::collections::BTreeSet;

use hcl::Expression;

use crate::diff::report::Diagnostic;
use crate::model::AttributeSet;
use crate::value::exprs_equal;

/// How a single attribute changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChangeKind {
    /// Present only in the modified tree
    Added,
    /// Present only in the original tree
    Removed,
    /// Present on both sides with unequal values
    Modified,
}

/// One changed attribute with both sides kept for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeChange {
    pub name: String,
    pub kind: AttributeChangeKind,
    pub original: Option<Expression>,
    pub modified: Option<Expression>,
}

/// All attribute changes found at one tree level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeDiff {
    /// Changes in attribute-name order
    pub changes: Vec<AttributeChange>,
}

impl AttributeDiff {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Diff two attribute sets at `path`.
///
/// Takes the union of both key sets and runs each name through
/// [`exprs_equal`] with the missing side treated as absent.
pub fn diff_attributes(
    original: &AttributeSet,
    modified: &AttributeSet,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> AttributeDiff {
    let mut diff = AttributeDiff::default();

    let names: BTreeSet<&str> = original
        .keys()
        .chain(modified.keys())
        .map(String::as_str)
        .collect();

    for name in names {
        let o = original.get(name);
        let m = modified.get(name);
        if exprs_equal(o, m, path, name, diagnostics) {
            continue;
        }
        let kind = match (o, m) {
            (None, Some(_)) => AttributeChangeKind::Added,
            (Some(_), None) => AttributeChangeKind::Removed,
            _ => AttributeChangeKind::Modified,
        };
        diff.changes.push(AttributeChange {
            name: name.to_string(),
            kind,
            original: o.cloned(),
            modified: m.cloned(),
        });
    }

    diff
}
