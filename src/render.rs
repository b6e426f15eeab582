//! Human-readable report rendering
//!
//! Consumes a finished [`ChangeReport`] and produces plain text; it
//! contributes nothing to the diff decision itself. Changed paths get a
//! `~` header with indented attribute context below, modifications shown
//! as a line diff of the HCL-formatted values.

use std::fmt::Write as _;

use similar::{ChangeTag, TextDiff};

use hcl::Expression;

use crate::diff::attributes::{AttributeChange, AttributeChangeKind};
use crate::diff::report::ChangeReport;

const INDENT: &str = "    ";

/// Render the report. With `verbose`, collected diagnostics are appended.
pub fn render_report(report: &ChangeReport, verbose: bool) -> String {
    let mut out = String::new();

    for path in report.paths() {
        let shown = if path.is_empty() { "(root)" } else { path };
        let _ = writeln!(out, "~ {shown}");
        if let Some(diff) = report.attribute_diff(path) {
            for change in &diff.changes {
                render_attribute(&mut out, change);
            }
        }
    }

    if verbose && !report.diagnostics.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "diagnostics:");
        for diagnostic in &report.diagnostics {
            let _ = writeln!(out, "{INDENT}{diagnostic}");
        }
    }

    out
}

fn render_attribute(out: &mut String, change: &AttributeChange) {
    match change.kind {
        AttributeChangeKind::Added => {
            let _ = writeln!(
                out,
                "{INDENT}+ {} = {}",
                change.name,
                expression_text(change.modified.as_ref())
            );
        }
        AttributeChangeKind::Removed => {
            let _ = writeln!(
                out,
                "{INDENT}- {} = {}",
                change.name,
                expression_text(change.original.as_ref())
            );
        }
        AttributeChangeKind::Modified => {
            let old = format!("{} = {}", change.name, expression_text(change.original.as_ref()));
            let new = format!("{} = {}", change.name, expression_text(change.modified.as_ref()));
            let diff = TextDiff::from_lines(&old, &new);
            for line in diff.iter_all_changes() {
                let sign = match line.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let _ = writeln!(out, "{INDENT}{sign} {}", line.value().trim_end_matches('\n'));
            }
        }
    }
}

fn expression_text(expr: Option<&Expression>) -> String {
    let Some(expr) = expr else {
        return String::new();
    };
    hcl::format::to_string(expr)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{expr:?}"))
}
