//! Leaf value forcing and semantic equality
//!
//! Attribute values arrive as unevaluated `hcl::Expression`s. Equality
//! first tries to force both sides to concrete values with an empty
//! evaluation context; expressions that cannot be statically resolved
//! (variable references, function calls, interpolations) carry an explicit
//! dynamic tag and comparisons fall back to raw structural equality of the
//! expressions themselves.

use hcl::eval::{Context, Evaluate};
use hcl::{Expression, Value};

use crate::diff::report::Diagnostic;

/// A forced leaf value, with an explicit tag for statically-unknown types.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafValue {
    /// Evaluated to a concrete value
    Known(Value),
    /// Could not be statically forced
    Dynamic,
}

impl LeafValue {
    pub fn is_known(&self) -> bool {
        matches!(self, LeafValue::Known(_))
    }
}

/// Force an expression to a concrete value.
///
/// Evaluation failures are non-fatal: they yield [`LeafValue::Dynamic`] and
/// a diagnostic on the run, never an error.
pub fn force(
    expr: &Expression,
    path: &str,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> LeafValue {
    match expr.evaluate(&Context::new()) {
        Ok(value) => LeafValue::Known(value),
        Err(err) => {
            diagnostics.push(Diagnostic::ValueEvaluation {
                path: path.to_string(),
                name: name.to_string(),
                message: err.to_string(),
            });
            LeafValue::Dynamic
        }
    }
}

/// Total equality over optional leaf expressions.
///
/// Absent on both sides is equal; absent on exactly one side is not (the
/// caller reports the direction as an addition or removal). Otherwise both
/// sides are forced and compared semantically, degrading to raw structural
/// equality when either side is dynamic.
pub fn exprs_equal(
    a: Option<&Expression>,
    b: Option<&Expression>,
    path: &str,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(a), Some(b)) => {
            let av = force(a, path, name, diagnostics);
            let bv = force(b, path, name, diagnostics);
            match (av, bv) {
                (LeafValue::Known(av), LeafValue::Known(bv)) => av == bv,
                // Semantic comparison of a dynamic value is undecidable;
                // structure-for-structure is the best remaining signal.
                _ => a == b,
            }
        }
    }
}
