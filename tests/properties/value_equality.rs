//! Expression equality survives formatting noise and unevaluable inputs.

use proptest::prelude::*;

use tfdelta::exprs_equal;

fn expr_of(source: &str) -> hcl::Expression {
    hcl::parse(source)
        .unwrap()
        .attributes()
        .next()
        .unwrap()
        .expr
        .clone()
}

fn arb_ident() -> impl Strategy<Value = String> {
    "a[a-z0-9_]{0,7}"
}

proptest! {
    #[test]
    fn identical_variable_references_compare_equal(name in arb_ident()) {
        // Neither side evaluates; comparison falls back to raw structure.
        let a = expr_of(&format!("x = var.{name}\n"));
        let b = expr_of(&format!("x = var.{name}\n"));

        let mut diagnostics = Vec::new();
        prop_assert!(exprs_equal(Some(&a), Some(&b), "", "x", &mut diagnostics));
        prop_assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn distinct_variable_references_compare_unequal(name in arb_ident()) {
        let a = expr_of(&format!("x = var.{name}\n"));
        let b = expr_of(&format!("x = var.{name}_other\n"));

        let mut diagnostics = Vec::new();
        prop_assert!(!exprs_equal(Some(&a), Some(&b), "", "x", &mut diagnostics));
    }

    #[test]
    fn literal_equality_ignores_whitespace(value in 0u32..1000, pad in 0usize..4) {
        let spaces = " ".repeat(pad);
        let a = expr_of(&format!("x = [{value}]\n"));
        let b = expr_of(&format!("x = [{spaces}{value}{spaces}]\n"));

        let mut diagnostics = Vec::new();
        prop_assert!(exprs_equal(Some(&a), Some(&b), "", "x", &mut diagnostics));
        prop_assert!(diagnostics.is_empty());
    }

    #[test]
    fn distinct_literals_compare_unequal(value in 0u32..1000) {
        let a = expr_of(&format!("x = {value}\n"));
        let b = expr_of(&format!("x = {}\n", value + 1));

        let mut diagnostics = Vec::new();
        prop_assert!(!exprs_equal(Some(&a), Some(&b), "", "x", &mut diagnostics));
    }

    #[test]
    fn presence_on_one_side_only_is_unequal(value in 0u32..1000) {
        let a = expr_of(&format!("x = {value}\n"));

        let mut diagnostics = Vec::new();
        prop_assert!(!exprs_equal(Some(&a), None, "", "x", &mut diagnostics));
        prop_assert!(!exprs_equal(None, Some(&a), "", "x", &mut diagnostics));
        prop_assert!(exprs_equal(None, None, "", "x", &mut diagnostics));
    }
}
