//! Aggregation is deterministic and resolves duplicates first-wins.

use std::path::PathBuf;

use proptest::prelude::*;

use tfdelta::{aggregate, SourceUnit};

fn arb_ident() -> impl Strategy<Value = String> {
    "a[a-z0-9_]{0,7}"
}

fn arb_file() -> impl Strategy<Value = Vec<(String, u32)>> {
    proptest::collection::vec((arb_ident(), 0u32..1000), 0..5)
}

fn units_from(files: &[Vec<(String, u32)>]) -> Vec<SourceUnit> {
    files
        .iter()
        .enumerate()
        .map(|(i, attrs)| {
            let content: String = attrs
                .iter()
                .map(|(name, value)| format!("{name} = {value}\n"))
                .collect();
            SourceUnit {
                path: PathBuf::from(format!("{i}.tf")),
                body: hcl::parse(&content).unwrap(),
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn aggregation_is_deterministic(files in proptest::collection::vec(arb_file(), 0..4)) {
        let units = units_from(&files);

        let (first_tree, first_diagnostics) = aggregate(&units);
        let (second_tree, second_diagnostics) = aggregate(&units);

        prop_assert_eq!(first_tree, second_tree);
        prop_assert_eq!(first_diagnostics, second_diagnostics);
    }

    #[test]
    fn first_occurrence_of_a_duplicate_wins(
        name in arb_ident(),
        first in 0u32..1000,
        second in 1000u32..2000,
    ) {
        let files = vec![vec![(name.clone(), first)], vec![(name.clone(), second)]];
        let units = units_from(&files);

        let (tree, diagnostics) = aggregate(&units);

        let expected = hcl::parse(&format!("{name} = {first}\n"))
            .unwrap()
            .attributes()
            .next()
            .unwrap()
            .expr
            .clone();
        prop_assert_eq!(&tree.attributes[&name], &expected);
        prop_assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn every_attribute_in_the_aggregate_came_from_some_unit(
        files in proptest::collection::vec(arb_file(), 0..4),
    ) {
        let units = units_from(&files);
        let (tree, _) = aggregate(&units);

        for name in tree.attributes.keys() {
            let seen = files.iter().flatten().any(|(n, _)| n == name);
            prop_assert!(seen, "aggregate invented attribute {name}");
        }
    }
}
