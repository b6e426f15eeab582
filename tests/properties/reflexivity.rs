//! Comparing any tree with itself (or a clone) reports nothing.

use proptest::prelude::*;

use hcl::Expression;
use tfdelta::{AttributeSet, BlockMatching, ConfigBlock, ConfigTree, DiffOptions, TreeDiffer};

fn arb_ident() -> impl Strategy<Value = String> {
    "a[a-z0-9_]{0,7}"
}

fn arb_expression() -> impl Strategy<Value = Expression> {
    prop_oneof![
        any::<bool>().prop_map(Expression::Bool),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(Expression::String),
        Just(Expression::Null),
    ]
}

fn arb_attributes() -> impl Strategy<Value = AttributeSet> {
    proptest::collection::btree_map(arb_ident(), arb_expression(), 0..4)
}

fn arb_tree() -> impl Strategy<Value = ConfigTree> {
    let leaf = arb_attributes().prop_map(|attributes| ConfigTree {
        attributes,
        blocks: Vec::new(),
    });
    leaf.prop_recursive(3, 24, 3, |inner| {
        (
            arb_attributes(),
            proptest::collection::vec(
                (
                    arb_ident(),
                    proptest::collection::vec(arb_ident(), 0..3),
                    inner,
                ),
                0..3,
            ),
        )
            .prop_map(|(attributes, blocks)| ConfigTree {
                attributes,
                blocks: blocks
                    .into_iter()
                    .map(|(block_type, labels, body)| ConfigBlock {
                        block_type,
                        labels,
                        body,
                    })
                    .collect(),
            })
    })
}

proptest! {
    #[test]
    fn tree_never_differs_from_itself(tree in arb_tree()) {
        let report = TreeDiffer::default().diff(&tree, &tree);
        prop_assert!(report.is_empty());
        prop_assert!(!report.has_changes());
    }

    #[test]
    fn tree_never_differs_from_its_clone(tree in arb_tree()) {
        let copy = tree.clone();
        let report = TreeDiffer::default().diff(&tree, &copy);
        prop_assert!(report.is_empty());
    }

    #[test]
    fn reflexivity_holds_under_identity_matching(tree in arb_tree()) {
        let differ = TreeDiffer::new(DiffOptions {
            matching: BlockMatching::ByIdentity,
            descend_past_attribute_changes: false,
        });
        let report = differ.diff(&tree, &tree);
        prop_assert!(report.is_empty());
    }

    #[test]
    fn reflexivity_holds_when_descending_past_attributes(tree in arb_tree()) {
        let differ = TreeDiffer::new(DiffOptions {
            matching: BlockMatching::Positional,
            descend_past_attribute_changes: true,
        });
        let report = differ.diff(&tree, &tree);
        prop_assert!(report.is_empty());
    }
}
