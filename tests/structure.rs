//! Structural properties of built trees and folded expressions

use proptest::prelude::*;
use mathgen::tree::{max_node_count, min_node_count};
use mathgen::alphabet::{is_operator, is_terminal};
use mathgen::{build, fold, UniformSource};

mod common;
use common::*;

#[test]
fn thousand_builds_at_depth_five_stay_in_bounds() {
    let max_depth = 5;
    let mut source = UniformSource::seeded(2020);

    for run in 0..1000 {
        let mut root = build(max_depth, &mut source);

        let nodes = root.node_count();
        assert!(
            (min_node_count(max_depth)..=max_node_count(max_depth)).contains(&nodes),
            "run {}: {} nodes outside [{}, {}]",
            run,
            nodes,
            min_node_count(max_depth),
            max_node_count(max_depth)
        );

        let depths = root.leaf_depths();
        assert!(depths.iter().all(|&d| d <= max_depth), "run {}: leaf too deep", run);
        assert!(depths.contains(&max_depth), "run {}: bound never reached", run);

        let expression = fold(&mut root);
        assert!(!expression.is_empty());
        assert!(balanced(&expression), "run {}: unbalanced {:?}", run, expression);
    }
}

proptest! {
    #[test]
    fn every_node_has_zero_or_two_children(max_depth in 1usize..10, seed in any::<u64>()) {
        let mut source = UniformSource::seeded(seed);
        let root = build(max_depth, &mut source);

        for node in root.iter() {
            let slots = usize::from(node.left().is_some()) + usize::from(node.right().is_some());
            prop_assert!(slots == 0 || slots == 2, "node at depth {} has {} children", node.depth, slots);
            if slots == 2 {
                prop_assert!(is_operator(&node.symbol));
            } else {
                prop_assert!(is_terminal(&node.symbol));
            }
        }

        let height = root.height();
        prop_assert_eq!(height, max_depth, "tree height should equal the bound");
    }

    #[test]
    fn folding_preserves_tree_content(max_depth in 1usize..10, seed in any::<u64>()) {
        let mut source = UniformSource::seeded(seed);
        let mut root = build(max_depth, &mut source);
        let operators = internal_nodes(&root);
        let wrapped = wrapped_nodes(&root);
        let leaves = root.leaf_depths().len();

        let expression = fold(&mut root);
        prop_assert!(root.is_terminal(), "root keeps children after folding");
        prop_assert_eq!(&root.symbol, &expression);

        let tokens = tokens(&expression);
        prop_assert!(tokens.iter().all(|t| is_operator(t) || is_terminal(t)), "foreign token in {:?}", expression);
        prop_assert_eq!(tokens.iter().filter(|t| is_operator(t)).count(), operators);
        prop_assert_eq!(tokens.iter().filter(|t| is_terminal(t)).count(), leaves);
        prop_assert_eq!(leaves, operators + 1);

        prop_assert!(balanced(&expression));
        prop_assert_eq!(expression.matches('(').count(), wrapped);
        prop_assert!(!fully_wrapped(&expression), "outermost expression wrapped: {:?}", expression);
        prop_assert!(top_level_operators(&expression) >= 1);
        prop_assert!(!expression.contains("  "), "double space in {:?}", expression);
    }
}
