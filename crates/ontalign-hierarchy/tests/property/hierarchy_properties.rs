//! Property tests for ontalign-hierarchy.

use std::collections::HashSet;

use proptest::prelude::*;

use ontalign_core::traits::IClassHierarchy;
use ontalign_core::ClassId;
use ontalign_hierarchy::dag_enforcement;
use ontalign_hierarchy::IndexedHierarchy;

/// Build a random DAG, silently skipping edges that would close a cycle.
fn build_random_dag(n: u32, edges: &[(u32, u32)]) -> IndexedHierarchy {
    let mut h = IndexedHierarchy::new();
    for i in 0..n {
        h.ensure_class(i);
    }
    for &(child, parent) in edges {
        let _ = h.add_subclass(child, parent);
    }
    h
}

fn edge_strategy(n: u32) -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0..n, 0..n), 0..(n as usize) * 2)
}

proptest! {
    #[test]
    fn insertion_keeps_graph_acyclic(edges in edge_strategy(25)) {
        let h = build_random_dag(25, &edges);
        prop_assert!(dag_enforcement::is_acyclic(&h));
    }
}

proptest! {
    #[test]
    fn descendant_layers_partition_all_descendants(edges in edge_strategy(20)) {
        let h = build_random_dag(20, &edges);
        for id in 0..20 {
            let mut union: HashSet<ClassId> = HashSet::new();
            for r in 1..=20 {
                let layer = h.descendants_at_distance(id, r);
                prop_assert!(union.is_disjoint(&layer), "layer {} overlaps earlier layers", r);
                union.extend(layer);
            }
            prop_assert_eq!(union, h.all_descendants(id));
        }
    }
}

proptest! {
    #[test]
    fn ancestor_and_descendant_layers_are_inverse(edges in edge_strategy(15)) {
        let h = build_random_dag(15, &edges);
        for a in 0..15 {
            for d in h.descendants_at_distance(a, 1) {
                prop_assert!(h.ancestors_at_distance(d, 1).contains(&a));
            }
        }
    }
}
