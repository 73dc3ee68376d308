//! Property tests for ontalign-semantic.

use proptest::prelude::*;

use ontalign_core::config::{SemanticConfig, Strategy as Combination};
use ontalign_core::traits::IAlignmentStore;
use ontalign_core::{Alignment, EntityType, Mapping};
use ontalign_hierarchy::IndexedHierarchy;
use ontalign_semantic::information_content::seco;
use ontalign_semantic::measures::tconorm;
use ontalign_semantic::SemanticEqMatcher;

/// Random DAG over ids `0..n`; edges closing a cycle are skipped.
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

fn mapping_strategy(n: u32, len: usize) -> impl Strategy<Value = Vec<Mapping>> {
    prop::collection::vec((0..n, 0..n, 0.0f64..=1.0), 0..len)
        .prop_map(|v| v.into_iter().map(|(s, t, sim)| Mapping::new(s, t, sim)).collect())
}

fn combination() -> impl Strategy<Value = Combination> {
    prop_oneof![
        Just(Combination::Ancestors),
        Just(Combination::Descendants),
        Just(Combination::Minimum),
        Just(Combination::Maximum),
        Just(Combination::Average),
    ]
}

proptest! {
    #[test]
    fn tconorm_is_commutative_and_bounded(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
        prop_assert!((tconorm(x, y) - tconorm(y, x)).abs() < 1e-12);
        prop_assert!(tconorm(x, y) >= x - 1e-12);
        prop_assert!(tconorm(x, y) <= 1.0 + 1e-12);
    }
}

proptest! {
    #[test]
    fn seco_is_at_most_one_and_decreasing(corpus in 2usize..10_000, a in 0usize..10_000, b in 0usize..10_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(seco(low, corpus) <= 1.0);
        prop_assert!(seco(low, corpus) >= seco(high, corpus));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn extension_never_reuses_mapped_entities(
        source_edges in edge_strategy(16),
        target_edges in edge_strategy(16),
        seed in mapping_strategy(16, 6),
        secondary in mapping_strategy(16, 60),
        radius in 0u32..4,
        strategy in combination(),
    ) {
        let source = build_random_dag(16, &source_edges);
        let target = build_random_dag(16, &target_edges);
        let seed: Alignment = seed.into();
        let secondary: Alignment = secondary.into();
        let config = SemanticConfig::default()
            .with_radius(radius)
            .with_strategy(strategy)
            .with_threads(2);
        let matcher = SemanticEqMatcher::new(&source, &target, &secondary, config);

        let out = matcher.extend(&seed, EntityType::Class, 0.0).unwrap();

        for m in &out {
            prop_assert!(!seed.contains_source(m.source_id));
            prop_assert!(!seed.contains_target(m.target_id));
            prop_assert!(m.similarity.is_finite());
        }
        if radius == 0 {
            prop_assert!(out.is_empty());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn one_worker_and_many_workers_agree(
        source_edges in edge_strategy(20),
        target_edges in edge_strategy(20),
        seed in mapping_strategy(20, 5),
        secondary in mapping_strategy(20, 120),
        threshold in 0.0f64..0.8,
    ) {
        let source = build_random_dag(20, &source_edges);
        let target = build_random_dag(20, &target_edges);
        let seed: Alignment = seed.into();
        let secondary: Alignment = secondary.into();

        let run = |threads: usize| {
            let config = SemanticConfig::default().with_radius(2).with_threads(threads);
            SemanticEqMatcher::new(&source, &target, &secondary, config)
                .extend(&seed, EntityType::Class, threshold)
                .unwrap()
        };
        let single = run(1);
        let many = run(8);

        prop_assert_eq!(single.len(), many.len());
        for m in &single {
            let other = many.get(m.source_id, m.target_id);
            prop_assert!(other.is_some());
            prop_assert_eq!(other.unwrap().similarity, m.similarity);
        }
    }
}
