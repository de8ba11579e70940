//! Property-based tests using proptest.
//!
//! These verify the solver invariants that should hold for all inputs:
//! cover validity, the branch-and-bound restore contract, the
//! 2-approximation bound, and best-of dominance.

use minvc::prelude::*;
use minvc::testing::{exhaustive_min_cover, is_cover};
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

/// Strategy for random graphs with between 2 and `max_vertices` vertices.
/// Self-loops are remapped to edge (0, 1), which always exists when n >= 2.
fn graph_strategy(max_vertices: usize) -> impl Strategy<Value = Graph> {
    (2..=max_vertices).prop_flat_map(|n| {
        let edge_strategy = (0..n, 0..n).prop_map(|(u, v)| {
            if u < v {
                (u, v)
            } else if v < u {
                (v, u)
            } else {
                (0, 1)
            }
        });
        prop::collection::vec(edge_strategy, 0..n * 2).prop_map(move |edges| {
            let unique: HashSet<_> = edges.into_iter().collect();
            Graph::new(n, unique.into_iter().collect())
        })
    })
}

/// True when no component is a single edge; such components have only
/// degree-one endpoints and the branch-and-bound candidate set skips them.
fn has_no_isolated_edge(graph: &Graph) -> bool {
    graph.edges().all(|e| {
        let (u, v) = e.endpoints();
        graph.degree(u) > 1 || graph.degree(v) > 1
    })
}

proptest! {
    #[test]
    fn constructive_covers_are_valid(graph in graph_strategy(12)) {
        prop_assert!(is_cover(&graph, &maximal_matching(&graph)));
        prop_assert!(is_cover(&graph, &degree_one_retarget(&graph)));
        prop_assert!(is_cover(&graph, &degree_one_priority(&graph)));
        prop_assert!(is_cover(&graph, &min_degree_pairs(&graph)));
    }

    #[test]
    fn maximal_matching_is_within_twice_the_optimum(graph in graph_strategy(8)) {
        let optimum = exhaustive_min_cover(&graph).len();
        prop_assert!(maximal_matching(&graph).len() <= 2 * optimum);
    }

    #[test]
    fn half_the_weak_cover_bounds_the_optimum(graph in graph_strategy(8)) {
        let optimum = exhaustive_min_cover(&graph).len();
        prop_assert!(min_degree_pairs(&graph).len() / 2 <= optimum);
    }

    #[test]
    fn best_constructive_dominates_each_heuristic(graph in graph_strategy(10)) {
        let best = best_constructive(&graph).len();
        prop_assert!(best <= maximal_matching(&graph).len());
        prop_assert!(best <= degree_one_retarget(&graph).len());
        prop_assert!(best <= degree_one_priority(&graph).len());
    }

    #[test]
    fn branch_and_bound_is_valid_and_restores(graph in graph_strategy(9)) {
        let mut working = graph.clone();
        let mut trace = Trace::new(Vec::new());
        let cover = BranchAndBound::new(Duration::from_secs(10))
            .solve(&mut working, &mut trace)
            .unwrap();
        prop_assert!(is_cover(&graph, &cover));
        prop_assert_eq!(&working, &graph);
    }

    #[test]
    fn branch_and_bound_is_optimal_without_isolated_edges(graph in graph_strategy(9)) {
        prop_assume!(has_no_isolated_edge(&graph));
        let mut working = graph.clone();
        let mut trace = Trace::new(Vec::new());
        let cover = BranchAndBound::new(Duration::from_secs(10))
            .solve(&mut working, &mut trace)
            .unwrap();
        prop_assert_eq!(cover.len(), exhaustive_min_cover(&graph).len());
    }
}

proptest! {
    // Wall-clock searches: keep the case count small.
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn cover_search_returns_a_valid_cover(graph in graph_strategy(10), seed in 0u64..32) {
        let mut working = graph.clone();
        let mut trace = Trace::new(Vec::new());
        let cover = CoverSearch::new(Duration::from_millis(10), seed)
            .solve(&mut working, &mut trace)
            .unwrap();
        prop_assert!(is_cover(&graph, &cover));
    }

    #[test]
    fn mis_search_returns_a_valid_cover(graph in graph_strategy(10), seed in 0u64..32) {
        let mut working = graph.clone();
        let mut trace = Trace::new(Vec::new());
        let cover = MisSearch::new(Duration::from_millis(10), seed)
            .solve(&mut working, &mut trace)
            .unwrap();
        prop_assert!(is_cover(&graph, &cover));
        // The complement of a valid cover is an independent set.
        let complement: Vec<VertexId> = (0..graph.num_vertices())
            .filter(|v| !cover.contains(v))
            .collect();
        for &u in &complement {
            for &v in &complement {
                prop_assert!(u == v || !graph.has_edge(u, v));
            }
        }
    }
}
