//! End-to-end scenarios exercising all four solvers through the public API.

use minvc::prelude::*;
use minvc::testing::{exhaustive_min_cover, is_cover};
use std::time::Duration;

const LS_CUTOFF: Duration = Duration::from_millis(100);

/// Runs a solver and returns its cover plus the traced best sizes.
fn run<S: Solver>(mut solver: S, graph: &mut Graph) -> (Vec<VertexId>, Vec<usize>) {
    let mut trace = Trace::new(Vec::new());
    let cover = solver.solve(graph, &mut trace).unwrap();
    let sizes = String::from_utf8(trace.into_inner())
        .unwrap()
        .lines()
        .map(|line| line.split_once(',').unwrap().1.parse().unwrap())
        .collect();
    (cover, sizes)
}

/// The named scenarios: graph plus its optimal cover size.
fn scenarios() -> Vec<(&'static str, Graph, usize)> {
    vec![
        ("triangle", Graph::complete(3), 2),
        ("path_p4", Graph::path(4), 2),
        ("star_k14", Graph::star(5), 1),
        ("k5", Graph::complete(5), 4),
        ("two_disjoint_edges", Graph::new(4, vec![(0, 1), (2, 3)]), 2),
        ("edgeless", Graph::empty(3), 0),
    ]
}

#[test]
fn every_solver_emits_a_valid_cover() {
    for (name, graph, _) in scenarios() {
        let mut g = graph.clone();
        let (cover, _) = run(BranchAndBound::new(Duration::from_secs(10)), &mut g);
        assert!(is_cover(&g, &cover), "BnB invalid on {name}");

        let (cover, _) = run(Approx, &mut g);
        assert!(is_cover(&g, &cover), "Approx invalid on {name}");

        let (cover, _) = run(CoverSearch::new(LS_CUTOFF, 0), &mut g);
        assert!(is_cover(&g, &cover), "LS1 invalid on {name}");

        let (cover, _) = run(MisSearch::new(LS_CUTOFF, 0), &mut g);
        assert!(is_cover(&g, &cover), "LS2 invalid on {name}");
    }
}

#[test]
fn branch_and_bound_hits_known_optima() {
    // Every scenario except the two isolated edges, whose endpoints all
    // have degree one and are therefore never branched on.
    for (name, graph, opt) in scenarios() {
        if name == "two_disjoint_edges" {
            continue;
        }
        let mut g = graph;
        let (cover, _) = run(BranchAndBound::new(Duration::from_secs(10)), &mut g);
        assert_eq!(cover.len(), opt, "BnB suboptimal on {name}");
    }
}

#[test]
fn local_searches_match_the_optimum_on_small_scenarios() {
    for (name, graph, opt) in scenarios() {
        let mut g = graph;
        let (cover, _) = run(CoverSearch::new(LS_CUTOFF, 3), &mut g);
        assert_eq!(cover.len(), opt, "LS1 missed the optimum on {name}");
        let (cover, _) = run(MisSearch::new(LS_CUTOFF, 3), &mut g);
        assert_eq!(cover.len(), opt, "LS2 missed the optimum on {name}");
    }
}

#[test]
fn heuristics_stay_within_twice_the_optimum() {
    for (name, graph, opt) in scenarios() {
        let (cover, _) = run(Approx, &mut graph.clone());
        assert!(is_cover(&graph, &cover));
        assert!(cover.len() <= 2 * opt, "Approx blew the bound on {name}");
        assert!(maximal_matching(&graph).len() <= 2 * opt);
    }
}

#[test]
fn branch_and_bound_restores_the_graph() {
    for (_, graph, _) in scenarios() {
        let mut g = graph.clone();
        run(BranchAndBound::new(Duration::from_secs(10)), &mut g);
        assert_eq!(g, graph);
    }
}

#[test]
fn traces_decrease_strictly() {
    for (name, graph, _) in scenarios() {
        let mut g = graph;
        for sizes in [
            run(BranchAndBound::new(Duration::from_secs(10)), &mut g).1,
            run(Approx, &mut g).1,
            run(CoverSearch::new(LS_CUTOFF, 1), &mut g).1,
            run(MisSearch::new(LS_CUTOFF, 1), &mut g).1,
        ] {
            assert!(!sizes.is_empty(), "no initial trace line on {name}");
            assert!(
                sizes.windows(2).all(|w| w[1] < w[0]),
                "non-decreasing trace on {name}"
            );
        }
    }
}

#[test]
fn equal_seeds_reproduce_solution_and_trace_sizes() {
    for seed in [0, 9] {
        let first = run(CoverSearch::new(LS_CUTOFF, seed), &mut Graph::cycle(11));
        let second = run(CoverSearch::new(LS_CUTOFF, seed), &mut Graph::cycle(11));
        assert_eq!(first, second);

        let first = run(MisSearch::new(LS_CUTOFF, seed), &mut Graph::cycle(11));
        let second = run(MisSearch::new(LS_CUTOFF, seed), &mut Graph::cycle(11));
        assert_eq!(first, second);
    }
}

#[test]
fn solver_tags_name_the_output_files() {
    assert_eq!(BranchAndBound::new(Duration::ZERO).tag(), "BnB");
    assert_eq!(Approx.tag(), "Approx");
    assert_eq!(CoverSearch::new(Duration::ZERO, 0).tag(), "LS1");
    assert_eq!(MisSearch::new(Duration::ZERO, 0).tag(), "LS2");
}

#[test]
fn oracle_agrees_with_branch_and_bound_on_a_denser_graph() {
    let mut graph = Graph::new(
        8,
        vec![
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 4),
            (3, 4),
            (3, 5),
            (4, 6),
            (5, 6),
            (5, 7),
            (6, 7),
        ],
    );
    let (cover, _) = run(BranchAndBound::new(Duration::from_secs(10)), &mut graph);
    assert!(is_cover(&graph, &cover));
    assert_eq!(cover.len(), exhaustive_min_cover(&graph).len());
}
