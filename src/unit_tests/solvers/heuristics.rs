use super::*;
use crate::testing::{exhaustive_min_cover, is_cover};

#[test]
fn test_maximal_matching_takes_both_endpoints() {
    assert_eq!(maximal_matching(&Graph::complete(3)), vec![0, 1]);
    assert_eq!(maximal_matching(&Graph::star(5)), vec![0, 1]);
    // A path alternates into every vertex: the 2-approximation worst case.
    assert_eq!(maximal_matching(&Graph::path(4)), vec![0, 1, 2, 3]);
}

#[test]
fn test_maximal_matching_is_two_approximation() {
    for graph in [
        Graph::path(6),
        Graph::cycle(7),
        Graph::complete(5),
        Graph::star(6),
    ] {
        let cover = maximal_matching(&graph);
        assert!(is_cover(&graph, &cover));
        assert!(cover.len() <= 2 * exhaustive_min_cover(&graph).len());
    }
}

#[test]
fn test_min_degree_pairs_is_pessimistic() {
    // Pairing minimum-degree vertices covers P4 with all four vertices.
    assert_eq!(min_degree_pairs(&Graph::path(4)), vec![0, 1, 2, 3]);
    assert_eq!(min_degree_pairs(&Graph::complete(3)), vec![0, 1]);
}

#[test]
fn test_min_degree_pairs_halved_is_lower_bound() {
    for graph in [
        Graph::path(6),
        Graph::cycle(7),
        Graph::complete(5),
        Graph::star(6),
        Graph::new(4, vec![(0, 1), (2, 3)]),
    ] {
        let cover = min_degree_pairs(&graph);
        assert!(is_cover(&graph, &cover));
        assert!(cover.len() / 2 <= exhaustive_min_cover(&graph).len());
    }
}

#[test]
fn test_degree_one_priority_spares_leaves() {
    assert_eq!(degree_one_priority(&Graph::star(5)), vec![0]);
    assert_eq!(degree_one_priority(&Graph::new(2, vec![(0, 1)])), vec![1]);
    assert_eq!(degree_one_priority(&Graph::path(4)), vec![1, 3]);
    assert_eq!(degree_one_priority(&Graph::complete(3)), vec![0, 1]);
}

#[test]
fn test_degree_one_retarget() {
    assert_eq!(degree_one_retarget(&Graph::star(5)), vec![0]);
    assert_eq!(degree_one_retarget(&Graph::complete(4)), vec![0, 1, 3]);
    for graph in [Graph::path(7), Graph::cycle(6), Graph::star(9)] {
        assert!(is_cover(&graph, &degree_one_retarget(&graph)));
    }
}

#[test]
fn test_best_constructive_dominates() {
    for graph in [
        Graph::path(8),
        Graph::cycle(9),
        Graph::complete(6),
        Graph::star(7),
        Graph::new(5, vec![(0, 1), (1, 2), (0, 2), (3, 4)]),
    ] {
        let best = best_constructive(&graph);
        assert!(is_cover(&graph, &best));
        assert!(best.len() <= maximal_matching(&graph).len());
        assert!(best.len() <= degree_one_retarget(&graph).len());
        assert!(best.len() <= degree_one_priority(&graph).len());
    }
}

#[test]
fn test_edgeless_graphs_need_no_cover() {
    let graph = Graph::empty(4);
    assert!(min_degree_pairs(&graph).is_empty());
    assert!(maximal_matching(&graph).is_empty());
    assert!(degree_one_retarget(&graph).is_empty());
    assert!(degree_one_priority(&graph).is_empty());
    assert!(best_constructive(&graph).is_empty());
}

#[test]
fn test_approx_solver_reports_one_trace_line() {
    let mut graph = Graph::star(6);
    let mut trace = Trace::new(Vec::new());
    let cover = Approx.solve(&mut graph, &mut trace).unwrap();
    assert_eq!(cover, vec![0]);

    let output = String::from_utf8(trace.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",1"));
}
