use super::*;
use crate::testing::{exhaustive_min_cover, is_cover};

fn solve(graph: &mut Graph) -> (Vec<VertexId>, Vec<usize>) {
    let mut trace = Trace::new(Vec::new());
    let mut solver = BranchAndBound::new(Duration::from_secs(30));
    let cover = solver.solve(graph, &mut trace).unwrap();
    let sizes = String::from_utf8(trace.into_inner())
        .unwrap()
        .lines()
        .map(|line| line.split_once(',').unwrap().1.parse().unwrap())
        .collect();
    (cover, sizes)
}

/// Petersen graph: 3-regular on 10 vertices, minimum cover 6.
fn petersen() -> Graph {
    let mut edges: Vec<(VertexId, VertexId)> = (0..5).map(|i| (i, (i + 1) % 5)).collect();
    edges.extend((0..5).map(|i| (5 + i, 5 + (i + 2) % 5)));
    edges.extend((0..5).map(|i| (i, i + 5)));
    Graph::new(10, edges)
}

#[test]
fn test_optimal_on_small_graphs() {
    assert_eq!(solve(&mut Graph::complete(3)).0.len(), 2);
    assert_eq!(solve(&mut Graph::path(4)).0.len(), 2);
    assert_eq!(solve(&mut Graph::star(5)).0, vec![0]);
    assert_eq!(solve(&mut Graph::complete(5)).0.len(), 4);
    assert_eq!(solve(&mut Graph::cycle(5)).0.len(), 3);
    assert!(solve(&mut Graph::empty(3)).0.is_empty());
}

#[test]
fn test_matches_oracle_on_petersen() {
    let mut graph = petersen();
    let (cover, _) = solve(&mut graph);
    assert!(is_cover(&graph, &cover));
    assert_eq!(cover.len(), exhaustive_min_cover(&graph).len());
    assert_eq!(cover.len(), 6);
}

#[test]
fn test_leaf_only_components_fall_back_to_trivial_cover() {
    // Both endpoints of an isolated edge have degree one, so neither is
    // ever branched on; the seeded all-vertices cover survives.
    let mut graph = Graph::new(4, vec![(0, 1), (2, 3)]);
    let (cover, _) = solve(&mut graph);
    assert!(is_cover(&graph, &cover));
    assert_eq!(cover.len(), 4);
}

#[test]
fn test_graph_restored_after_solve() {
    for mut graph in [Graph::complete(5), petersen(), Graph::path(6)] {
        let snapshot = graph.clone();
        solve(&mut graph);
        assert_eq!(graph, snapshot);
    }
}

#[test]
fn test_trace_sizes_strictly_decrease() {
    let (_, sizes) = solve(&mut Graph::complete(6));
    assert!(sizes.len() >= 2, "expected the trivial cover to improve");
    assert_eq!(sizes[0], 6);
    assert!(sizes.windows(2).all(|w| w[1] < w[0]));
    assert_eq!(*sizes.last().unwrap(), 5);
}

#[test]
fn test_zero_cutoff_still_returns_a_cover() {
    let mut graph = Graph::complete(8);
    let mut trace = Trace::new(Vec::new());
    let mut solver = BranchAndBound::new(Duration::ZERO);
    let cover = solver.solve(&mut graph, &mut trace).unwrap();
    assert!(is_cover(&graph, &cover));
}
