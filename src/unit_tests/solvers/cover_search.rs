use super::*;
use crate::testing::is_cover;

const CUTOFF: Duration = Duration::from_millis(50);

fn solve(graph: &mut Graph, seed: u64) -> (Vec<VertexId>, Vec<usize>) {
    let mut trace = Trace::new(Vec::new());
    let mut solver = CoverSearch::new(CUTOFF, seed);
    let cover = solver.solve(graph, &mut trace).unwrap();
    let sizes = String::from_utf8(trace.into_inner())
        .unwrap()
        .lines()
        .map(|line| line.split_once(',').unwrap().1.parse().unwrap())
        .collect();
    (cover, sizes)
}

#[test]
fn test_returns_valid_covers() {
    for mut graph in [
        Graph::complete(3),
        Graph::path(6),
        Graph::star(6),
        Graph::cycle(7),
        Graph::new(5, vec![(0, 1), (1, 2), (0, 2), (3, 4)]),
    ] {
        let (cover, sizes) = solve(&mut graph, 0);
        assert!(is_cover(&graph, &cover));
        assert!(sizes.windows(2).all(|w| w[1] < w[0]));
    }
}

#[test]
fn test_never_worse_than_constructive_start() {
    for seed in [0, 1, 42] {
        let mut graph = Graph::cycle(9);
        let start = best_constructive(&graph).len();
        let (cover, _) = solve(&mut graph, seed);
        assert!(cover.len() <= start);
    }
}

#[test]
fn test_triangle_stays_optimal() {
    let (cover, _) = solve(&mut Graph::complete(3), 3);
    assert_eq!(cover.len(), 2);
}

#[test]
fn test_edgeless_graph_returns_empty_cover() {
    let (cover, sizes) = solve(&mut Graph::empty(4), 0);
    assert!(cover.is_empty());
    assert_eq!(sizes, vec![0]);
}

#[test]
fn test_equal_seeds_are_deterministic() {
    let first = solve(&mut Graph::cycle(9), 7);
    let second = solve(&mut Graph::cycle(9), 7);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}
