use super::*;
use crate::testing::is_cover;

const CUTOFF: Duration = Duration::from_millis(50);

fn solve(graph: &mut Graph, seed: u64) -> (Vec<VertexId>, Vec<usize>) {
    let mut trace = Trace::new(Vec::new());
    let mut solver = MisSearch::new(CUTOFF, seed);
    let cover = solver.solve(graph, &mut trace).unwrap();
    let sizes = String::from_utf8(trace.into_inner())
        .unwrap()
        .lines()
        .map(|line| line.split_once(',').unwrap().1.parse().unwrap())
        .collect();
    (cover, sizes)
}

/// The bookkeeping contract: for every vertex outside the set, tightness
/// counts its members among neighbors and `free` holds exactly the
/// 0-tight outsiders; members are pairwise non-adjacent.
fn assert_consistent(graph: &Graph, state: &SetState) {
    for v in 0..graph.num_vertices() {
        if state.members.contains(&v) {
            assert!(!state.free.contains(&v));
            for j in graph.neighbors(v) {
                assert!(!state.members.contains(j), "members must be independent");
            }
        } else {
            let expected = graph
                .neighbors(v)
                .iter()
                .filter(|&j| state.members.contains(j))
                .count() as i32;
            assert_eq!(state.tightness[v], expected);
            assert_eq!(state.free.contains(&v), expected == 0);
        }
    }
}

#[test]
fn test_from_cover_bookkeeping() {
    let graph = Graph::path(5);
    let state = SetState::from_cover(&graph, &[1, 3]);
    let expected: BTreeSet<VertexId> = [0, 2, 4].into_iter().collect();
    assert_eq!(state.members, expected);
    assert_consistent(&graph, &state);
    assert!(state.free.is_empty());
}

#[test]
fn test_add_and_remove_keep_bookkeeping() {
    let graph = Graph::cycle(6);
    let mut state = SetState::from_cover(&graph, &[0, 1, 2, 3, 4, 5]);
    assert_eq!(state.free.len(), 6);

    state.add(&graph, 0);
    assert_consistent(&graph, &state);
    assert!(!state.free.contains(&1));

    state.add(&graph, 2);
    state.add(&graph, 4);
    assert_consistent(&graph, &state);
    assert!(state.free.is_empty());

    state.remove(&graph, 2);
    assert_consistent(&graph, &state);
    assert!(state.free.contains(&2));

    state.add(&graph, 2);
    assert_consistent(&graph, &state);
}

#[test]
fn test_two_improvement_swaps_one_for_two() {
    let graph = Graph::path(5);
    // S = {2}: both neighbors are 1-tight and non-adjacent.
    let mut state = SetState::from_cover(&graph, &[0, 1, 3, 4]);
    two_improvement(&graph, &mut state);
    let expected: BTreeSet<VertexId> = [1, 3].into_iter().collect();
    assert_eq!(state.members, expected);
    assert_consistent(&graph, &state);
}

#[test]
fn test_two_improvement_never_shrinks() {
    for (graph, cover) in [
        (Graph::cycle(8), vec![0, 1, 3, 5, 7]),
        (Graph::star(6), vec![0]),
        (Graph::complete(4), vec![0, 1, 2]),
    ] {
        let mut state = SetState::from_cover(&graph, &cover);
        let before = state.members.len();
        two_improvement(&graph, &mut state);
        assert!(state.members.len() >= before);
        assert_consistent(&graph, &state);
    }
}

#[test]
fn test_perturb_keeps_bookkeeping() {
    let graph = Graph::cycle(9);
    let state = SetState::from_cover(&graph, &[0, 1, 3, 5, 7]);
    let mut rng = StdRng::seed_from_u64(11);
    for protection in [0, 3] {
        let next = perturb(&graph, &state, protection, &mut rng);
        assert_consistent(&graph, &next);
        assert!(!next.members.is_empty());
    }
}

#[test]
fn test_returns_valid_covers() {
    for mut graph in [
        Graph::complete(3),
        Graph::path(4),
        Graph::cycle(7),
        Graph::new(5, vec![(0, 1), (1, 2), (0, 2), (3, 4)]),
    ] {
        let (cover, sizes) = solve(&mut graph, 0);
        assert!(is_cover(&graph, &cover));
        assert!(sizes.windows(2).all(|w| w[1] < w[0]));
    }
}

#[test]
fn test_star_keeps_center() {
    let (cover, _) = solve(&mut Graph::star(5), 1);
    assert_eq!(cover, vec![0]);
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
