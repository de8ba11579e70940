use super::*;
use crate::io::{from_json, to_json};

#[test]
fn test_edge_canonicalization() {
    assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
    assert_eq!(Edge::new(3, 1).endpoints(), (1, 3));
    assert_eq!(Edge::new(0, 0).endpoints(), (0, 0));
}

#[test]
fn test_edge_ordering_is_lexicographic() {
    assert!(Edge::new(0, 1) < Edge::new(0, 2));
    assert!(Edge::new(0, 2) < Edge::new(1, 2));
    assert!(Edge::new(1, 2) < Edge::new(2, 3));
}

#[test]
fn test_new_graph() {
    let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.num_edges(), 3);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
    assert!(!graph.has_edge(0, 2));
    assert_eq!(graph.degree(1), 2);
}

#[test]
fn test_duplicate_listings_collapse() {
    let graph = Graph::new(3, vec![(0, 1), (1, 0), (0, 1)]);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.degree(0), 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_edge_out_of_range_panics() {
    Graph::new(2, vec![(0, 2)]);
}

#[test]
#[should_panic(expected = "self-loop")]
fn test_self_loop_panics() {
    Graph::new(2, vec![(1, 1)]);
}

#[test]
fn test_builders() {
    let path = Graph::path(4);
    assert_eq!(path.num_edges(), 3);
    assert_eq!(path.degree(0), 1);
    assert_eq!(path.degree(1), 2);

    let complete = Graph::complete(5);
    assert_eq!(complete.num_edges(), 10);
    assert_eq!(complete.degree(3), 4);

    let star = Graph::star(5);
    assert_eq!(star.num_edges(), 4);
    assert_eq!(star.degree(0), 4);
    assert_eq!(star.degree(4), 1);

    assert_eq!(Graph::cycle(3), Graph::complete(3));
    assert_eq!(Graph::empty(7).num_edges(), 0);
}

#[test]
fn test_detach_attach_roundtrip() {
    let original = Graph::star(5);
    let mut graph = original.clone();

    let detached = graph.detach(0);
    let expected: BTreeSet<VertexId> = (1..5).collect();
    assert_eq!(detached, expected);
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(graph.degree(0), 0);
    assert_eq!(graph.degree(1), 0);

    graph.attach(0, detached);
    assert_eq!(graph, original);
}

#[test]
fn test_detach_leaf() {
    let mut graph = Graph::path(3);
    let detached = graph.detach(2);
    assert_eq!(detached.len(), 1);
    assert!(!graph.has_edge(1, 2));
    assert!(graph.has_edge(0, 1));
}

#[test]
fn test_check_coverage() {
    let mut graph = Graph::complete(3);
    assert_eq!(
        graph.check_coverage(&[0, 1]),
        Coverage { size: 2, covered: 3 }
    );
    assert_eq!(
        graph.check_coverage(&[0]),
        Coverage { size: 1, covered: 2 }
    );
    // Markers reset between audits, so counts do not accumulate.
    assert_eq!(
        graph.check_coverage(&[0]),
        Coverage { size: 1, covered: 2 }
    );
    assert_eq!(
        graph.check_coverage(&[]),
        Coverage { size: 0, covered: 0 }
    );
}

#[test]
fn test_equality_ignores_markers() {
    let graph = Graph::cycle(4);
    let mut audited = graph.clone();
    audited.check_coverage(&[0, 2]);
    assert_eq!(graph, audited);
}

#[test]
fn test_json_roundtrip() {
    let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3), (0, 3)]);
    let json = to_json(&graph).unwrap();
    let restored: Graph = from_json(&json).unwrap();
    assert_eq!(graph, restored);
}

#[test]
fn test_json_rejects_bad_edges() {
    let result: crate::error::Result<Graph> = from_json(r#"{"num_vertices":2,"edges":[[0,5]]}"#);
    assert!(result.is_err());
    let result: crate::error::Result<Graph> = from_json(r#"{"num_vertices":2,"edges":[[1,1]]}"#);
    assert!(result.is_err());
}
