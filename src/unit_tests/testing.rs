use super::*;

#[test]
fn test_is_cover() {
    let graph = Graph::path(4);
    assert!(is_cover(&graph, &[1, 2]));
    assert!(is_cover(&graph, &[0, 1, 2, 3]));
    assert!(!is_cover(&graph, &[1]));
    assert!(!is_cover(&graph, &[]));
    assert!(is_cover(&Graph::empty(3), &[]));
}

#[test]
fn test_exhaustive_min_cover() {
    assert_eq!(exhaustive_min_cover(&Graph::complete(3)).len(), 2);
    assert_eq!(exhaustive_min_cover(&Graph::star(5)), vec![0]);
    assert_eq!(exhaustive_min_cover(&Graph::path(4)).len(), 2);
    assert_eq!(exhaustive_min_cover(&Graph::complete(5)).len(), 4);
    assert!(exhaustive_min_cover(&Graph::empty(3)).is_empty());
}

#[test]
fn test_exhaustive_min_cover_is_valid() {
    for graph in [Graph::cycle(7), Graph::path(6), Graph::complete(4)] {
        let cover = exhaustive_min_cover(&graph);
        assert!(is_cover(&graph, &cover));
    }
}
