use super::*;
use crate::error::VcError;
use std::fs;

fn write_tmp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_read_instance_triangle() {
    let path = write_tmp("minvc_io_triangle.graph", "3 3 0\n2 3\n1 3\n1 2\n");
    let graph = read_instance(&path).unwrap();
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 3);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(0, 2));
    assert!(graph.has_edge(1, 2));
    fs::remove_file(path).ok();
}

#[test]
fn test_read_instance_isolated_vertex() {
    // Vertex 3 has an empty adjacency line.
    let path = write_tmp("minvc_io_isolated.graph", "3 1 0\n2\n1\n\n");
    let graph = read_instance(&path).unwrap();
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.degree(2), 0);
    fs::remove_file(path).ok();
}

#[test]
fn test_read_instance_truncated_tail() {
    // A missing final line means the last vertex is isolated.
    let path = write_tmp("minvc_io_truncated.graph", "3 1 0\n2\n1\n");
    let graph = read_instance(&path).unwrap();
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 1);
    fs::remove_file(path).ok();
}

#[test]
fn test_read_instance_missing_file() {
    let result = read_instance("/nonexistent/minvc.graph");
    assert!(matches!(result, Err(VcError::Input { .. })));
}

#[test]
fn test_read_instance_bad_header() {
    let path = write_tmp("minvc_io_bad_header.graph", "three 3 0\n");
    assert!(matches!(
        read_instance(&path),
        Err(VcError::InvalidFormat(_))
    ));
    let path = write_tmp("minvc_io_short_header.graph", "3 3\n");
    assert!(matches!(
        read_instance(&path),
        Err(VcError::InvalidFormat(_))
    ));
    fs::remove_file(path).ok();
}

#[test]
fn test_read_instance_bad_neighbor() {
    let path = write_tmp("minvc_io_bad_neighbor.graph", "2 1 0\nx\n1\n");
    assert!(matches!(
        read_instance(&path),
        Err(VcError::InvalidFormat(_))
    ));
    let path = write_tmp("minvc_io_zero_neighbor.graph", "2 1 0\n0\n1\n");
    assert!(matches!(
        read_instance(&path),
        Err(VcError::InvalidFormat(_))
    ));
    let path = write_tmp("minvc_io_big_neighbor.graph", "2 1 0\n3\n1\n");
    assert!(matches!(
        read_instance(&path),
        Err(VcError::InvalidFormat(_))
    ));
    fs::remove_file(path).ok();
}

#[test]
fn test_read_instance_size_exceeded() {
    let path = write_tmp("minvc_io_huge.graph", "4294967297 0 0\n");
    assert!(matches!(
        read_instance(&path),
        Err(VcError::SizeExceeded { .. })
    ));
    fs::remove_file(path).ok();
}

#[test]
fn test_instance_stem() {
    assert_eq!(instance_stem("data/power.graph"), "power");
    assert_eq!(instance_stem("/a/b/jazz.graph"), "jazz");
    assert_eq!(instance_stem("tiny"), "");
}

#[test]
fn test_write_solution_format() {
    let path = std::env::temp_dir().join("minvc_io_solution.sol");
    write_solution(&path, &[0, 2]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "2\n1,3");
    write_solution(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "0\n");
    fs::remove_file(path).ok();
}

#[test]
fn test_json_file_roundtrip() {
    let graph = Graph::path(4);
    let path = std::env::temp_dir().join("minvc_io_graph.json");
    write_json(&graph, &path).unwrap();
    let restored: Graph = read_json(&path).unwrap();
    assert_eq!(graph, restored);
    fs::remove_file(path).ok();
}
