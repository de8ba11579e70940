//! Shared test support: a cover predicate and an exhaustive oracle.

use crate::topology::{Graph, VertexId};
use std::collections::BTreeSet;

/// Checks whether `cover` touches every edge of `graph`.
pub fn is_cover(graph: &Graph, cover: &[VertexId]) -> bool {
    let members: BTreeSet<VertexId> = cover.iter().copied().collect();
    graph.edges().all(|e| {
        let (u, v) = e.endpoints();
        members.contains(&u) || members.contains(&v)
    })
}

/// Exhaustive minimum vertex cover, used as a test oracle.
///
/// Scans every vertex subset, so it is only for small graphs.
///
/// # Panics
///
/// Panics if the graph has more than 20 vertices.
pub fn exhaustive_min_cover(graph: &Graph) -> Vec<VertexId> {
    let n = graph.num_vertices();
    assert!(n <= 20, "exhaustive search needs 2^n subsets");
    let edges: Vec<(VertexId, VertexId)> = graph.edges().map(|e| e.endpoints()).collect();

    let mut best = None;
    for mask in 0u32..1u32 << n {
        let covers = edges
            .iter()
            .all(|&(u, v)| mask >> u & 1 == 1 || mask >> v & 1 == 1);
        if covers && best.is_none_or(|b: u32| mask.count_ones() < b.count_ones()) {
            best = Some(mask);
        }
    }
    let best = best.unwrap_or(0);
    (0..n).filter(|&v| best >> v & 1 == 1).collect()
}

#[cfg(test)]
#[path = "unit_tests/testing.rs"]
mod tests;
