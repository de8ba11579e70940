//! Constructive cover builders.
//!
//! Three independent heuristics plus a weak pair-picker that exists for
//! its lower bound, not its covers. All of them work on a cloned
//! adjacency (or only ever read the graph), so the caller's graph is
//! untouched.

use super::Solver;
use crate::error::Result;
use crate::topology::{Edge, Graph, VertexId};
use crate::trace::Trace;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::io::Write;

/// Repeatedly covers a minimum-degree vertex together with its
/// minimum-degree neighbor.
///
/// Deliberately weak: pairing up low-degree vertices wastes cover slots,
/// and a bigger 2-approximation-family cover H gives a tighter
/// `|H|/2 <= OPT` bound. The branch-and-bound solver uses exactly that.
pub fn min_degree_pairs(graph: &Graph) -> Vec<VertexId> {
    let mut cover = Vec::new();
    let mut vertices = graph.adjacency().to_vec();

    loop {
        let mut pick = None;
        for (i, neighs) in vertices.iter().enumerate() {
            if neighs.is_empty() {
                continue;
            }
            match pick {
                None => pick = Some(i),
                Some(v) if vertices[v].len() > neighs.len() => pick = Some(i),
                _ => {}
            }
        }
        let Some(v) = pick else { break };
        let Some(&m) = vertices[v].iter().min_by_key(|&&j| vertices[j].len()) else {
            break;
        };

        for i in [v, m] {
            cover.push(i);
            for j in std::mem::take(&mut vertices[i]) {
                vertices[j].remove(&i);
            }
        }
    }

    cover
}

/// Textbook 2-approximation: take any uncovered edge, add both
/// endpoints, discard every edge they touch.
///
/// The chosen edges form a maximal matching, so the cover is at most
/// twice the optimum.
pub fn maximal_matching(graph: &Graph) -> Vec<VertexId> {
    let mut cover = Vec::new();
    let mut uncovered: BTreeSet<Edge> = graph.edges().collect();

    while let Some(&e) = uncovered.iter().next() {
        uncovered.remove(&e);
        let (u, v) = e.endpoints();
        cover.push(u);
        cover.push(v);
        for &j in graph.neighbors(u) {
            uncovered.remove(&Edge::new(u, j));
        }
        for &j in graph.neighbors(v) {
            uncovered.remove(&Edge::new(v, j));
        }
    }

    cover
}

/// Priority variant that retargets each degree-1 edge onto the edge from
/// its non-leaf endpoint to that endpoint's maximum-degree neighbor.
pub fn degree_one_retarget(graph: &Graph) -> Vec<VertexId> {
    priority_cover(graph, true)
}

/// Priority variant that takes degree-1 edges as-is and lets the
/// isolation rule drop the leaf endpoint.
pub fn degree_one_priority(graph: &Graph) -> Vec<VertexId> {
    priority_cover(graph, false)
}

/// Shared core of the two priority heuristics.
///
/// Uncovered edges live in two disjoint queues: *priority* edges have an
/// endpoint whose working degree is 1, the rest are *regular*. Covering
/// an endpoint shrinks its neighbors' working degrees and promotes their
/// last regular edge to priority.
fn priority_cover(graph: &Graph, retarget: bool) -> Vec<VertexId> {
    let mut cover = Vec::new();
    let mut vertices = graph.adjacency().to_vec();
    let mut regular = BTreeSet::new();
    let mut priority = BTreeSet::new();
    for e in graph.edges() {
        let (u, v) = e.endpoints();
        if graph.degree(u) == 1 || graph.degree(v) == 1 {
            priority.insert(e);
        } else {
            regular.insert(e);
        }
    }

    while !regular.is_empty() || !priority.is_empty() {
        let e = if let Some(&e) = priority.iter().next() {
            priority.remove(&e);
            if retarget {
                retarget_edge(&vertices, e)
            } else {
                e
            }
        } else {
            let Some(&e) = regular.iter().next() else { break };
            regular.remove(&e);
            e
        };

        // Isolation rule: a leaf edge only needs one endpoint.
        let (u, v) = e.endpoints();
        if vertices[u].len() > 1 {
            cover.push(u);
        }
        if vertices[v].len() > 1 || vertices[u].len() == 1 {
            cover.push(v);
        }

        for x in [u, v] {
            for &j in graph.neighbors(x) {
                let incident = Edge::new(x, j);
                regular.remove(&incident);
                priority.remove(&incident);
                vertices[j].remove(&x);
                if vertices[j].len() == 1 {
                    if let Some(&k) = vertices[j].iter().next() {
                        let promoted = Edge::new(j, k);
                        if regular.remove(&promoted) {
                            priority.insert(promoted);
                        }
                    }
                }
            }
        }
    }

    cover
}

/// Replaces a priority edge whose one endpoint is a leaf with the edge
/// from the other endpoint to its max-degree neighbor.
fn retarget_edge(vertices: &[BTreeSet<VertexId>], e: Edge) -> Edge {
    let (u, v) = e.endpoints();
    let max_neighbor = |x: VertexId| {
        vertices[x]
            .iter()
            .max_by_key(|&&j| (vertices[j].len(), Reverse(j)))
            .copied()
    };
    if vertices[u].len() == 1 {
        match max_neighbor(v) {
            Some(m) => Edge::new(v, m),
            None => e,
        }
    } else if vertices[v].len() == 1 {
        match max_neighbor(u) {
            Some(m) => Edge::new(u, m),
            None => e,
        }
    } else {
        e
    }
}

/// Runs all three constructive heuristics and keeps the smallest cover.
pub fn best_constructive(graph: &Graph) -> Vec<VertexId> {
    let mut best = maximal_matching(graph);
    for alt in [degree_one_retarget(graph), degree_one_priority(graph)] {
        if alt.len() < best.len() {
            best = alt;
        }
    }
    best
}

/// Constructive-only solver: reports the degree-one-priority cover with
/// a single timing line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Approx;

impl Solver for Approx {
    fn tag(&self) -> &'static str {
        "Approx"
    }

    fn solve<W: Write>(
        &mut self,
        graph: &mut Graph,
        trace: &mut Trace<W>,
    ) -> Result<Vec<VertexId>> {
        let cover = degree_one_priority(graph);
        trace.record(cover.len())?;
        Ok(cover)
    }
}

#[cfg(test)]
#[path = "../unit_tests/solvers/heuristics.rs"]
mod tests;
