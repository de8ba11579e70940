//! Mutable adjacency store and canonical edge keys.
//!
//! All four solvers share this representation. The branch-and-bound solver
//! additionally uses it as scratch space: [`Graph::detach`] removes a
//! vertex's incident edges in place and [`Graph::attach`] puts them back,
//! leaving the graph structurally identical after every backtrack.
//!
//! Neighborhoods are ordered sets so that "first" and "nth element" are
//! stable across runs; this is what makes equal-seed searches reproducible.

use crate::error::VcError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Dense vertex identifier in `[0, num_vertices)`.
pub type VertexId = usize;

/// Largest supported vertex count: ids must fit in half an [`Edge`] key.
pub const MAX_VERTICES: u64 = 1 << 32;

/// Canonical key for an undirected edge.
///
/// The smaller endpoint sits in the low 32 bits, the larger in the high
/// bits, so each unordered pair maps to exactly one key and keys order
/// lexicographically by (min, max).
///
/// # Example
///
/// ```
/// use minvc::topology::Edge;
///
/// assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
/// assert_eq!(Edge::new(3, 1).endpoints(), (1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(u64);

impl Edge {
    /// Canonicalize an unordered vertex pair into its key.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Edge(lo as u64 | (hi as u64) << 32)
    }

    /// The (min, max) endpoints.
    pub fn endpoints(self) -> (VertexId, VertexId) {
        (
            (self.0 & u64::from(u32::MAX)) as VertexId,
            (self.0 >> 32) as VertexId,
        )
    }
}

/// Result of a coverage audit: the candidate size and how many distinct
/// edges it touches. A valid cover touches every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub size: usize,
    pub covered: usize,
}

/// A simple undirected graph over dense vertex ids.
///
/// Stores one ordered neighbor set per vertex plus a map from canonical
/// edge keys to a boolean marker. The marker is scratch for
/// [`check_coverage`](Self::check_coverage) and carries no structural
/// meaning; equality and serialization ignore it.
///
/// # Example
///
/// ```
/// use minvc::topology::Graph;
///
/// let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(graph.num_vertices(), 4);
/// assert_eq!(graph.num_edges(), 3);
/// assert!(graph.has_edge(0, 1));
/// assert!(!graph.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    neighbors: Vec<BTreeSet<VertexId>>,
    edges: HashMap<Edge, bool>,
}

impl Graph {
    /// Creates a graph with the given vertices and edges.
    ///
    /// Redundant listings of the same unordered pair collapse onto one
    /// canonical key.
    ///
    /// # Panics
    ///
    /// Panics if any edge references a vertex index >= `num_vertices` or
    /// is a self-loop.
    pub fn new(num_vertices: usize, edges: Vec<(VertexId, VertexId)>) -> Self {
        let mut graph = Graph {
            neighbors: vec![BTreeSet::new(); num_vertices],
            edges: HashMap::with_capacity(edges.len()),
        };
        for (u, v) in edges {
            assert!(
                u < num_vertices && v < num_vertices,
                "edge ({}, {}) is out of range for {} vertices",
                u,
                v,
                num_vertices
            );
            assert!(u != v, "self-loop on vertex {}", u);
            graph.neighbors[u].insert(v);
            graph.neighbors[v].insert(u);
            graph.edges.insert(Edge::new(u, v), false);
        }
        graph
    }

    /// Graph with `num_vertices` vertices and no edges at all.
    pub fn empty(num_vertices: usize) -> Self {
        Self::new(num_vertices, Vec::new())
    }

    /// Complete graph: one edge for every vertex pair.
    pub fn complete(num_vertices: usize) -> Self {
        let edges = (0..num_vertices)
            .flat_map(|i| (i + 1..num_vertices).map(move |j| (i, j)))
            .collect();
        Self::new(num_vertices, edges)
    }

    /// Path joining consecutive vertex ids.
    pub fn path(num_vertices: usize) -> Self {
        let edges = (1..num_vertices).map(|i| (i - 1, i)).collect();
        Self::new(num_vertices, edges)
    }

    /// Cycle through the vertices in id order; with fewer than three
    /// vertices it degrades to a path.
    pub fn cycle(num_vertices: usize) -> Self {
        if num_vertices < 3 {
            return Self::path(num_vertices);
        }
        let edges = (0..num_vertices)
            .map(|i| (i, (i + 1) % num_vertices))
            .collect();
        Self::new(num_vertices, edges)
    }

    /// Star with vertex 0 as the hub and every other vertex a leaf.
    pub fn star(num_vertices: usize) -> Self {
        let edges = (1..num_vertices).map(|leaf| (0, leaf)).collect();
        Self::new(num_vertices, edges)
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the degree of vertex `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors[v].len()
    }

    /// Returns the ordered neighbor set of vertex `v`.
    pub fn neighbors(&self, v: VertexId) -> &BTreeSet<VertexId> {
        &self.neighbors[v]
    }

    /// Per-vertex neighbor sets, indexed by id. Heuristics clone this as
    /// their working adjacency so the caller's graph is unaffected.
    pub fn adjacency(&self) -> &[BTreeSet<VertexId>] {
        &self.neighbors
    }

    /// Checks whether an edge exists between `u` and `v`.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edges.contains_key(&Edge::new(u, v))
    }

    /// Iterates over all edge keys in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.keys().copied()
    }

    /// Removes every edge incident to `u`, returning the detached
    /// neighborhood for a later [`attach`](Self::attach).
    ///
    /// `u` keeps its slot so vertex ids stay dense.
    pub fn detach(&mut self, u: VertexId) -> BTreeSet<VertexId> {
        let neighs = std::mem::take(&mut self.neighbors[u]);
        for &v in &neighs {
            self.edges.remove(&Edge::new(u, v));
            self.neighbors[v].remove(&u);
        }
        neighs
    }

    /// Reverses a [`detach`](Self::detach) with the set it returned.
    pub fn attach(&mut self, u: VertexId, neighs: BTreeSet<VertexId>) {
        for &v in &neighs {
            self.edges.insert(Edge::new(u, v), false);
            self.neighbors[v].insert(u);
        }
        self.neighbors[u] = neighs;
    }

    /// One-pass audit of a candidate cover.
    ///
    /// Resets all edge markers, then marks each edge incident to a cover
    /// member exactly once. The cover is valid iff `covered` equals
    /// [`num_edges`](Self::num_edges).
    pub fn check_coverage(&mut self, cover: &[VertexId]) -> Coverage {
        let Graph { neighbors, edges } = self;
        for marked in edges.values_mut() {
            *marked = false;
        }
        let mut covered = 0;
        for &u in cover {
            for &v in &neighbors[u] {
                if let Some(marked) = edges.get_mut(&Edge::new(u, v)) {
                    if !*marked {
                        *marked = true;
                        covered += 1;
                    }
                }
            }
        }
        Coverage {
            size: cover.len(),
            covered,
        }
    }
}

/// Structural equality: audit markers are scratch and do not participate.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.neighbors == other.neighbors
            && self.edges.len() == other.edges.len()
            && self.edges.keys().all(|e| other.edges.contains_key(e))
    }
}

impl Eq for Graph {}

/// Serialized form: a vertex count and a sorted edge list.
#[derive(Serialize, Deserialize)]
struct GraphData {
    num_vertices: usize,
    edges: Vec<(VertexId, VertexId)>,
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        let mut edges: Vec<_> = graph.edges.keys().map(|e| e.endpoints()).collect();
        edges.sort_unstable();
        GraphData {
            num_vertices: graph.neighbors.len(),
            edges,
        }
    }
}

impl TryFrom<GraphData> for Graph {
    type Error = VcError;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        if data.num_vertices as u64 > MAX_VERTICES {
            return Err(VcError::SizeExceeded {
                vertices: data.num_vertices as u64,
                max: MAX_VERTICES,
            });
        }
        for &(u, v) in &data.edges {
            if u >= data.num_vertices || v >= data.num_vertices {
                return Err(VcError::InvalidFormat(format!(
                    "edge ({}, {}) is out of range for {} vertices",
                    u, v, data.num_vertices
                )));
            }
            if u == v {
                return Err(VcError::InvalidFormat(format!("self-loop on vertex {}", u)));
            }
        }
        Ok(Graph::new(data.num_vertices, data.edges))
    }
}

#[cfg(test)]
#[path = "../unit_tests/topology/graph.rs"]
mod tests;
