//! Graph storage shared by all solvers.

mod graph;

pub use graph::{Coverage, Edge, Graph, VertexId, MAX_VERTICES};
