//! # minvc
//!
//! Exact and heuristic solvers for the minimum vertex cover problem:
//! given a simple undirected graph, find a smallest vertex subset that
//! touches every edge.
//!
//! The problem is NP-hard, so the crate exposes four solvers that trade
//! runtime for quality behind one [`Solver`] trait:
//!
//! - **Approx**: constructive heuristics, including the textbook
//!   maximal-matching 2-approximation and two degree-1-priority variants
//! - **BnB**: exact branch-and-bound with reversible in-place graph
//!   mutation and a weak-heuristic lower bound
//! - **LS1**: stochastic swap search in the cover space guided by edge
//!   weights and a taboo pair
//! - **LS2**: iterated local search over the complementary independent
//!   set with (1,2)-swaps and a protection counter
//!
//! ## Example
//!
//! ```
//! use minvc::prelude::*;
//! use std::time::Duration;
//!
//! let mut graph = Graph::cycle(5);
//! let mut trace = Trace::new(Vec::new());
//!
//! let mut solver = BranchAndBound::new(Duration::from_secs(5));
//! let cover = solver.solve(&mut graph, &mut trace).unwrap();
//!
//! // A 5-cycle needs three vertices to cover all five edges.
//! assert_eq!(cover.len(), 3);
//! ```

pub mod error;
pub mod io;
pub mod solvers;
pub mod testing;
pub mod topology;
pub mod trace;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, VcError};
    pub use crate::solvers::{
        best_constructive, degree_one_priority, degree_one_retarget, maximal_matching,
        min_degree_pairs, Approx, BranchAndBound, CoverSearch, MisSearch, Solver,
    };
    pub use crate::topology::{Coverage, Edge, Graph, VertexId};
    pub use crate::trace::Trace;
}

// Re-export commonly used items at crate root
pub use error::{Result, VcError};
pub use solvers::{Approx, BranchAndBound, CoverSearch, MisSearch, Solver};
pub use topology::{Coverage, Edge, Graph, VertexId};
pub use trace::Trace;
