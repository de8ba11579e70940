//! The four vertex cover solvers.

mod branch_and_bound;
mod cover_search;
mod heuristics;
mod mis_search;

pub use branch_and_bound::BranchAndBound;
pub use cover_search::CoverSearch;
pub use heuristics::{
    best_constructive, degree_one_priority, degree_one_retarget, maximal_matching,
    min_degree_pairs, Approx,
};
pub use mis_search::MisSearch;

use crate::error::Result;
use crate::topology::{Graph, VertexId};
use crate::trace::Trace;
use std::io::Write;

/// Trait for vertex cover solvers.
pub trait Solver {
    /// Tag used in output file names.
    fn tag(&self) -> &'static str;

    /// Runs on `graph`, recording each new best cover size in `trace`.
    ///
    /// A solver that mutates the graph restores it before returning. On
    /// wall-clock expiry the best-so-far cover is returned; a timeout is
    /// never an error.
    fn solve<W: Write>(&mut self, graph: &mut Graph, trace: &mut Trace<W>)
        -> Result<Vec<VertexId>>;
}
