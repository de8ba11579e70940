//! Exact search with in-place edge removal and lower-bound pruning.

use super::heuristics::min_degree_pairs;
use super::Solver;
use crate::error::Result;
use crate::topology::{Graph, VertexId};
use crate::trace::Trace;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::io::Write;
use std::time::Duration;

/// Branch-and-bound solver.
///
/// Branches on the highest-degree candidate vertex. The include case
/// detaches the vertex's neighborhood from the shared graph and puts it
/// back on backtrack, so the graph is structurally unchanged after every
/// recursion and after `solve` returns. Candidates are the vertices of
/// initial degree greater than one; degree-0 vertices cover nothing and
/// a residual leaf is handled through its neighbor.
///
/// The lower bound divides the weak pair heuristic's cover size by two:
/// any 2-approximation-family cover H satisfies `|H|/2 <= OPT`, and the
/// pair picker's *larger* covers make that bound tighter than the
/// matching heuristic's would be.
#[derive(Debug, Clone)]
pub struct BranchAndBound {
    cutoff: Duration,
}

impl BranchAndBound {
    /// Creates a solver with the given wall-clock cutoff.
    pub fn new(cutoff: Duration) -> Self {
        BranchAndBound { cutoff }
    }
}

impl Solver for BranchAndBound {
    fn tag(&self) -> &'static str {
        "BnB"
    }

    fn solve<W: Write>(
        &mut self,
        graph: &mut Graph,
        trace: &mut Trace<W>,
    ) -> Result<Vec<VertexId>> {
        let num_vertices = graph.num_vertices();
        let mut search = Search {
            uncovered: graph.num_edges(),
            candidates: (0..num_vertices).filter(|&v| graph.degree(v) > 1).collect(),
            soln: Vec::new(),
            opt: (0..num_vertices).collect(),
            cutoff: self.cutoff,
            graph,
            trace,
        };
        search.trace.record(search.opt.len())?;
        search.branch()?;
        Ok(search.opt)
    }
}

struct Search<'a, W: Write> {
    graph: &'a mut Graph,
    /// Vertices still eligible to branch on.
    candidates: BTreeSet<VertexId>,
    /// Edges not yet covered by `soln`.
    uncovered: usize,
    soln: Vec<VertexId>,
    opt: Vec<VertexId>,
    cutoff: Duration,
    trace: &'a mut Trace<W>,
}

impl<W: Write> Search<'_, W> {
    fn branch(&mut self) -> Result<()> {
        if self.trace.elapsed() > self.cutoff {
            return Ok(());
        }
        if self.uncovered == 0 {
            if self.soln.len() < self.opt.len() {
                self.opt = self.soln.clone();
                self.trace.record(self.opt.len())?;
            }
            return Ok(());
        }

        let low = min_degree_pairs(self.graph).len() / 2;
        if self.soln.len() + low >= self.opt.len() || low > self.candidates.len() {
            return Ok(());
        }

        // Highest residual degree removes the most edges per include;
        // the smallest id wins ties.
        let Some(&u) = self
            .candidates
            .iter()
            .max_by_key(|&&v| (self.graph.degree(v), Reverse(v)))
        else {
            return Ok(());
        };
        self.candidates.remove(&u);

        // Include u, unless it covers nothing or a residual leaf is
        // dominated by its sole higher-degree neighbor.
        let dominated = self.graph.degree(u) == 1
            && self
                .graph
                .neighbors(u)
                .iter()
                .next()
                .is_some_and(|&v| self.graph.degree(v) > 1);
        if self.graph.degree(u) > 0 && !dominated {
            let detached = self.graph.detach(u);
            self.uncovered -= detached.len();
            self.soln.push(u);
            self.branch()?;
            self.soln.pop();
            self.uncovered += detached.len();
            self.graph.attach(u, detached);
        }

        // Exclude u.
        self.branch()?;

        self.candidates.insert(u);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../unit_tests/solvers/branch_and_bound.rs"]
mod tests;
