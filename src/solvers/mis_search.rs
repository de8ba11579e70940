//! Independent-set-space iterated local search with 2-improvement (LS2).

use super::heuristics::best_constructive;
use super::Solver;
use crate::error::Result;
use crate::topology::{Graph, VertexId};
use crate::trace::Trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngExt, SeedableRng};
use std::collections::BTreeSet;
use std::io::Write;
use std::time::Duration;

/// Iterated local search over independent sets (LS2).
///
/// Works in the complement space: growing an independent set S shrinks
/// the implied cover `V \ S`. Each round perturbs S by ejecting a few
/// members and re-inserting free vertices near the remaining solution,
/// then exhausts (1,2)-swaps. Improvements are always accepted; after an
/// accept the solution is protected against downhill replacement for |S|
/// rounds, after which worse candidates are accepted with a probability
/// that shrinks with the quality gap.
pub struct MisSearch {
    cutoff: Duration,
    seed: u64,
}

impl MisSearch {
    /// Creates a solver with the given wall-clock cutoff and RNG seed.
    pub fn new(cutoff: Duration, seed: u64) -> Self {
        MisSearch { cutoff, seed }
    }
}

impl Solver for MisSearch {
    fn tag(&self) -> &'static str {
        "LS2"
    }

    fn solve<W: Write>(
        &mut self,
        graph: &mut Graph,
        trace: &mut Trace<W>,
    ) -> Result<Vec<VertexId>> {
        let num_vertices = graph.num_vertices();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let start = best_constructive(graph);
        let mut current = SetState::from_cover(graph, &start);
        let mut opt = current.members.clone();

        trace.record(num_vertices - opt.len())?;

        if num_vertices > 0 {
            // Tighten the starting point before the walk.
            two_improvement(graph, &mut current);
            let mut protection = current.members.len();

            while trace.elapsed() <= self.cutoff {
                let mut next = perturb(graph, &current, protection, &mut rng);
                two_improvement(graph, &mut next);

                if next.members.len() > current.members.len() {
                    current = next;
                    protection = current.members.len();
                    if current.members.len() > opt.len() {
                        opt = current.members.clone();
                        trace.record(num_vertices - opt.len())?;
                    }
                } else if protection > 0 {
                    protection -= 1;
                } else {
                    let gap = (current.members.len() - next.members.len()) as f64;
                    // A candidate above the best-so-far cannot happen on
                    // the downhill path unless the initial tightening ran
                    // ahead of `opt`; treat it as probability zero.
                    let accept = if next.members.len() > opt.len() {
                        0.0
                    } else {
                        1.0 / (1.0 + gap * (opt.len() - next.members.len()) as f64)
                    };
                    if rng.random::<f64>() <= accept {
                        current = next;
                        protection = current.members.len();
                    }
                }
            }
        }

        Ok((0..num_vertices).filter(|v| !opt.contains(v)).collect())
    }
}

/// An independent set with its tightness and free-vertex bookkeeping.
///
/// For a vertex u outside the set, `tightness[u]` counts its neighbors
/// inside; `free` holds exactly the outside vertices of tightness zero,
/// which can join without breaking independence.
#[derive(Debug, Clone)]
struct SetState {
    members: BTreeSet<VertexId>,
    free: BTreeSet<VertexId>,
    tightness: Vec<i32>,
}

impl SetState {
    /// Builds the complement of a cover along with its bookkeeping.
    fn from_cover(graph: &Graph, cover: &[VertexId]) -> Self {
        let num_vertices = graph.num_vertices();
        let mut members: BTreeSet<VertexId> = (0..num_vertices).collect();
        for &v in cover {
            members.remove(&v);
        }
        let mut tightness = vec![0; num_vertices];
        for &i in &members {
            for &j in graph.neighbors(i) {
                tightness[j] += 1;
            }
        }
        let free = (0..num_vertices)
            .filter(|v| tightness[*v] == 0 && !members.contains(v))
            .collect();
        SetState {
            members,
            free,
            tightness,
        }
    }

    fn add(&mut self, graph: &Graph, i: VertexId) {
        self.members.insert(i);
        self.free.remove(&i);
        for &j in graph.neighbors(i) {
            self.tightness[j] += 1;
            if self.tightness[j] == 1 {
                self.free.remove(&j);
            }
        }
    }

    fn remove(&mut self, graph: &Graph, i: VertexId) {
        self.members.remove(&i);
        self.free.insert(i);
        for &j in graph.neighbors(i) {
            self.tightness[j] -= 1;
            if self.tightness[j] == 0 {
                self.free.insert(j);
            }
        }
    }
}

/// Ejects `k` random members, then re-inserts one random free vertex and
/// up to `k - 1` free vertices that sit at distance two from the
/// remaining solution (a neighbor of theirs is still tight).
///
/// `k` is 1 unless protection has run out and a `0.5/|S|` coin lands, in
/// which case a halving cascade can push it higher, capped at |S|.
fn perturb(graph: &Graph, current: &SetState, protection: usize, rng: &mut StdRng) -> SetState {
    let mut next = current.clone();

    let mut k = 1usize;
    if protection == 0 && rng.random::<f64>() <= 0.5 / current.members.len() as f64 {
        let roll = rng.random::<f64>();
        let mut chance = 1.0;
        while roll <= chance {
            k += 1;
            chance *= 0.5;
        }
        k = k.min(current.members.len());
    }

    let mut pool: Vec<VertexId> = current.members.iter().copied().collect();
    pool.shuffle(rng);
    for &x in pool.iter().take(k) {
        next.remove(graph, x);
    }

    if !next.free.is_empty() {
        let offset = rng.random_range(0..next.free.len());
        if let Some(&f) = next.free.iter().nth(offset) {
            next.add(graph, f);
        }
    }
    for _ in 1..k {
        if next.free.is_empty() {
            break;
        }
        let candidate = next
            .free
            .iter()
            .copied()
            .find(|&u| graph.neighbors(u).iter().any(|&v| next.tightness[v] != 0));
        match candidate {
            Some(u) => next.add(graph, u),
            None => break,
        }
    }

    next
}

/// Exhausts (1,2)-swaps: replaces a member x with two non-adjacent
/// 1-tight neighbors of x, growing the set by one each time.
///
/// Every member starts as a candidate; a performed swap requeues the two
/// newcomers and, for each neighbor of x left 1-tight by its removal,
/// that neighbor's unique remaining solution neighbor.
fn two_improvement(graph: &Graph, state: &mut SetState) {
    let mut candidates = state.members.clone();

    while let Some(&x) = candidates.iter().next() {
        candidates.remove(&x);
        let neighs: Vec<VertexId> = graph.neighbors(x).iter().copied().collect();
        'outer: for (idx, &n1) in neighs.iter().enumerate() {
            if state.tightness[n1] != 1 {
                continue;
            }
            for &n2 in &neighs[idx + 1..] {
                if state.tightness[n2] != 1 || graph.has_edge(n1, n2) {
                    continue;
                }
                state.remove(graph, x);
                state.add(graph, n1);
                state.add(graph, n2);
                candidates.insert(n1);
                candidates.insert(n2);
                for &xn in graph.neighbors(x) {
                    if state.tightness[xn] == 1 {
                        for &xnn in graph.neighbors(xn) {
                            if xnn != n1 && xnn != n2 && state.members.contains(&xnn) {
                                candidates.insert(xnn);
                            }
                        }
                    }
                }
                break 'outer;
            }
        }
    }
}

#[cfg(test)]
#[path = "../unit_tests/solvers/mis_search.rs"]
mod tests;
