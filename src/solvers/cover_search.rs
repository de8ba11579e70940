//! Cover-space stochastic search with edge weighting (LS1).

use super::heuristics::best_constructive;
use super::Solver;
use crate::error::Result;
use crate::topology::{Edge, Graph, VertexId};
use crate::trace::Trace;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::time::Duration;

const INITIAL_EDGE_WEIGHT: f64 = 0.05;

/// Iterated swap search over the cover space (LS1).
///
/// Starting from the best constructive cover, the search alternates two
/// phases until the cutoff: *drop* random cover vertices until an edge is
/// exposed, then *swap* one endpoint of a random exposed edge in for the
/// cover vertex whose weighted usefulness is lowest. Every edge still
/// exposed at the end of an iteration gains weight, steering later swaps
/// toward long-uncovered edges. The most recent swap pair is taboo, and
/// weights reset whenever a fresh drop phase exposes its first edge.
pub struct CoverSearch {
    cutoff: Duration,
    seed: u64,
}

impl CoverSearch {
    /// Creates a solver with the given wall-clock cutoff and RNG seed.
    pub fn new(cutoff: Duration, seed: u64) -> Self {
        CoverSearch { cutoff, seed }
    }
}

impl Solver for CoverSearch {
    fn tag(&self) -> &'static str {
        "LS1"
    }

    fn solve<W: Write>(
        &mut self,
        graph: &mut Graph,
        trace: &mut Trace<W>,
    ) -> Result<Vec<VertexId>> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut min_cover: BTreeSet<VertexId> = best_constructive(graph).into_iter().collect();
        let mut cover = min_cover.clone();

        let mut node_weight = vec![0.0f64; graph.num_vertices()];
        let mut edge_weight: BTreeMap<Edge, f64> =
            graph.edges().map(|e| (e, INITIAL_EDGE_WEIGHT)).collect();
        let mut taboo = Edge::new(0, 0);
        let mut exposed: BTreeSet<Edge> = BTreeSet::new();

        trace.record(min_cover.len())?;
        if graph.num_edges() == 0 {
            return Ok(min_cover.into_iter().collect());
        }

        while trace.elapsed() <= self.cutoff {
            // Drop phase: shrink the cover until an edge is exposed.
            while exposed.is_empty() {
                if cover.len() < min_cover.len() {
                    min_cover = cover.clone();
                    trace.record(min_cover.len())?;
                }
                let offset = rng.random_range(0..cover.len());
                let Some(&dropped) = cover.iter().nth(offset) else {
                    break;
                };
                for &v in graph.neighbors(dropped) {
                    if !cover.contains(&v) {
                        exposed.insert(Edge::new(dropped, v));
                    }
                }
                // The reset happens before the drop itself, so the weight
                // bookkeeping below already sees the post-removal state.
                if !exposed.is_empty() {
                    taboo = Edge::new(0, 0);
                    for w in edge_weight.values_mut() {
                        *w = INITIAL_EDGE_WEIGHT;
                    }
                }
                cover.remove(&dropped);
            }

            // Swap phase: repair a random exposed edge with the best
            // (insert, remove) pair.
            let offset = rng.random_range(0..exposed.len());
            let Some(&e) = exposed.iter().nth(offset) else {
                continue;
            };
            let (a, b) = swap_pair(graph, &cover, &mut node_weight, &edge_weight, taboo, e);

            cover.remove(&b);
            for &x in graph.neighbors(b) {
                if !cover.contains(&x) {
                    exposed.insert(Edge::new(b, x));
                }
            }
            cover.insert(a);
            for &x in graph.neighbors(a) {
                exposed.remove(&Edge::new(a, x));
            }

            taboo = Edge::new(a, b);

            for e in &exposed {
                if let Some(w) = edge_weight.get_mut(e) {
                    *w += 1.0;
                }
            }
        }

        Ok(min_cover.into_iter().collect())
    }
}

/// Best (insert, remove) pair for repairing the exposed edge `e`.
///
/// Maximizes `nodeW(insert) - nodeW(remove) + edgeW(insert, remove)`,
/// where `nodeW(u)` sums the weights of u's exposed incident edges; the
/// taboo pair is skipped and the first maximum encountered wins.
fn swap_pair(
    graph: &Graph,
    cover: &BTreeSet<VertexId>,
    node_weight: &mut [f64],
    edge_weight: &BTreeMap<Edge, f64>,
    taboo: Edge,
    e: Edge,
) -> (VertexId, VertexId) {
    let (u, v) = e.endpoints();
    let refresh = |node_weight: &mut [f64], x: VertexId| {
        node_weight[x] = graph
            .neighbors(x)
            .iter()
            .filter(|&n| !cover.contains(n))
            .map(|&n| edge_weight.get(&Edge::new(x, n)).copied().unwrap_or(0.0))
            .sum();
    };
    for &x in cover {
        refresh(node_weight, x);
    }
    refresh(node_weight, u);
    refresh(node_weight, v);

    let mut best_gain = OrderedFloat(-1.0);
    let mut pair = (0, 0);
    for a in [u, v] {
        for &b in cover {
            let candidate = Edge::new(a, b);
            if candidate == taboo {
                continue;
            }
            let mut gain = node_weight[a] - node_weight[b];
            if let Some(w) = edge_weight.get(&candidate) {
                gain += w;
            }
            if OrderedFloat(gain) > best_gain {
                best_gain = OrderedFloat(gain);
                pair = (a, b);
            }
        }
    }
    pair
}

#[cfg(test)]
#[path = "../unit_tests/solvers/cover_search.rs"]
mod tests;
