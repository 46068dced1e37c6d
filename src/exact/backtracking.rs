//! Backtracking exact solver with branch-and-bound pruning.
//!
//! Explores the permutation space of unvisited nodes depth-first, cutting
//! branches whose accumulated cost already reaches the best known total,
//! and records every decision point in a [`Step`] trace.
//!
//! # Complexity
//!
//! Worst case O((n-1)!) branch visits before pruning. Node counts are
//! assumed small; the pruning payoff depends on how early a cheap feasible
//! tour is discovered, which in turn depends on the node-index exploration
//! order.

use std::fmt::Display;
use std::hash::Hash;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::trace::{Step, StepKind};
use crate::error::{Result, RouteError};
use crate::matrix::CostMatrix;
use crate::models::{Cost, Graph, Tour};

/// Outcome of an exact search: the best tour found plus the full trace.
///
/// When no feasible closed tour exists, the tour is empty (cost 0) and the
/// trace documents the failed exploration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<N> {
    tour: Tour<N>,
    trace: Vec<Step<N>>,
}

impl<N> SearchResult<N> {
    /// The best tour found; empty when the search found no feasible tour.
    pub fn tour(&self) -> &Tour<N> {
        &self.tour
    }

    /// The recorded decision trace, in depth-first traversal order.
    pub fn trace(&self) -> &[Step<N>] {
        &self.trace
    }

    /// Returns `true` if a feasible closed tour was found.
    pub fn is_feasible(&self) -> bool {
        !self.tour.is_empty()
    }

    /// Splits the result into its tour and trace.
    pub fn into_parts(self) -> (Tour<N>, Vec<Step<N>>) {
        (self.tour, self.trace)
    }
}

/// Finds a minimum-cost closed tour by exhaustive backtracking search.
///
/// Equivalent to [`backtracking_guarded`] with an always-true guard.
///
/// # Errors
///
/// [`RouteError::StartNodeNotFound`] if `start` is not in the graph.
///
/// # Examples
///
/// ```
/// use tsp_route::exact::backtracking;
/// use tsp_route::models::{Cost, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("B", "A", 1);
///
/// let result = backtracking(&graph, &"A").unwrap();
/// assert_eq!(result.tour().stops(), ["A", "B", "A"]);
/// assert_eq!(result.tour().total_cost(), Cost::Finite(2));
/// ```
pub fn backtracking<N>(graph: &Graph<N>, start: &N) -> Result<SearchResult<N>>
where
    N: Clone + Eq + Hash + Display,
{
    backtracking_guarded(graph, start, |_| true)
}

/// Finds a minimum-cost closed tour, consulting `guard` before each
/// recursive expansion.
///
/// The guard receives the current search depth; returning `false` abandons
/// the remaining branches at that point. This is the extension hook for an
/// external depth or time budget — the search itself imposes none.
///
/// Special cases: an empty graph yields an empty result; a single-node
/// graph yields `[start, start]` with cost 0 and an empty trace.
///
/// Pruning uses a non-strict bound (`>=`), so a tour tying the best known
/// cost is cut; the improvement check is strict (`<`), so the first-found
/// optimum is the one kept.
///
/// # Errors
///
/// [`RouteError::StartNodeNotFound`] if `start` is not in the graph.
pub fn backtracking_guarded<N, F>(graph: &Graph<N>, start: &N, mut guard: F) -> Result<SearchResult<N>>
where
    N: Clone + Eq + Hash + Display,
    F: FnMut(usize) -> bool,
{
    if graph.is_empty() {
        return Ok(SearchResult {
            tour: Tour::empty(),
            trace: Vec::new(),
        });
    }

    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| RouteError::StartNodeNotFound(start.to_string()))?;

    let nodes = graph.nodes();
    let n = nodes.len();

    if n == 1 {
        return Ok(SearchResult {
            tour: Tour::new(vec![start.clone(), start.clone()], Cost::Finite(0)),
            trace: Vec::new(),
        });
    }

    let matrix = CostMatrix::from_graph(graph);
    let mut search = SearchState {
        nodes,
        matrix: &matrix,
        start: start_idx,
        visited: vec![false; n],
        path: Vec::with_capacity(n + 1),
        best_cost: Cost::Infinite,
        best_path: Vec::new(),
        trace: Vec::new(),
        guard: &mut guard,
    };
    search.visited[start_idx] = true;
    search.path.push(start_idx);
    search.expand(start_idx, Cost::Finite(0), 0);

    if search.best_cost.is_infinite() {
        info!(
            "exact search from {start}: no feasible tour ({} trace steps)",
            search.trace.len()
        );
        return Ok(SearchResult {
            tour: Tour::empty(),
            trace: search.trace,
        });
    }

    info!(
        "exact search from {start}: best cost {} ({} trace steps)",
        search.best_cost,
        search.trace.len()
    );
    let stops = search.best_path.iter().map(|&i| nodes[i].clone()).collect();
    Ok(SearchResult {
        tour: Tour::new(stops, search.best_cost),
        trace: search.trace,
    })
}

/// Mutable state threaded through the depth-first search.
struct SearchState<'a, N> {
    nodes: &'a [N],
    matrix: &'a CostMatrix,
    start: usize,
    visited: Vec<bool>,
    path: Vec<usize>,
    best_cost: Cost,
    best_path: Vec<usize>,
    trace: Vec<Step<N>>,
    guard: &'a mut dyn FnMut(usize) -> bool,
}

impl<N: Clone + Eq + Hash + Display> SearchState<'_, N> {
    fn record(&mut self, node: usize, cost: Cost, depth: usize, kind: StepKind) {
        let step = Step {
            depth,
            node: self.nodes[node].clone(),
            cost,
            path: self.path.iter().map(|&i| self.nodes[i].clone()).collect(),
            visited: self.visited.clone(),
            kind,
        };
        self.trace.push(step);
    }

    fn expand(&mut self, pos: usize, cost: Cost, depth: usize) {
        self.record(pos, cost, depth, StepKind::Expand);

        // Bound check is non-strict: ties with the best known cost are cut.
        if cost >= self.best_cost {
            self.record(
                pos,
                cost,
                depth,
                StepKind::PruneBoundExceeded {
                    cost,
                    bound: self.best_cost,
                },
            );
            return;
        }

        let n = self.matrix.size();

        // Goal: every node visited; try to close the tour.
        if self.path.len() == n {
            let closing = self.matrix.get(pos, self.start);
            if closing.is_finite() {
                let total = cost + closing;
                if total < self.best_cost {
                    self.best_cost = total;
                    self.best_path = self.path.clone();
                    self.best_path.push(self.start);
                    debug!("exact: new best tour with cost {total} at depth {depth}");
                    let step = Step {
                        depth,
                        node: self.nodes[self.start].clone(),
                        cost: total,
                        path: self
                            .best_path
                            .iter()
                            .map(|&i| self.nodes[i].clone())
                            .collect(),
                        visited: self.visited.clone(),
                        kind: StepKind::NewBest { total },
                    };
                    self.trace.push(step);
                }
            } else {
                self.record(pos, cost, depth, StepKind::NoReturnEdge);
            }
            return;
        }

        // Branch into every unvisited node reachable over a finite edge,
        // in ascending node-index order.
        let mut any_eligible = false;
        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            let edge = self.matrix.get(pos, next);
            if edge.is_infinite() {
                continue;
            }
            any_eligible = true;
            if !(self.guard)(depth) {
                break;
            }
            self.visited[next] = true;
            self.path.push(next);
            self.expand(next, cost + edge, depth + 1);
            self.path.pop();
            self.visited[next] = false;
        }

        if !any_eligible && depth > 0 {
            self.record(pos, cost, depth, StepKind::NoValidMoves);
        }
    }
}
