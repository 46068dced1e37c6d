//! Nearest-neighbor greedy heuristic.
//!
//! Builds a tour greedily: starting from the chosen node, always hop to the
//! cheapest unvisited node, then close the loop back to the start. Fast and
//! deterministic, but the result may be suboptimal and — on a disconnected
//! graph — may carry an infinite total cost.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes; a single pass, no search.

use std::fmt::Display;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::{Result, RouteError};
use crate::models::{Cost, Graph, Tour};

/// How the greedy router treats nodes with no usable edge from the current
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectionPolicy {
    /// Hop to unreachable nodes at infinite cost; the tour always completes
    /// but its total cost may be [`Cost::Infinite`].
    Allow,
    /// Fail with [`RouteError::Disconnected`] or [`RouteError::NoReturnEdge`]
    /// as soon as the tour cannot continue over finite edges.
    Deny,
}

/// Constructs a closed tour using the nearest-unvisited-first heuristic.
///
/// At each step the cheapest edge from the current position to any
/// unvisited node is taken; ties go to the first node in graph insertion
/// order. Under [`DisconnectionPolicy::Allow`], nodes with no usable edge
/// are still visited, at infinite cost. After the last node the tour is
/// closed back to `start`.
///
/// An empty graph yields the empty tour; a graph containing only `start`
/// yields `[start, start]` with cost 0.
///
/// # Errors
///
/// - [`RouteError::StartNodeNotFound`] if `start` is not in the graph.
/// - [`RouteError::Disconnected`] under `Deny` when no unvisited node is
///   reachable over a finite edge.
/// - [`RouteError::NoReturnEdge`] under `Deny` when the closing edge back
///   to `start` is missing.
///
/// # Examples
///
/// ```
/// use tsp_route::greedy::{nearest_neighbor, DisconnectionPolicy};
/// use tsp_route::models::{Cost, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("A", "C", 4);
/// graph.add_edge("B", "A", 1);
/// graph.add_edge("B", "C", 2);
/// graph.add_edge("C", "A", 4);
/// graph.add_edge("C", "B", 2);
///
/// let tour = nearest_neighbor(&graph, &"A", DisconnectionPolicy::Allow).unwrap();
/// assert_eq!(tour.stops(), ["A", "B", "C", "A"]);
/// assert_eq!(tour.total_cost(), Cost::Finite(7));
/// ```
pub fn nearest_neighbor<N>(
    graph: &Graph<N>,
    start: &N,
    policy: DisconnectionPolicy,
) -> Result<Tour<N>>
where
    N: Clone + Eq + Hash + Display,
{
    if graph.is_empty() {
        return Ok(Tour::empty());
    }

    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| RouteError::StartNodeNotFound(start.to_string()))?;

    let nodes = graph.nodes();
    let n = nodes.len();

    if n == 1 {
        return Ok(Tour::new(vec![start.clone(), start.clone()], Cost::Finite(0)));
    }

    let mut visited = vec![false; n];
    visited[start_idx] = true;
    let mut remaining = n - 1;

    let mut stops = Vec::with_capacity(n + 1);
    stops.push(start.clone());
    let mut total = Cost::Finite(0);
    let mut current = start_idx;

    while remaining > 0 {
        // Cheapest edge to an unvisited node; first-encountered wins ties.
        let mut best: Option<(usize, Cost)> = None;
        for (i, node) in nodes.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let candidate = match graph.edge_cost(&nodes[current], node) {
                Some(cost) => {
                    if cost.is_infinite() && policy == DisconnectionPolicy::Deny {
                        continue;
                    }
                    cost
                }
                None => {
                    if policy == DisconnectionPolicy::Deny {
                        continue;
                    }
                    Cost::Infinite
                }
            };
            if best.is_none() || candidate < best.expect("checked is_none").1 {
                best = Some((i, candidate));
            }
        }

        let (next, edge_cost) = best.ok_or_else(|| {
            RouteError::Disconnected(nodes[current].to_string())
        })?;

        trace!(
            "greedy: {} -> {} (edge cost {edge_cost})",
            nodes[current],
            nodes[next]
        );

        stops.push(nodes[next].clone());
        total += edge_cost;
        visited[next] = true;
        remaining -= 1;
        current = next;
    }

    // Close the tour back to the start.
    let closing = match graph.edge_cost(&nodes[current], start) {
        Some(cost) => cost,
        None => {
            if policy == DisconnectionPolicy::Deny {
                return Err(RouteError::NoReturnEdge {
                    from: nodes[current].to_string(),
                    start: start.to_string(),
                });
            }
            Cost::Infinite
        }
    };
    total += closing;
    stops.push(start.clone());

    debug!("greedy tour from {start}: {} stops, total cost {total}", stops.len());

    Ok(Tour::new(stops, total))
}
