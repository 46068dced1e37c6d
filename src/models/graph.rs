//! Weighted directed graph with an infinite-cost convention.

use std::collections::HashMap;
use std::hash::Hash;

use super::{Cost, INFINITE_COST_THRESHOLD};

/// A weighted directed graph over opaque node identifiers.
///
/// Edges carry raw `u64` costs; the graph need not be symmetric and nodes
/// without an edge between them are simply absent from the adjacency.
/// Nodes iterate in insertion order, which makes the routers deterministic.
///
/// Raw costs at or above the graph's sentinel threshold (default
/// [`INFINITE_COST_THRESHOLD`]) are reported as [`Cost::Infinite`] by
/// [`edge_cost`](Graph::edge_cost). The normalization happens at read time
/// only; the stored number is untouched.
///
/// # Examples
///
/// ```
/// use tsp_route::models::{Cost, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 3);
/// graph.add_edge("B", "A", 999_999); // sentinel: effectively no edge
///
/// assert_eq!(graph.edge_cost(&"A", &"B"), Some(Cost::Finite(3)));
/// assert_eq!(graph.edge_cost(&"B", &"A"), Some(Cost::Infinite));
/// assert_eq!(graph.edge_cost(&"A", &"C"), None);
/// assert_eq!(graph.nodes(), ["A", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<HashMap<usize, u64>>,
    threshold: u64,
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Creates an empty graph with the default sentinel threshold.
    pub fn new() -> Self {
        Self::with_threshold(INFINITE_COST_THRESHOLD)
    }

    /// Creates an empty graph treating raw costs `>= threshold` as infinite.
    pub fn with_threshold(threshold: u64) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            threshold,
        }
    }

    /// Inserts a node, returning its index. Re-adding is a no-op.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&i) = self.index.get(&node) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(node.clone());
        self.index.insert(node, i);
        self.adjacency.push(HashMap::new());
        i
    }

    /// Inserts a directed edge with the given raw cost.
    ///
    /// Missing endpoints are added. A repeated edge overwrites the cost.
    pub fn add_edge(&mut self, from: N, to: N, cost: u64) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.adjacency[from].insert(to, cost);
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if the node exists.
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the insertion index of a node.
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// The sentinel threshold in effect for this graph.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Looks up the cost of the directed edge `from → to`.
    ///
    /// Returns `None` if either node is absent or no entry exists,
    /// `Some(Cost::Infinite)` if the stored cost is at or above the
    /// sentinel threshold, and `Some(Cost::Finite(_))` otherwise.
    pub fn edge_cost(&self, from: &N, to: &N) -> Option<Cost> {
        let from = self.index.get(from)?;
        let to = self.index.get(to)?;
        let raw = *self.adjacency[*from].get(to)?;
        if raw >= self.threshold {
            Some(Cost::Infinite)
        } else {
            Some(Cost::Finite(raw))
        }
    }
}

impl<N: Clone + Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}
