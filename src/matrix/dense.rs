//! Dense position-indexed cost matrix.

use std::hash::Hash;

use crate::models::{Cost, Graph};

/// A dense n×n cost matrix stored in row-major order, indexed by node
/// position in the source graph's insertion order.
///
/// Entries default to [`Cost::Infinite`], so absent edges are unreachable.
/// Stored graph costs pass through the graph's read-time sentinel
/// normalization when the matrix is built.
///
/// # Examples
///
/// ```
/// use tsp_route::matrix::CostMatrix;
/// use tsp_route::models::{Cost, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_node("C");
///
/// let matrix = CostMatrix::from_graph(&graph);
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(0, 1), Cost::Finite(1));
/// assert_eq!(matrix.get(1, 0), Cost::Infinite);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with every entry `Infinite`.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![Cost::Infinite; size * size],
            size,
        }
    }

    /// Builds the matrix from a graph, rows and columns following the
    /// graph's node insertion order.
    pub fn from_graph<N: Clone + Eq + Hash>(graph: &Graph<N>) -> Self {
        let nodes = graph.nodes();
        let mut matrix = Self::new(nodes.len());
        for (i, from) in nodes.iter().enumerate() {
            for (j, to) in nodes.iter().enumerate() {
                if let Some(cost) = graph.edge_cost(from, to) {
                    matrix.set(i, j, cost);
                }
            }
        }
        matrix
    }

    /// Returns the cost from position `from` to position `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.data[from * self.size + to]
    }

    /// Sets the cost from position `from` to position `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: Cost) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "A", 2);
        g.add_edge("A", "C", 999_999);
        g.add_node("C");
        g
    }

    #[test]
    fn test_from_graph() {
        let m = CostMatrix::from_graph(&sample_graph());
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 1), Cost::Finite(1));
        assert_eq!(m.get(1, 0), Cost::Finite(2));
    }

    #[test]
    fn test_absent_edges_are_infinite() {
        let m = CostMatrix::from_graph(&sample_graph());
        assert_eq!(m.get(1, 2), Cost::Infinite);
        assert_eq!(m.get(2, 0), Cost::Infinite);
        assert_eq!(m.get(0, 0), Cost::Infinite);
    }

    #[test]
    fn test_sentinel_costs_are_infinite() {
        let m = CostMatrix::from_graph(&sample_graph());
        assert_eq!(m.get(0, 2), Cost::Infinite);
    }

    #[test]
    fn test_set_get() {
        let mut m = CostMatrix::new(2);
        m.set(0, 1, Cost::Finite(42));
        assert_eq!(m.get(0, 1), Cost::Finite(42));
        assert_eq!(m.get(1, 0), Cost::Infinite);
    }

    #[test]
    fn test_empty() {
        let g: Graph<&str> = Graph::new();
        let m = CostMatrix::from_graph(&g);
        assert_eq!(m.size(), 0);
    }
}
