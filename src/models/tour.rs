//! Closed tour type.

use serde::{Deserialize, Serialize};

use super::Cost;

/// A closed tour: an ordered node sequence starting and ending at the same
/// start node, visiting every other node exactly once in between, together
/// with its accumulated cost (closing edge included).
///
/// Two degenerate shapes exist: an empty tour (no stops, cost 0) meaning
/// "no route" — produced for an empty graph or when the exact search finds
/// no feasible tour — and the single-node tour `[start, start]` with cost 0.
///
/// # Examples
///
/// ```
/// use tsp_route::models::{Cost, Tour};
///
/// let tour = Tour::new(vec!["A", "B", "C", "A"], Cost::Finite(7));
/// assert_eq!(tour.len(), 4);
/// assert!(tour.is_closed());
/// assert_eq!(tour.total_cost(), Cost::Finite(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour<N> {
    stops: Vec<N>,
    total_cost: Cost,
}

impl<N> Tour<N> {
    /// Creates a tour from its stop sequence and total cost.
    pub fn new(stops: Vec<N>, total_cost: Cost) -> Self {
        Self { stops, total_cost }
    }

    /// The empty tour (no stops, cost 0).
    pub fn empty() -> Self {
        Self {
            stops: Vec::new(),
            total_cost: Cost::Finite(0),
        }
    }

    /// The stop sequence, including the closing return to the start.
    pub fn stops(&self) -> &[N] {
        &self.stops
    }

    /// Total accumulated cost, closing edge included.
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Number of stops (the start node counts twice in a closed tour).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` for the empty tour.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<N: PartialEq> Tour<N> {
    /// Returns `true` if the tour has at least two stops and ends where
    /// it starts.
    pub fn is_closed(&self) -> bool {
        self.stops.len() >= 2 && self.stops.first() == self.stops.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tour() {
        let t: Tour<&str> = Tour::empty();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.total_cost(), Cost::Finite(0));
        assert!(!t.is_closed());
    }

    #[test]
    fn test_single_node_tour() {
        let t = Tour::new(vec!["A", "A"], Cost::Finite(0));
        assert!(t.is_closed());
        assert_eq!(t.stops(), ["A", "A"]);
    }

    #[test]
    fn test_open_sequence_is_not_closed() {
        let t = Tour::new(vec!["A", "B"], Cost::Finite(1));
        assert!(!t.is_closed());
    }

    #[test]
    fn test_infinite_total() {
        let t = Tour::new(vec!["A", "B", "A"], Cost::Infinite);
        assert!(t.is_closed());
        assert!(t.total_cost().is_infinite());
    }
}
