//! Crate error type.

use thiserror::Error as ThisError;

/// Errors surfaced by the routers.
///
/// Node identifiers are rendered to strings at construction time so the
/// error type stays free of the graph's generic node parameter.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum RouteError {
    /// The requested start node does not exist in the graph.
    #[error("start node {0} not in graph")]
    StartNodeNotFound(String),
    /// No unvisited node is reachable from the current position and the
    /// disconnection policy forbids infinite-cost hops.
    #[error("graph is disconnected from node {0}; cannot complete tour")]
    Disconnected(String),
    /// All nodes were visited but there is no edge back to the start and
    /// the disconnection policy forbids an infinite-cost closing hop.
    #[error("no edge from {from} back to start {start}; cannot close tour")]
    NoReturnEdge {
        /// Final node of the open route.
        from: String,
        /// Start node the tour must return to.
        start: String,
    },
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RouteError::StartNodeNotFound("X".into()).to_string(),
            "start node X not in graph"
        );
        assert_eq!(
            RouteError::Disconnected("D".into()).to_string(),
            "graph is disconnected from node D; cannot complete tour"
        );
        assert_eq!(
            RouteError::NoReturnEdge {
                from: "C".into(),
                start: "A".into()
            }
            .to_string(),
            "no edge from C back to start A; cannot close tour"
        );
    }
}
