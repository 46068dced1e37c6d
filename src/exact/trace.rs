//! Search trace records.

use serde::{Deserialize, Serialize};

use crate::models::Cost;

/// What a trace step represents.
///
/// `Expand` marks the pre-order expansion of a search node; the remaining
/// variants annotate how that branch ended (backtracks) or that a new best
/// solution was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepKind {
    /// Pre-order expansion of a search node.
    Expand,
    /// Branch cut because the accumulated cost reached the best known bound.
    PruneBoundExceeded {
        /// Accumulated cost at the cut.
        cost: Cost,
        /// Best known total cost at the time of the cut.
        bound: Cost,
    },
    /// All nodes visited but no finite edge back to the start.
    NoReturnEdge,
    /// No unvisited node is reachable from the current position.
    NoValidMoves,
    /// A complete tour cheaper than any seen before.
    NewBest {
        /// Total cost of the new best tour, closing edge included.
        total: Cost,
    },
}

/// One recorded decision point of the exact search.
///
/// The `visited` snapshot is indexed by the graph's node insertion order;
/// `path` is the partial path at the time of the step (for
/// [`StepKind::NewBest`], the full closed tour).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<N> {
    /// Search depth (0 = the start node's expansion).
    pub depth: usize,
    /// Node being expanded (for `NewBest`, the start node).
    pub node: N,
    /// Accumulated cost at this point (for `NewBest`, the tour total).
    pub cost: Cost,
    /// Partial path snapshot.
    pub path: Vec<N>,
    /// Visited-set snapshot, indexed by graph node order.
    pub visited: Vec<bool>,
    /// Step discriminant.
    pub kind: StepKind,
}

impl<N> Step<N> {
    /// Returns `true` for the backtrack annotations (pruning cutoff, missing
    /// return edge, or no valid moves).
    pub fn is_backtrack(&self) -> bool {
        matches!(
            self.kind,
            StepKind::PruneBoundExceeded { .. } | StepKind::NoReturnEdge | StepKind::NoValidMoves
        )
    }

    /// Returns `true` for a new-best-solution step.
    pub fn is_solution(&self) -> bool {
        matches!(self.kind, StepKind::NewBest { .. })
    }

    /// Human-readable reason text for backtrack and solution steps.
    pub fn reason(&self) -> Option<String> {
        match &self.kind {
            StepKind::Expand => None,
            StepKind::PruneBoundExceeded { cost, bound } => {
                Some(format!("pruning: cost {cost} >= best {bound}"))
            }
            StepKind::NoReturnEdge => Some("cannot return to start".to_string()),
            StepKind::NoValidMoves => Some("no more valid moves, backtracking".to_string()),
            StepKind::NewBest { total } => Some(format!("new best solution found: {total}")),
        }
    }
}
