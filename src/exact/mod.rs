//! Exact TSP solving by backtracking search.
//!
//! - [`backtracking`] — exhaustive depth-first search with branch-and-bound
//!   pruning, recording a full decision trace
//! - [`backtracking_guarded`] — same search with an injectable predicate
//!   checked before each recursive expansion (external budget hook)
//! - [`Step`] / [`StepKind`] — one trace record per decision point

mod backtracking;
mod trace;

pub use backtracking::{backtracking, backtracking_guarded, SearchResult};
pub use trace::{Step, StepKind};
