//! Greedy route construction.
//!
//! - [`nearest_neighbor`] — Nearest-unvisited-first heuristic, O(n²),
//!   tolerant of disconnected graphs via [`DisconnectionPolicy`]

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, DisconnectionPolicy};
