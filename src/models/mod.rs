//! Domain model types for TSP route finding.
//!
//! Provides the core abstractions: the [`Cost`] sum type with its infinite
//! sentinel, the weighted directed [`Graph`] with read-time sentinel
//! normalization, and the closed [`Tour`] returned by both routers.

mod cost;
mod graph;
mod tour;

pub use cost::{Cost, INFINITE_COST_THRESHOLD};
pub use graph::Graph;
pub use tour::Tour;
