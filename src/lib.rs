//! # tsp-route
//!
//! TSP route finding on small, explicitly-weighted directed graphs that may
//! be disconnected: a fast greedy heuristic and an exact backtracking solver
//! with branch-and-bound pruning and a step-by-step search trace.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Cost with its infinite sentinel, Graph, Tour)
//! - [`matrix`] — Dense position-indexed cost matrix
//! - [`greedy`] — Nearest-unvisited-first heuristic router
//! - [`exact`] — Backtracking/branch-and-bound exact router with trace recording
//! - [`error`] — Error and result types
//!
//! ## Example
//!
//! ```
//! use tsp_route::exact::backtracking;
//! use tsp_route::greedy::{nearest_neighbor, DisconnectionPolicy};
//! use tsp_route::models::{Cost, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 1);
//! graph.add_edge("A", "C", 4);
//! graph.add_edge("B", "A", 1);
//! graph.add_edge("B", "C", 2);
//! graph.add_edge("C", "A", 4);
//! graph.add_edge("C", "B", 2);
//!
//! let heuristic = nearest_neighbor(&graph, &"A", DisconnectionPolicy::Allow).unwrap();
//! assert_eq!(heuristic.total_cost(), Cost::Finite(7));
//!
//! let exact = backtracking(&graph, &"A").unwrap();
//! assert!(exact.tour().total_cost() <= heuristic.total_cost());
//! assert!(exact.trace().iter().any(|step| step.is_solution()));
//! ```

pub mod error;
pub mod exact;
pub mod greedy;
pub mod matrix;
pub mod models;
