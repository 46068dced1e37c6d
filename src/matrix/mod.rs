//! Dense cost matrix precomputed from a graph.

mod dense;

pub use dense::CostMatrix;
