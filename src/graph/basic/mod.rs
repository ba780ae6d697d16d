//! Graph storage backends.
//!
//! Both backends implement [`Graph`](crate::graph::Graph) and can be swapped
//! without touching the algorithms that run on them:
//! - [`AdjacencyList`]: per-vertex edge lists, suited to sparse graphs
//! - [`AdjacencyMatrix`]: dense weight table with \(O(1)\) weight lookup

pub mod adjacency_list;
pub mod adjacency_matrix;
#[cfg(debug_assertions)]
mod invariants;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
