//! Graph model, storage backends and traversals.
//!
//! Modules are organized into layers:
//! - value types (`Vertex`, `Edge`, `EdgeKind`) and the `Graph` trait
//! - `basic`: interchangeable storage backends
//! - `algorithms`: BFS, DFS and cycle detection over any backend

pub mod algorithms;
pub mod basic;
mod error;
mod stats;
mod traits;
mod vertex;
pub(crate) mod access;

pub use algorithms::{breadth_first_search, depth_first_search, has_cycle, Bfs, Dfs, Traversal};
pub use basic::{AdjacencyList, AdjacencyMatrix};
pub use error::GraphError;
pub use stats::{statistics, GraphStatistics};
pub use traits::Graph;
pub use vertex::{Edge, EdgeKind, Vertex};
