//! Vertex and edge value types shared by every graph backend.
//!
//! Both types are plain values: backends hand out clones, never references,
//! so holding a `Vertex` across later mutations of its graph is always sound.
//! A vertex index is only meaningful against the backend that issued it.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A graph node: a backend-assigned index plus an arbitrary payload.
///
/// Equality and hashing consider both `index` and `data`, so two vertices
/// carrying the same payload in one graph remain distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex<T> {
    /// Position assigned by the owning backend at creation time.
    pub index: usize,
    /// User payload.
    pub data: T,
}

impl<T> Vertex<T> {
    /// Creates a vertex value.
    ///
    /// Backends call this from `create_vertex`; building one by hand is only
    /// useful for probing a graph with a vertex it does not own.
    #[inline]
    pub const fn new(index: usize, data: T) -> Self {
        Self { index, data }
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.data)
    }
}

/// One directed connection with an optional real-valued weight.
///
/// An undirected connection is stored as two `Edge`s, one per direction,
/// carrying the same weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Tail of the edge.
    pub source: Vertex<T>,
    /// Head of the edge.
    pub destination: Vertex<T>,
    /// Edge weight, `None` for unweighted edges.
    pub weight: Option<f64>,
}

impl<T> Edge<T> {
    /// Creates an edge value.
    #[inline]
    pub const fn new(source: Vertex<T>, destination: Vertex<T>, weight: Option<f64>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

/// Selects how [`Graph::add`](crate::graph::Graph::add) inserts a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// A single `source -> destination` edge.
    Directed,
    /// Two edges, one in each direction, with the same weight.
    Undirected,
}

impl EdgeKind {
    /// Returns true for [`EdgeKind::Directed`].
    #[inline]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}
