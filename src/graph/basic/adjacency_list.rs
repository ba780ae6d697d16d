//! Adjacency-list graph backend.
//!
//! Each vertex maps to the ordered list of its outgoing edges. Repeated
//! insertion of the same directed pair appends a parallel edge; nothing is
//! ever overwritten or removed.

use std::collections::HashMap;
use std::hash::Hash;

#[cfg(debug_assertions)]
use super::invariants::invariant_assert_msg;
use crate::graph::{Edge, Graph, Vertex};

/// A graph storing, per vertex, the list of its outgoing edges.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `create_vertex` | \(O(1)\) amortized | Inserts an empty edge list |
/// | `add_directed_edge` | \(O(1)\) amortized | Appends to the source list |
/// | `edges` | \(O(\text{out-degree})\) | Clones the stored list |
/// | `weight` | \(O(\text{out-degree})\) | First matching destination wins |
/// | `edge_count` | \(O(n)\) | Sums list lengths |
#[derive(Debug, Clone)]
pub struct AdjacencyList<T> {
    adjacencies: HashMap<Vertex<T>, Vec<Edge<T>>>,
}

impl<T> AdjacencyList<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacencies: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            adjacencies: HashMap::with_capacity(vertex_capacity),
        }
    }
}

impl<T> Default for AdjacencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> AdjacencyList<T> {
    /// Returns the out-degree of `vertex`, 0 if it is unknown.
    pub fn out_degree(&self, vertex: &Vertex<T>) -> usize {
        self.adjacencies.get(vertex).map_or(0, Vec::len)
    }

    /// Returns true if `vertex` was created by this graph.
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.adjacencies.contains_key(vertex)
    }

    /// Validates the storage invariants.
    ///
    /// This method checks that:
    /// 1. Vertex indices are exactly `0..vertex_count`
    /// 2. Every stored edge's source equals the vertex it is stored under
    ///
    /// Returns `true` if all invariants hold.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        let n = self.adjacencies.len();
        let mut seen = vec![false; n];
        for (vertex, edges) in &self.adjacencies {
            invariant_assert_msg(vertex.index < n, "Vertex index exceeds vertex count");
            invariant_assert_msg(!seen[vertex.index], "Vertex index issued twice");
            seen[vertex.index] = true;
            for edge in edges {
                invariant_assert_msg(
                    edge.source == *vertex,
                    "Edge source must equal its adjacency key",
                );
            }
        }
        true
    }
}

impl<T: Clone + Eq + Hash> Graph for AdjacencyList<T> {
    type Data = T;

    fn create_vertex(&mut self, data: T) -> Vertex<T> {
        let vertex = Vertex::new(self.adjacencies.len(), data);
        self.adjacencies.insert(vertex.clone(), Vec::new());
        #[cfg(feature = "tracing")]
        tracing::trace!(index = vertex.index, "adjacency list: vertex created");
        vertex
    }

    fn add_directed_edge(&mut self, source: &Vertex<T>, destination: &Vertex<T>, weight: Option<f64>) {
        if let Some(edges) = self.adjacencies.get_mut(source) {
            edges.push(Edge::new(source.clone(), destination.clone(), weight));
            #[cfg(feature = "tracing")]
            tracing::trace!(
                source = source.index,
                destination = destination.index,
                ?weight,
                "adjacency list: edge added"
            );
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                source = source.index,
                "adjacency list: dropping edge from unknown vertex"
            );
        }
    }

    fn edges(&self, source: &Vertex<T>) -> Vec<Edge<T>> {
        self.adjacencies.get(source).cloned().unwrap_or_default()
    }

    fn weight(&self, source: &Vertex<T>, destination: &Vertex<T>) -> Option<f64> {
        self.adjacencies
            .get(source)?
            .iter()
            .find(|edge| edge.destination == *destination)?
            .weight
    }

    fn vertex_count(&self) -> usize {
        self.adjacencies.len()
    }

    fn vertices(&self) -> Vec<Vertex<T>> {
        let mut vertices: Vec<_> = self.adjacencies.keys().cloned().collect();
        vertices.sort_unstable_by_key(|v| v.index);
        vertices
    }

    fn edge_count(&self) -> usize {
        self.adjacencies.values().map(Vec::len).sum()
    }
}
