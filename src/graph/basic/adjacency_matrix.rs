//! Adjacency-matrix graph backend.
//!
//! A square table of cells indexed by `(source.index, destination.index)`.
//! Each cell is `None` (no edge) or `Some(weight)` where `weight` may itself be
//! `None` for an unweighted edge. Re-adding a pair overwrites the cell.

#[cfg(debug_assertions)]
use super::invariants::invariant_assert_msg;
use crate::graph::{Edge, Graph, GraphError, Vertex};

/// One matrix cell: absent, or an edge with an optional weight.
type Cell = Option<Option<f64>>;

/// A dense graph backed by a `vertex_count x vertex_count` weight table.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `create_vertex` | \(O(n)\) | Extends every existing row by one cell |
/// | `add_directed_edge` | \(O(1)\) | Direct cell assignment |
/// | `edges` | \(O(n)\) | Scans the source row |
/// | `weight` | \(O(1)\) | Direct cell lookup |
/// | `edge_count` | \(O(n^2)\) | Scans every cell |
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<T> {
    vertices: Vec<Vertex<T>>,
    weights: Vec<Vec<Cell>>,
}

impl<T> AdjacencyMatrix<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    ///
    /// Only the outer vectors are reserved; rows still grow one cell per
    /// created vertex.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            weights: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Returns the matrix dimension, always equal to the vertex count.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if an edge `source -> destination` exists, weighted or not.
    pub fn has_edge(&self, source: &Vertex<T>, destination: &Vertex<T>) -> bool {
        matches!(self.cell(source.index, destination.index), Some(Some(_)))
    }

    /// Adds one `source -> destination` edge, overwriting any previous one.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if either vertex index is not
    /// a row of this matrix. The matrix is left untouched in that case.
    pub fn try_add_directed_edge(
        &mut self,
        source: &Vertex<T>,
        destination: &Vertex<T>,
        weight: Option<f64>,
    ) -> Result<(), GraphError> {
        let from = self.checked_index(source)?;
        let to = self.checked_index(destination)?;
        self.weights[from][to] = Some(weight);
        #[cfg(feature = "tracing")]
        tracing::trace!(source = from, destination = to, ?weight, "adjacency matrix: edge set");
        Ok(())
    }

    fn checked_index(&self, vertex: &Vertex<T>) -> Result<usize, GraphError> {
        if vertex.index < self.dimension() {
            Ok(vertex.index)
        } else {
            Err(GraphError::VertexOutOfBounds {
                index: vertex.index,
                vertex_count: self.dimension(),
            })
        }
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.weights.get(row)?.get(col)
    }

    /// Validates the storage invariants.
    ///
    /// This method checks that:
    /// 1. The matrix dimension equals the vertex count
    /// 2. Every row has exactly `dimension` cells
    /// 3. The vertex at position `i` carries index `i`
    ///
    /// Returns `true` if all invariants hold.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertices.len();
        invariant_assert_msg(self.weights.len() == n, "Matrix dimension must equal vertex count");
        for row in &self.weights {
            invariant_assert_msg(row.len() == n, "Matrix must stay square");
        }
        for (i, vertex) in self.vertices.iter().enumerate() {
            invariant_assert_msg(vertex.index == i, "Vertex index must equal its position");
        }
        true
    }
}

impl<T> Default for AdjacencyMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Graph for AdjacencyMatrix<T> {
    type Data = T;

    fn create_vertex(&mut self, data: T) -> Vertex<T> {
        let vertex = Vertex::new(self.vertices.len(), data);
        self.vertices.push(vertex.clone());
        // New column: no edges into the new vertex yet.
        for row in &mut self.weights {
            row.push(None);
        }
        // New row: no edges out of it either.
        self.weights.push(vec![None; self.vertices.len()]);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            index = vertex.index,
            dimension = self.weights.len(),
            "adjacency matrix: vertex created"
        );
        vertex
    }

    /// # Panics
    /// Panics if either vertex was not issued by this matrix.
    fn add_directed_edge(&mut self, source: &Vertex<T>, destination: &Vertex<T>, weight: Option<f64>) {
        if let Err(err) = self.try_add_directed_edge(source, destination, weight) {
            panic!("{err}");
        }
    }

    fn edges(&self, source: &Vertex<T>) -> Vec<Edge<T>> {
        let Some(row) = self.weights.get(source.index) else {
            return Vec::new();
        };
        row.iter()
            .zip(&self.vertices)
            .filter_map(|(cell, destination)| {
                cell.map(|weight| Edge::new(source.clone(), destination.clone(), weight))
            })
            .collect()
    }

    fn weight(&self, source: &Vertex<T>, destination: &Vertex<T>) -> Option<f64> {
        self.cell(source.index, destination.index).copied().flatten().flatten()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Vec<Vertex<T>> {
        self.vertices.clone()
    }

    fn edge_count(&self) -> usize {
        self.weights
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }
}
