//! The capability interface every graph backend implements.

use crate::graph::{Edge, EdgeKind, Vertex};

/// A mutable, weighted, directed graph.
///
/// Backends supply vertex allocation, directed insertion and the two edge
/// queries; undirected insertion and [`EdgeKind`] dispatch are derived from
/// those once, here. Algorithms in [`crate::graph::algorithms`] only ever talk
/// to a graph through this trait.
///
/// ### Backend-defined behaviour
/// - Order of [`Graph::edges`] is fixed per backend and stable between
///   mutations.
/// - Repeating `add_directed_edge` for the same pair either accumulates a
///   parallel edge (adjacency list) or overwrites the weight (adjacency
///   matrix).
pub trait Graph {
    /// Payload carried by each vertex.
    type Data;

    /// Allocates a vertex with the next free index, starting at 0.
    fn create_vertex(&mut self, data: Self::Data) -> Vertex<Self::Data>;

    /// Adds one `source -> destination` edge.
    fn add_directed_edge(
        &mut self,
        source: &Vertex<Self::Data>,
        destination: &Vertex<Self::Data>,
        weight: Option<f64>,
    );

    /// Returns the outgoing edges of `source`, or an empty list when the
    /// vertex is unknown to this graph.
    fn edges(&self, source: &Vertex<Self::Data>) -> Vec<Edge<Self::Data>>;

    /// Returns the weight of the first `source -> destination` edge in
    /// [`Graph::edges`] order, or `None` when there is no such edge or it is
    /// unweighted.
    fn weight(&self, source: &Vertex<Self::Data>, destination: &Vertex<Self::Data>)
        -> Option<f64>;

    /// Number of vertices created so far.
    fn vertex_count(&self) -> usize;

    /// All vertices in index order.
    fn vertices(&self) -> Vec<Vertex<Self::Data>>;

    /// Number of stored directed edges. An undirected connection counts twice.
    fn edge_count(&self) -> usize {
        self.vertices().iter().map(|v| self.edges(v).len()).sum()
    }

    /// Returns true if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Adds `source -> destination` and `destination -> source` with the same
    /// weight.
    fn add_undirected_edge(
        &mut self,
        source: &Vertex<Self::Data>,
        destination: &Vertex<Self::Data>,
        weight: Option<f64>,
    ) {
        self.add_directed_edge(source, destination, weight);
        self.add_directed_edge(destination, source, weight);
    }

    /// Inserts a connection of the given kind.
    fn add(
        &mut self,
        kind: EdgeKind,
        source: &Vertex<Self::Data>,
        destination: &Vertex<Self::Data>,
        weight: Option<f64>,
    ) {
        match kind {
            EdgeKind::Directed => self.add_directed_edge(source, destination, weight),
            EdgeKind::Undirected => self.add_undirected_edge(source, destination, weight),
        }
    }
}
