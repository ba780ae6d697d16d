//! Depth-first traversal.

use std::hash::Hash;
use std::vec;

use crate::graph::access::visited::VisitedSet;
use crate::graph::{Edge, Graph, Vertex};

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertices in preorder: a vertex is produced the moment it is pushed,
/// and the walk always descends into the first unpushed neighbour of the
/// current top before backtracking. Each stack entry keeps a cursor into its
/// vertex's edge list, so a vertex's edges are fetched once.
pub struct Dfs<'a, G: Graph> {
    graph: &'a G,
    stack: Vec<vec::IntoIter<Edge<G::Data>>>,
    pushed: VisitedSet<G::Data>,
    source: Option<Vertex<G::Data>>,
}

impl<'a, G> Dfs<'a, G>
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
    /// Creates a new DFS iterator starting from `source`.
    pub fn new(graph: &'a G, source: &Vertex<G::Data>) -> Self {
        let mut pushed = VisitedSet::with_capacity(graph.vertex_count());
        pushed.try_visit(source);

        Self {
            graph,
            stack: vec![graph.edges(source).into_iter()],
            pushed,
            source: Some(source.clone()),
        }
    }
}

impl<G> Iterator for Dfs<'_, G>
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
    type Item = Vertex<G::Data>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            return Some(source);
        }

        while let Some(neighbors) = self.stack.last_mut() {
            if let Some(edge) = neighbors.find(|edge| self.pushed.try_visit(&edge.destination)) {
                let vertex = edge.destination;
                self.stack.push(self.graph.edges(&vertex).into_iter());
                return Some(vertex);
            }
            // Every neighbour of the top is already pushed.
            self.stack.pop();
        }

        None
    }
}

/// Returns every vertex reachable from `source` in depth-first preorder.
pub fn depth_first_search<G>(graph: &G, source: &Vertex<G::Data>) -> Vec<Vertex<G::Data>>
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
    let order: Vec<_> = Dfs::new(graph, source).collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(source = source.index, visited = order.len(), "dfs complete");
    order
}
