//! Breadth-first traversal.

use std::collections::VecDeque;
use std::hash::Hash;

use crate::graph::access::visited::VisitedSet;
use crate::graph::{Graph, Vertex};

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertices in dequeue order, starting with the source. A vertex is
/// marked when it is enqueued, so it can never sit in the queue twice.
/// Neighbours are discovered in [`Graph::edges`] order.
pub struct Bfs<'a, G: Graph> {
    graph: &'a G,
    queue: VecDeque<Vertex<G::Data>>,
    enqueued: VisitedSet<G::Data>,
}

impl<'a, G> Bfs<'a, G>
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
    /// Creates a new BFS iterator starting from `source`.
    pub fn new(graph: &'a G, source: &Vertex<G::Data>) -> Self {
        let mut enqueued = VisitedSet::with_capacity(graph.vertex_count());
        let mut queue = VecDeque::new();
        enqueued.try_visit(source);
        queue.push_back(source.clone());

        Self {
            graph,
            queue,
            enqueued,
        }
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
    type Item = Vertex<G::Data>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for edge in self.graph.edges(&vertex) {
            if self.enqueued.try_visit(&edge.destination) {
                self.queue.push_back(edge.destination);
            }
        }

        Some(vertex)
    }
}

/// Returns every vertex reachable from `source` in breadth-first order.
pub fn breadth_first_search<G>(graph: &G, source: &Vertex<G::Data>) -> Vec<Vertex<G::Data>>
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
    let order: Vec<_> = Bfs::new(graph, source).collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(source = source.index, visited = order.len(), "bfs complete");
    order
}
