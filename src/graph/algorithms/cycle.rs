//! Cycle detection from a source vertex.
//!
//! A depth-first walk tracks the vertices on the current path. Reaching one
//! of them again is a back-edge, hence a cycle. Vertices whose subtrees are
//! exhausted move to a finished set and are never re-entered, so each vertex
//! and edge is explored at most once.

use std::hash::Hash;

use crate::graph::access::visited::VisitedSet;
use crate::graph::{Graph, Vertex};

/// Returns true if a cycle is reachable from `source`.
///
/// Only the subgraph reachable from `source` is examined; a cycle elsewhere
/// in the graph is not reported. Self-loops count as cycles.
pub fn has_cycle<G>(graph: &G, source: &Vertex<G::Data>) -> bool
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
    let mut on_path = VisitedSet::new();
    let mut finished = VisitedSet::new();

    on_path.try_visit(source);
    let mut stack = vec![(source.clone(), graph.edges(source).into_iter())];

    while let Some((_, edges)) = stack.last_mut() {
        if let Some(edge) = edges.next() {
            let next = edge.destination;
            if on_path.is_visited(&next) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    from = edge.source.index,
                    to = next.index,
                    "back-edge found, graph has a cycle"
                );
                return true;
            }
            if !finished.is_visited(&next) {
                on_path.try_visit(&next);
                let next_edges = graph.edges(&next).into_iter();
                stack.push((next, next_edges));
            }
        } else if let Some((vertex, _)) = stack.pop() {
            on_path.remove(&vertex);
            finished.try_visit(&vertex);
        }
    }

    false
}
