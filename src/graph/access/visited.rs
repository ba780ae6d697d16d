//! Hash-keyed visited sets for graph traversals.
//!
//! Traversals identify vertices by value (index plus payload), so membership
//! lives in a `HashSet<Vertex<T>>` rather than a dense bitmap. Keeping it
//! behind one type lets BFS, DFS and cycle detection express their visited
//! logic the same way.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::Vertex;

/// Vertices already seen by a traversal.
pub(crate) struct VisitedSet<T> {
    seen: HashSet<Vertex<T>>,
}

impl<T: Eq + Hash + Clone> VisitedSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, vertex: &Vertex<T>) -> bool {
        if self.seen.contains(vertex) {
            false
        } else {
            self.seen.insert(vertex.clone())
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, vertex: &Vertex<T>) -> bool {
        self.seen.contains(vertex)
    }

    /// Unmarks a vertex; returns whether it was marked.
    #[inline]
    pub(crate) fn remove(&mut self, vertex: &Vertex<T>) -> bool {
        self.seen.remove(vertex)
    }
}
