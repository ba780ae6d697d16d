//! Traversal algorithms generic over any [`Graph`] backend.
//!
//! Every algorithm reads the graph exclusively through [`Graph::edges`], so
//! results depend only on the backend's edge ordering, never on its storage.
//! Vertex payloads must be `Eq + Hash + Clone` for visited-set bookkeeping.

mod bfs;
mod cycle;
mod dfs;

use std::hash::Hash;

pub use bfs::{breadth_first_search, Bfs};
pub use cycle::has_cycle;
pub use dfs::{depth_first_search, Dfs};

use crate::graph::{Graph, Vertex};

/// Method-call access to the traversal algorithms.
///
/// Implemented for every [`Graph`] whose vertex data is hashable.
pub trait Traversal: Graph
where
    Self::Data: Eq + Hash + Clone,
{
    /// See [`breadth_first_search`].
    fn breadth_first_search(&self, source: &Vertex<Self::Data>) -> Vec<Vertex<Self::Data>>
    where
        Self: Sized,
    {
        breadth_first_search(self, source)
    }

    /// See [`depth_first_search`].
    fn depth_first_search(&self, source: &Vertex<Self::Data>) -> Vec<Vertex<Self::Data>>
    where
        Self: Sized,
    {
        depth_first_search(self, source)
    }

    /// See [`has_cycle`].
    fn has_cycle(&self, source: &Vertex<Self::Data>) -> bool
    where
        Self: Sized,
    {
        has_cycle(self, source)
    }

    /// Lazy breadth-first iterator from `source`.
    fn bfs(&self, source: &Vertex<Self::Data>) -> Bfs<'_, Self>
    where
        Self: Sized,
    {
        Bfs::new(self, source)
    }

    /// Lazy depth-first iterator from `source`.
    fn dfs(&self, source: &Vertex<Self::Data>) -> Dfs<'_, Self>
    where
        Self: Sized,
    {
        Dfs::new(self, source)
    }
}

impl<G> Traversal for G
where
    G: Graph,
    G::Data: Eq + Hash + Clone,
{
}
