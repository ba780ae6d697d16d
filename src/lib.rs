//! # `graphkit` - Interchangeable Graph Backends
//!
//! A small graph toolkit built around one capability trait, [`Graph`], with
//! two storage backends that satisfy it and a set of traversals that run on
//! either one.
//!
//! ## Key Features
//!
//! - **Value-typed vertices**: [`Vertex`] is an `(index, data)` pair handed out
//!   by value; [`Edge`] is a directed `(source, destination, weight)` triple.
//! - **Two backends**: [`AdjacencyList`] for sparse graphs and
//!   [`AdjacencyMatrix`] for dense graphs with \(O(1)\) weight lookup.
//! - **Derived insertion**: undirected edges and [`EdgeKind`] dispatch are
//!   provided once by the trait on top of directed insertion.
//! - **Generic traversals**: [`breadth_first_search`], [`depth_first_search`]
//!   and [`has_cycle`] accept any backend whose vertex data is hashable.
//!
//! ## Backend Differences
//!
//! The backends agree on every trait operation except repeated insertion of
//! the same directed pair: the list keeps each insertion as a parallel edge,
//! the matrix overwrites the previous weight. Passing a vertex from another
//! graph yields empty queries on both; inserting it into a matrix panics (or
//! returns [`GraphError`] through
//! [`AdjacencyMatrix::try_add_directed_edge`]) while the list drops the edge.
//!
//! ## Concurrency
//!
//! All operations are synchronous and run on the caller's thread. Mutation
//! takes `&mut self`, so sharing a backend across threads needs an external
//! lock.
//!
//! ## Logging
//!
//! Enable the `tracing` feature to emit `trace`/`debug` events for vertex and
//! edge creation, dropped edges, traversal completion and detected cycles.
//!
//! ## Example
//!
//! ```rust
//! use graphkit::{AdjacencyList, EdgeKind, Graph, Traversal};
//!
//! let mut graph = AdjacencyList::new();
//! let a = graph.create_vertex("A");
//! let b = graph.create_vertex("B");
//! let c = graph.create_vertex("C");
//!
//! graph.add(EdgeKind::Undirected, &a, &b, Some(1.0));
//! graph.add(EdgeKind::Directed, &b, &c, None);
//!
//! assert_eq!(graph.weight(&b, &a), Some(1.0));
//! let order: Vec<_> = graph.breadth_first_search(&a).into_iter().map(|v| v.data).collect();
//! assert_eq!(order, ["A", "B", "C"]);
//! assert!(graph.has_cycle(&a));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{
    breadth_first_search, depth_first_search, has_cycle, statistics, AdjacencyList,
    AdjacencyMatrix, Bfs, Dfs, Edge, EdgeKind, Graph, GraphError, GraphStatistics, Traversal,
    Vertex,
};

// Compile-time assertions for value-type layout.
const _: () = {
    use core::mem;

    // `EdgeKind` is a fieldless two-variant enum.
    assert!(mem::size_of::<EdgeKind>() == 1);

    // A vertex adds exactly one index word to its payload.
    assert!(mem::size_of::<Vertex<()>>() == mem::size_of::<usize>());
};
