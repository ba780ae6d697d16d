//! Builds the two sample graphs on both backends and prints their traversals.
//!
//! Run with `cargo run --example basic_usage`.

use graphkit::{statistics, AdjacencyList, AdjacencyMatrix, EdgeKind, Graph, Traversal, Vertex};

fn populate<G>(graph: &mut G, kind: EdgeKind, edges: &[(usize, usize)]) -> Vec<Vertex<&'static str>>
where
    G: Graph<Data = &'static str>,
{
    let vertices: Vec<_> = ["A", "B", "C", "D", "E", "F", "G", "H"]
        .into_iter()
        .map(|name| graph.create_vertex(name))
        .collect();
    for &(u, v) in edges {
        graph.add(kind, &vertices[u], &vertices[v], None);
    }
    vertices
}

fn show(label: &str, order: &[Vertex<&str>]) {
    println!("{label}:");
    for vertex in order {
        println!("  {vertex}");
    }
}

fn main() {
    let undirected = [(0, 1), (0, 2), (0, 3), (1, 4), (2, 5), (2, 6), (4, 7), (4, 5), (5, 6)];
    let directed = [(0, 1), (0, 2), (0, 3), (1, 4), (1, 0), (2, 6), (4, 5), (4, 7), (5, 6), (5, 2)];

    println!("=== Breadth-first search (undirected) ===");
    let mut list = AdjacencyList::new();
    let lv = populate(&mut list, EdgeKind::Undirected, &undirected);
    show("adjacency list", &list.breadth_first_search(&lv[0]));

    let mut matrix = AdjacencyMatrix::new();
    let mv = populate(&mut matrix, EdgeKind::Undirected, &undirected);
    show("adjacency matrix", &matrix.breadth_first_search(&mv[0]));

    println!("\n=== Depth-first search (directed) ===");
    let mut list = AdjacencyList::new();
    let lv = populate(&mut list, EdgeKind::Directed, &directed);
    show("adjacency list", &list.depth_first_search(&lv[0]));
    println!("has cycle from A: {}", list.has_cycle(&lv[0]));

    let mut matrix = AdjacencyMatrix::new();
    let mv = populate(&mut matrix, EdgeKind::Directed, &directed);
    show("adjacency matrix", &matrix.depth_first_search(&mv[0]));
    println!("has cycle from A: {}", matrix.has_cycle(&mv[0]));

    println!("\n{:#?}", statistics(&matrix));
}
