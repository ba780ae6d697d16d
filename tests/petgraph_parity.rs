//! Cross-checks traversal results against `petgraph` on seeded random graphs.

use graphkit::{AdjacencyList, AdjacencyMatrix, Graph, Traversal, Vertex};
use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Dfs};
use std::collections::HashSet;

/// Small deterministic LCG so the fixtures need no RNG dependency.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

fn random_edges(seed: u64, n: usize, m: usize) -> Vec<(usize, usize)> {
    let mut rng = Lcg(seed);
    (0..m).map(|_| (rng.next(n), rng.next(n))).collect()
}

fn petgraph_of(n: usize, edges: &[(usize, usize)]) -> DiGraph<usize, ()> {
    let mut g = DiGraph::new();
    let nodes: Vec<_> = (0..n).map(|i| g.add_node(i)).collect();
    for &(u, v) in edges {
        g.add_edge(nodes[u], nodes[v], ());
    }
    g
}

fn ours<G: Graph<Data = usize>>(mut graph: G, n: usize, edges: &[(usize, usize)]) -> (G, Vec<Vertex<usize>>) {
    let vertices: Vec<_> = (0..n).map(|i| graph.create_vertex(i)).collect();
    for &(u, v) in edges {
        graph.add_directed_edge(&vertices[u], &vertices[v], Some(1.0));
    }
    (graph, vertices)
}

fn index_set(order: &[Vertex<usize>]) -> HashSet<usize> {
    order.iter().map(|v| v.index).collect()
}

#[test]
fn reachability_matches_petgraph() {
    for seed in 0..32 {
        let n = 20;
        let edges = random_edges(seed, n, 30);
        let pg = petgraph_of(n, &edges);
        let (list, lv) = ours(AdjacencyList::new(), n, &edges);
        let (matrix, mv) = ours(AdjacencyMatrix::new(), n, &edges);

        for s in 0..n {
            let mut bfs = Bfs::new(&pg, NodeIndex::new(s));
            let mut expected = HashSet::new();
            while let Some(node) = bfs.next(&pg) {
                expected.insert(node.index());
            }

            let mut dfs = Dfs::new(&pg, NodeIndex::new(s));
            let mut expected_dfs = HashSet::new();
            while let Some(node) = dfs.next(&pg) {
                expected_dfs.insert(node.index());
            }
            assert_eq!(expected, expected_dfs);

            assert_eq!(index_set(&list.breadth_first_search(&lv[s])), expected, "seed {seed}, source {s}");
            assert_eq!(index_set(&matrix.breadth_first_search(&mv[s])), expected, "seed {seed}, source {s}");
            assert_eq!(index_set(&list.depth_first_search(&lv[s])), expected, "seed {seed}, source {s}");
            assert_eq!(index_set(&matrix.depth_first_search(&mv[s])), expected, "seed {seed}, source {s}");
        }
    }
}

#[test]
fn reachable_cycles_match_strongly_connected_components() {
    for seed in 100..132 {
        let n = 15;
        let edges = random_edges(seed, n, 18);
        let pg = petgraph_of(n, &edges);
        let (list, lv) = ours(AdjacencyList::new(), n, &edges);
        let (matrix, mv) = ours(AdjacencyMatrix::new(), n, &edges);

        // A vertex sits on a cycle iff its SCC has several members or a self-loop.
        let mut cyclic = vec![false; n];
        for component in kosaraju_scc(&pg) {
            let on_cycle = component.len() > 1
                || component.iter().any(|&node| pg.contains_edge(node, node));
            for node in component {
                cyclic[node.index()] = on_cycle;
            }
        }

        for s in 0..n {
            let reachable = index_set(&list.breadth_first_search(&lv[s]));
            let expected = reachable.iter().any(|&v| cyclic[v]);
            assert_eq!(list.has_cycle(&lv[s]), expected, "seed {seed}, source {s}");
            assert_eq!(matrix.has_cycle(&mv[s]), expected, "seed {seed}, source {s}");
        }
    }
}
