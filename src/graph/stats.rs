//! Degree statistics for any backend.

use crate::graph::Graph;

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
}

/// Computes out-degree statistics in \(O(n + m)\) plus a sort of the degrees.
#[allow(clippy::cast_precision_loss)]
pub fn statistics<G: Graph>(graph: &G) -> GraphStatistics {
    let mut degrees: Vec<usize> = graph
        .vertices()
        .iter()
        .map(|v| graph.edges(v).len())
        .collect();
    degrees.sort_unstable();

    let vertex_count = degrees.len();
    let edge_count: usize = degrees.iter().sum();

    let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => (0, 0),
    };
    let median_degree = if degrees.is_empty() {
        0
    } else if degrees.len() % 2 == 0 {
        let a = degrees[degrees.len() / 2 - 1];
        let b = degrees[degrees.len() / 2];
        (a + b) / 2
    } else {
        degrees[degrees.len() / 2]
    };

    GraphStatistics {
        vertex_count,
        edge_count,
        min_degree,
        max_degree,
        median_degree,
        average_degree: if vertex_count == 0 {
            0.0
        } else {
            edge_count as f64 / vertex_count as f64
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyList, AdjacencyMatrix};

    #[test]
    fn statistics_of_empty_graph() {
        let graph = AdjacencyMatrix::<u8>::new();
        let stats = statistics(&graph);
        assert_eq!(stats.vertex_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert_eq!((stats.min_degree, stats.max_degree, stats.median_degree), (0, 0, 0));
        assert!(stats.average_degree.abs() < f64::EPSILON);
    }

    #[test]
    fn statistics_match_across_backends() {
        let adjacency = [vec![1, 2, 3], vec![2], vec![], vec![1, 2]];

        let mut list = AdjacencyList::new();
        let mut matrix = AdjacencyMatrix::new();
        let lv: Vec<_> = (0..4).map(|i| list.create_vertex(i)).collect();
        let mv: Vec<_> = (0..4).map(|i| matrix.create_vertex(i)).collect();
        for (u, nbrs) in adjacency.iter().enumerate() {
            for &v in nbrs {
                list.add_directed_edge(&lv[u], &lv[v], None);
                matrix.add_directed_edge(&mv[u], &mv[v], None);
            }
        }

        let stats = statistics(&list);
        assert_eq!(stats, statistics(&matrix));
        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.edge_count, 6);
        assert_eq!(stats.min_degree, 0);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.median_degree, 1); // sorted: 0,1,2,3 -> (1+2)/2 = 1
        assert!((stats.average_degree - 1.5).abs() < 0.001);
    }
}
