//! Errors reported at the graph API boundary.

use core::fmt;

/// Contract violations detected by a graph backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index does not belong to this graph, usually because the
    /// vertex was issued by a different backend instance.
    VertexOutOfBounds {
        /// The offending vertex index.
        index: usize,
        /// Number of vertices the graph currently holds.
        vertex_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfBounds {
                index,
                vertex_count,
            } => write!(
                f,
                "vertex {index} out of bounds for graph with {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message() {
        let err = GraphError::VertexOutOfBounds {
            index: 7,
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "vertex 7 out of bounds for graph with 3 vertices"
        );
    }
}
