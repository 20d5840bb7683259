use thiserror::Error;

use crate::graph::Vertex;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error(
        "vertex {vertex} is outside the graph (vertex count {vertex_count})"
    )]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("negative-weight cycle reachable from the source")]
    NegativeCycle,

    #[error("cell ({row}, {col}) is outside the grid")]
    CellOutOfRange { row: usize, col: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to parse GFA: {0}")]
    Gfa(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
