//! Error types for the graphlet library.

use thiserror::Error;

/// All errors that can occur in the graphlet library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not found by name.
    #[error("vertex `{0}` not found in graph")]
    VertexNotFound(String),

    /// A neighbour descriptor has an empty target vertex name.
    #[error("neighbour descriptor under `{0}` has an empty target vertex")]
    MissingTarget(String),

    /// A neighbour descriptor carries a direction outside {-1, 0, 1}.
    #[error("invalid direction {direction} on `{from}` -> `{to}` (expected -1, 0 or 1)")]
    InvalidDirection {
        from: String,
        to: String,
        direction: i8,
    },

    /// Shortest paths require non-negative edge weights.
    #[error("negative weight {weight} on edge `{start}`-`{end}`; shortest paths require non-negative weights")]
    NegativeWeight {
        start: String,
        end: String,
        weight: i64,
    },

    /// A grid description with no rows or no columns.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A grid description whose rows are not all the same length.
    #[error("grid row {row} has length {len}, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Malformed adjacency description (e.g. a descriptor missing its
    /// required `vertex` field).
    #[error("malformed adjacency description: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience result type for graphlet operations.
pub type GraphResult<T> = Result<T, GraphError>;
