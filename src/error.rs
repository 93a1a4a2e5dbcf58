use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::Graph) from outside data.
///
/// The algorithms themselves never fail; every variant here describes input
/// that must be rejected before a graph exists.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The leading vertex count token is missing or not a number.
    #[error("Failed to read matrix size")]
    MissingVertexCount,

    /// The vertex count parses but its n*n matrix cannot be addressed.
    #[error("Matrix size {0} is too large")]
    VertexCountTooLarge(usize),

    /// Fewer than n*n matrix cells were present.
    #[error("Failed to read matrix data: expected {expected} entries, read {found}")]
    TruncatedMatrix { expected: usize, found: usize },

    /// Vertex count plus total edge weight does not fit in a `usize`.
    #[error("Total edge weight overflows the graph size")]
    WeightOverflow,

    /// A row of a supplied matrix has the wrong length.
    #[error("Matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
