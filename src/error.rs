//! A module for the errors surfaced by graph queries.

use thiserror::Error;

/// Errors returned by graph queries.
///
/// Insertion, counting, ranking and inversion never fail; only lookups rooted at a vertex and the
/// checked density computation do.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The queried vertex isn't a key in the graph. Contains the `Debug` rendering of the key.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// The graph has too few vertices for the density to be defined.
    #[error("density is undefined for a graph with {vertices} vertices")]
    DegenerateInput { vertices: usize },

    /// The batch computation was interrupted through its abort flag.
    #[error("computation aborted")]
    Aborted,
}

/// A result defaulting to [`GraphError`].
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
