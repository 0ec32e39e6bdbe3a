//! Error types for opt-in polygon validation.

use thiserror::Error;

/// Errors reported by [`Polygon::validate`](crate::Polygon::validate).
///
/// The overlap computation itself never validates its inputs and never
/// fails; callers who want a controlled failure for malformed polygons
/// run validation first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Fewer vertices than a non-degenerate polygon requires.
    #[error("polygon needs at least 3 vertices, found {found}")]
    TooFewVertices {
        /// Number of vertices provided.
        found: usize,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Index of the offending vertex.
        index: usize,
    },
}
