//! Overlap boundary points of two polygons.

use crate::polygon::{polygon_contains, Polygon};
use crate::primitives::Point2;
use crate::tolerance::{default_epsilon, points_coincide, segment_crossing};
use num_traits::Float;

/// Computes the boundary points of the region where two polygons overlap,
/// with the default tolerance.
///
/// The result contains every vertex of either polygon that lies inside
/// the other, plus every point where an edge of one polygon crosses an
/// edge of the other. It is a point set, not a polygon: points appear in
/// discovery order, which is not a boundary traversal, and no ordering
/// should be relied on. Returns an empty vector when the polygons neither
/// overlap nor contain each other's vertices.
///
/// Degenerate input (fewer than 3 vertices, self-intersecting boundaries)
/// is not rejected and produces implementation-defined output; use
/// [`Polygon::validate`] first for a controlled failure.
///
/// # Example
///
/// ```
/// use polycross::{polygon_overlap_points, Polygon};
///
/// let a: Polygon<f64> = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
/// let b = Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
///
/// let points = polygon_overlap_points(&a, &b);
/// assert_eq!(points.len(), 4);
/// ```
pub fn polygon_overlap_points<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Vec<Point2<F>> {
    polygon_overlap_points_with(a, b, default_epsilon())
}

/// Computes the overlap boundary points with an explicit tolerance.
///
/// `eps` governs both the segment-extent acceptance inside
/// [`segment_crossing`] and the deduplication of crossing points.
pub fn polygon_overlap_points_with<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    eps: F,
) -> Vec<Point2<F>> {
    let mut answer: Vec<Point2<F>> = Vec::new();

    // Vertex membership is exact; crossing membership below is tolerant.
    for &v in &a.vertices {
        if !answer.contains(&v) && polygon_contains(b, v, eps) {
            answer.push(v);
        }
    }
    for &v in &b.vertices {
        if !answer.contains(&v) && polygon_contains(a, v, eps) {
            answer.push(v);
        }
    }

    for s1 in a.edges() {
        for s2 in b.edges() {
            if let Some(hit) = segment_crossing(s1, s2, eps) {
                if !answer.iter().any(|&q| points_coincide(hit, q, eps)) {
                    answer.push(hit);
                }
            }
        }
    }

    answer
}
