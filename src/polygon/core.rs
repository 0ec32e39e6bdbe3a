//! Core polygon type.

use crate::error::PolygonError;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::default_epsilon;
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first, and no closure point is stored. Construction accepts any vertex
/// list, including degenerate ones; see [`Polygon::validate`] for the
/// opt-in sanity check.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon, in boundary order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from coordinate pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self {
            vertices: coords.iter().map(|&c| c.into()).collect(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the boundary edges.
    ///
    /// Yields one segment per vertex, `(vertex[i], vertex[(i + 1) % n])`,
    /// so the last edge wraps back to the first vertex. A single-vertex
    /// polygon yields one zero-length segment.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Tests if a point lies inside the polygon, with the default tolerance.
    ///
    /// See [`polygon_contains`](crate::polygon::polygon_contains).
    pub fn contains(&self, point: Point2<F>) -> bool {
        crate::polygon::polygon_contains(self, point, default_epsilon())
    }

    /// Computes the overlap boundary points against another polygon.
    ///
    /// See [`polygon_overlap_points`](crate::polygon::polygon_overlap_points).
    pub fn overlap_points(&self, other: &Self) -> Vec<Point2<F>> {
        crate::polygon::polygon_overlap_points(self, other)
    }

    /// Checks that the polygon is usable as a non-degenerate input.
    ///
    /// Reports fewer than 3 vertices or a non-finite coordinate. The
    /// overlap computation never calls this; degenerate input there
    /// produces meaningless output rather than an error.
    pub fn validate(&self) -> Result<(), PolygonError> {
        if self.vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                found: self.vertices.len(),
            });
        }
        for (index, v) in self.vertices.iter().enumerate() {
            if !v.x.is_finite() || !v.y.is_finite() {
                return Err(PolygonError::NonFiniteVertex { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let poly: Polygon<f64> = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.vertices[2], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_edges_wrap_around() {
        let poly: Polygon<f64> = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let edges: Vec<_> = poly.edges().collect();

        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].start, Point2::new(0.0, 0.0));
        assert_eq!(edges[0].end, Point2::new(1.0, 0.0));
        // Closing edge back to the first vertex
        assert_eq!(edges[2].start, Point2::new(1.0, 1.0));
        assert_eq!(edges[2].end, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_edges_single_vertex() {
        let poly: Polygon<f64> = Polygon::from_coords(&[(2.0, 3.0)]);
        let edges: Vec<_> = poly.edges().collect();

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].start, edges[0].end);
    }

    #[test]
    fn test_edges_empty() {
        let poly: Polygon<f64> = Polygon::new(Vec::new());
        assert!(poly.is_empty());
        assert_eq!(poly.edges().count(), 0);
    }

    #[test]
    fn test_validate_ok() {
        let poly: Polygon<f64> = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);
        assert!(poly.validate().is_ok());
    }

    #[test]
    fn test_validate_too_few_vertices() {
        let poly: Polygon<f64> = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            poly.validate(),
            Err(PolygonError::TooFewVertices { found: 2 })
        );
    }

    #[test]
    fn test_validate_non_finite() {
        let poly: Polygon<f64> =
            Polygon::from_coords(&[(0.0, 0.0), (1.0, f64::NAN), (0.5, 1.0)]);
        assert_eq!(
            poly.validate(),
            Err(PolygonError::NonFiniteVertex { index: 1 })
        );
    }
}
