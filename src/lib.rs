//! polycross - Overlap boundary points for simple 2D polygons
//!
//! Given two simple (possibly non-convex) polygons, this crate computes the
//! vertex set of the region where they overlap: vertices of either polygon
//! that lie inside the other, plus the points where their edges cross. The
//! result is an unordered point set, not a reconstructed polygon; no
//! boundary traversal is implied.

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::PolygonError;
pub use polygon::{polygon_contains, polygon_overlap_points, polygon_overlap_points_with, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{
    approx_eq, approx_le, default_epsilon, points_coincide, segment_crossing,
    segment_crossing_tolerant,
};
