//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Segments are directed (`start` to `end`), though none of the crossing
/// predicates depend on the direction. The vertical rays used by the
/// containment test are represented as degenerate segments of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the point at parameter `t` along the segment: `t = 0` is
    /// `start`, `t = 1` is `end`, and values outside [0, 1] extrapolate
    /// along the carrier line.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the segment's extent along the x axis as `(min, max)`.
    #[inline]
    pub fn x_extent(self) -> (F, F) {
        (
            self.start.x.min(self.end.x),
            self.start.x.max(self.end.x),
        )
    }

    /// Returns the segment's extent along the y axis as `(min, max)`.
    #[inline]
    pub fn y_extent(self) -> (F, F) {
        (
            self.start.y.min(self.end.y),
            self.start.y.max(self.end.y),
        )
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.start.x, 1.0);
        assert_eq!(s.start.y, 2.0);
        assert_eq!(s.end.x, 3.0);
        assert_eq!(s.end.y, 4.0);
    }

    #[test]
    fn test_direction() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 4.0, 5.0);
        let d = s.direction();
        assert_eq!(d.x, 3.0);
        assert_eq!(d.y, 4.0);
    }

    #[test]
    fn test_point_at() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.point_at(0.0).x, 0.0);
        assert_eq!(s.point_at(1.0).x, 10.0);
        assert_eq!(s.point_at(0.5).x, 5.0);
    }

    #[test]
    fn test_extents_ignore_direction() {
        let s: Segment2<f64> = Segment2::from_coords(7.0, -2.0, 3.0, 5.0);
        assert_eq!(s.x_extent(), (3.0, 7.0));
        assert_eq!(s.y_extent(), (-2.0, 5.0));

        let r: Segment2<f64> = Segment2::from_coords(3.0, 5.0, 7.0, -2.0);
        assert_eq!(r.x_extent(), s.x_extent());
        assert_eq!(r.y_extent(), s.y_extent());
    }

    #[test]
    fn test_degenerate_extents() {
        let s: Segment2<f64> = Segment2::from_coords(2.0, 2.0, 2.0, 2.0);
        assert_eq!(s.x_extent(), (2.0, 2.0));
        assert_eq!(s.y_extent(), (2.0, 2.0));
    }
}
