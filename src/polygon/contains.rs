//! Point-in-polygon testing.

use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::segment_crossing;
use num_traits::Float;

/// Tests if a point lies inside a polygon (Jordan curve parity test).
///
/// Casts two vertical rays from the point, one toward +y and one toward
/// -y, and counts how many boundary edges each crosses. The point is
/// inside iff **both** counts are odd. A single ray can report an even
/// count when it merely grazes the boundary; requiring both rays to agree
/// filters that case out.
///
/// Within one ray's scan, a crossing at a vertex is produced by both
/// edges incident to that vertex; the duplicate hit is suppressed so the
/// vertex counts once.
///
/// Points on the boundary may test either way.
pub fn polygon_contains<F: Float>(shape: &Polygon<F>, point: Point2<F>, eps: F) -> bool {
    let reach = ray_reach::<F>();
    let up = Segment2::new(point, Point2::new(point.x, reach));
    let down = Segment2::new(point, Point2::new(point.x, -reach));

    odd_crossings(shape, up, eps) && odd_crossings(shape, down, eps)
}

/// How far the cast rays extend along the y axis.
///
/// Large enough to exceed any plausible coordinate, small enough that
/// products with coordinate-sized values stay finite.
#[inline]
fn ray_reach<F: Float>() -> F {
    F::max_value().sqrt()
}

fn odd_crossings<F: Float>(shape: &Polygon<F>, ray: Segment2<F>, eps: F) -> bool {
    // Exact equality here: duplicate hits come from adjacent edges
    // producing the same computed point.
    let mut hits: Vec<Point2<F>> = Vec::new();

    for edge in shape.edges() {
        if let Some(hit) = segment_crossing(ray, edge, eps) {
            if !hits.contains(&hit) {
                hits.push(hit);
            }
        }
    }

    hits.len() % 2 == 1
}
