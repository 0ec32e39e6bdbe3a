//! Segment crossing predicate.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::approx_le;
use num_traits::Float;

/// Computes the crossing point of two segments, if any.
///
/// Solves for the parameter `t` along `s1` with Cramer's rule, then accepts
/// the candidate point only if it lies within the axis-aligned extent of
/// **both** segments on **both** axes, each bound checked with
/// [`approx_le`](crate::tolerance::approx_le) against `eps`. For a point
/// already known to lie on both carrier lines, that extent test is
/// equivalent to the parametric range test `0 <= t <= 1` on each segment.
///
/// A determinant of exactly zero (parallel, anti-parallel, or collinear
/// segments, and any segment of zero length) yields `None` without
/// dividing. No tolerance is applied to that test; see
/// [`segment_crossing_tolerant`] for a variant that treats near-parallel
/// segments as parallel.
///
/// # Example
///
/// ```
/// use polycross::{segment_crossing, Segment2};
///
/// let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 10.0);
/// let s2 = Segment2::from_coords(0.0, 10.0, 10.0, 0.0);
///
/// let hit = segment_crossing(s1, s2, 1e-4).unwrap();
/// assert_eq!(hit.x, 5.0);
/// assert_eq!(hit.y, 5.0);
/// ```
#[inline]
pub fn segment_crossing<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> Option<Point2<F>> {
    crossing(s1, s2, eps, F::zero())
}

/// Like [`segment_crossing`], but treats segments whose determinant is
/// within `parallel_eps` of zero as parallel.
///
/// Near-parallel segments produce ill-conditioned crossing points under
/// the default predicate; this variant rejects them instead. It is opt-in
/// and never changes the behavior of [`segment_crossing`].
#[inline]
pub fn segment_crossing_tolerant<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
    parallel_eps: F,
) -> Option<Point2<F>> {
    crossing(s1, s2, eps, parallel_eps)
}

fn crossing<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
    parallel_eps: F,
) -> Option<Point2<F>> {
    let d1 = s1.direction();
    let d2 = s2.direction();

    // With parallel_eps = 0 this accepts only an exactly-zero determinant.
    let denom = d1.cross(d2);
    if denom.abs() <= parallel_eps {
        return None;
    }

    let t = (s2.start - s1.start).cross(d2) / denom;
    let candidate = s1.point_at(t);

    if within_extent(candidate.x, s1.x_extent(), eps)
        && within_extent(candidate.x, s2.x_extent(), eps)
        && within_extent(candidate.y, s1.y_extent(), eps)
        && within_extent(candidate.y, s2.y_extent(), eps)
    {
        Some(candidate)
    } else {
        None
    }
}

#[inline]
fn within_extent<F: Float>(v: F, (lo, hi): (F, F), eps: F) -> bool {
    approx_le(lo, v, eps) && approx_le(v, hi, eps)
}
