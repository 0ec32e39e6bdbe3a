//! Tolerant scalar and point comparison.

use crate::primitives::Point2;
use num_traits::Float;

/// The default comparison tolerance, 1e-4.
///
/// Used for both segment-extent acceptance and crossing deduplication.
/// The exact counterpart of [`points_coincide`] is `Point2`'s derived
/// `PartialEq`; contained-vertex deduplication uses that one.
#[inline]
pub fn default_epsilon<F: Float>() -> F {
    F::from(1.0e-4).unwrap()
}

/// Returns `true` if `a` is less than or approximately equal to `b`.
///
/// Holds when `a < b` or when the two values differ by less than `eps`.
#[inline]
pub fn approx_le<F: Float>(a: F, b: F, eps: F) -> bool {
    a < b || (a - b).abs() < eps
}

/// Returns `true` if `a` and `b` differ by less than `eps`.
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() < eps
}

/// Returns `true` if `p` and `q` are within `eps` of each other in both
/// coordinates.
///
/// This is a per-axis test, not a Euclidean distance test.
#[inline]
pub fn points_coincide<F: Float>(p: Point2<F>, q: Point2<F>, eps: F) -> bool {
    approx_eq(p.x, q.x, eps) && approx_eq(p.y, q.y, eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-4;

    #[test]
    fn test_approx_le_strictly_less() {
        assert!(approx_le(1.0, 2.0, EPS));
        assert!(!approx_le(2.0, 1.0, EPS));
    }

    #[test]
    fn test_approx_le_within_tolerance() {
        // Slightly greater, but within eps
        assert!(approx_le(1.00005, 1.0, EPS));
        // Greater by more than eps
        assert!(!approx_le(1.001, 1.0, EPS));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0, EPS));
        assert!(approx_eq(1.0, 1.00009, EPS));
        assert!(!approx_eq(1.0, 1.0002, EPS));
    }

    #[test]
    fn test_points_coincide_both_axes_required() {
        let p = Point2::new(1.0, 1.0);
        assert!(points_coincide(p, Point2::new(1.00005, 0.99995), EPS));
        // One axis out of tolerance is enough to differ
        assert!(!points_coincide(p, Point2::new(1.00005, 1.001), EPS));
        assert!(!points_coincide(p, Point2::new(1.001, 1.00005), EPS));
    }

    #[test]
    fn test_default_epsilon_value() {
        assert_eq!(default_epsilon::<f64>(), 1.0e-4);
        assert_eq!(default_epsilon::<f32>(), 1.0e-4_f32);
    }
}
