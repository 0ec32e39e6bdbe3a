//! Polygon type, containment testing, and overlap computation.
//!
//! # Example
//!
//! ```
//! use polycross::{polygon_overlap_points, Polygon};
//!
//! // Two overlapping squares
//! let a: Polygon<f64> = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
//! let b = Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
//!
//! // One contained vertex from each square, plus two edge crossings
//! let points = polygon_overlap_points(&a, &b);
//! assert_eq!(points.len(), 4);
//! ```

mod contains;
mod core;
mod overlap;

pub use contains::polygon_contains;
pub use core::Polygon;
pub use overlap::{polygon_overlap_points, polygon_overlap_points_with};
