//! Prints the overlap boundary points of a triangle and a quadrilateral.
//!
//! Run with `cargo run --example overlap_demo`.

use polycross::{polygon_overlap_points, Polygon};

fn main() {
    let triangle: Polygon<f64> = Polygon::from_coords(&[(4.0, 8.0), (20.6, 10.0), (9.4, 18.1)]);
    let quad = Polygon::from_coords(&[(12.5, 7.0), (18.7, 16.2), (2.0, 12.0), (12.5, 11.3)]);

    for p in polygon_overlap_points(&triangle, &quad) {
        println!("({:.6}, {:.6})", p.x, p.y);
    }
}
