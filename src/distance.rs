//! Euclidean distance and open-path length.
//!
//! Coordinates are planar; ids play no part in any distance.

use crate::point::Point;

/// Straight-line distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Sum of distances between consecutive points.
///
/// The last point is not joined back to the first. Sequences of zero or
/// one point have length zero.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .fold(0.0, |total, edge| total + edge)
}
