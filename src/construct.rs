//! Nearest-neighbor tour construction.

use tracing::trace;

use crate::distance::distance;
use crate::point::{Point, Tour};

/// Builds an initial tour greedily.
///
/// Starts at the first input point and always moves to the closest
/// unvisited point. Ties go to the point with the lowest input index, so
/// the result depends only on the input order and coordinates.
pub fn nearest_neighbor(points: &[Point]) -> Tour {
    let Some(first) = points.first() else {
        return Tour::default();
    };

    let mut visited = vec![false; points.len()];
    let mut order = Vec::with_capacity(points.len());

    visited[0] = true;
    order.push(*first);
    let mut current = first;

    while order.len() < points.len() {
        let mut nearest: Option<(usize, f64)> = None;

        for (index, candidate) in points.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let dist = distance(current, candidate);
            // Strict comparison keeps the lowest index on ties.
            if nearest.is_none_or(|(_, best)| dist < best) {
                nearest = Some((index, dist));
            }
        }

        let Some((index, dist)) = nearest else {
            break;
        };

        trace!(from = current.id, to = points[index].id, dist, "nearest neighbor step");
        visited[index] = true;
        order.push(points[index]);
        current = &points[index];
    }

    Tour::new(order)
}
