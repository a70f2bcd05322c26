//! Fixed point layouts for deterministic tests.
//!
//! Court layouts use the default 800 x 600 region with the 20 unit margin,
//! so every coordinate lies in [20, 780] x [20, 580].

use tour_planner::point::Point;

/// Builds points with ids `0..coords.len()` in the given order.
pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| Point::new(id as u32, x, y))
        .collect()
}

// ============================================================================
// Geometric scenarios
// ============================================================================

/// Unit square fed in crossed order: (0,0), (1,1), (0,1), (1,0).
pub const UNIT_SQUARE_CROSSED: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)];

/// Four collinear points, shuffled, starting at the left end.
pub const COLLINEAR_FROM_LEFT: &[(f64, f64)] = &[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)];

/// Four collinear points, shuffled, starting at the right end.
pub const COLLINEAR_FROM_RIGHT: &[(f64, f64)] = &[(3.0, 0.0), (1.0, 0.0), (0.0, 0.0), (2.0, 0.0)];

// ============================================================================
// Court layouts
// ============================================================================

/// Six balls, the default game size.
pub const SIX_BALLS: &[(f64, f64)] = &[
    (120.0, 80.0),
    (640.0, 520.0),
    (400.0, 300.0),
    (90.0, 500.0),
    (700.0, 100.0),
    (380.0, 60.0),
];

/// Twelve balls clustered near both baselines.
pub const BASELINE_CLUSTERS: &[(f64, f64)] = &[
    (40.0, 40.0),
    (760.0, 560.0),
    (60.0, 90.0),
    (740.0, 510.0),
    (110.0, 50.0),
    (700.0, 550.0),
    (35.0, 130.0),
    (770.0, 470.0),
    (140.0, 110.0),
    (660.0, 500.0),
    (90.0, 160.0),
    (720.0, 440.0),
];

/// Points on a 5 x 4 grid with 100 unit spacing, listed column-major.
pub fn grid_layout() -> Vec<Point> {
    let mut coords = Vec::with_capacity(20);
    for col in 0..5 {
        for row in 0..4 {
            coords.push((100.0 + col as f64 * 100.0, 100.0 + row as f64 * 100.0));
        }
    }
    points(&coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_layouts_inside_margin() {
        for &(x, y) in SIX_BALLS.iter().chain(BASELINE_CLUSTERS) {
            assert!((20.0..=780.0).contains(&x), "x out of range: {}", x);
            assert!((20.0..=580.0).contains(&y), "y out of range: {}", y);
        }
    }

    #[test]
    fn test_points_assigns_sequential_ids() {
        let pts = points(SIX_BALLS);
        let ids = pts.iter().map(|point| point.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }
}
