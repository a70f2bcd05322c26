//! Seeded random point sets for a rectangular region.
//!
//! This is the only source of randomness in the crate. Solving itself is
//! deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TourError};
use crate::point::Point;

const DEFAULT_REGION_WIDTH: f64 = 800.0;
const DEFAULT_REGION_HEIGHT: f64 = 600.0;
const DEFAULT_POINT_COUNT: u32 = 6;

/// Keeps generated points away from the region border.
const DEFAULT_MARGIN: f64 = 20.0;

/// Region and cardinality for generated point sets.
///
/// Only affects generation; the solver never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub region_width: f64,
    pub region_height: f64,
    pub point_count: u32,
    pub margin: f64,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            region_width: DEFAULT_REGION_WIDTH,
            region_height: DEFAULT_REGION_HEIGHT,
            point_count: DEFAULT_POINT_COUNT,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl RegionConfig {
    pub fn new(region_width: f64, region_height: f64, point_count: u32) -> Self {
        Self {
            region_width,
            region_height,
            point_count,
            ..Self::default()
        }
    }

    fn invalid(&self) -> TourError {
        TourError::InvalidRegion {
            width: self.region_width,
            height: self.region_height,
            margin: self.margin,
        }
    }
}

/// Places `point_count` points uniformly inside the region, inset by
/// `margin` on every side. Ids are `0..point_count` in generation order.
///
/// The same config and seed always produce the same points.
pub fn generate_points(config: &RegionConfig, seed: u64) -> Result<Vec<Point>> {
    let finite = config.region_width.is_finite()
        && config.region_height.is_finite()
        && config.margin.is_finite();
    if !finite || config.margin < 0.0 {
        return Err(config.invalid());
    }

    let max_x = config.region_width - config.margin;
    let max_y = config.region_height - config.margin;
    if max_x <= config.margin || max_y <= config.margin {
        return Err(config.invalid());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..config.point_count)
        .map(|id| {
            let x = rng.random_range(config.margin..max_x);
            let y = rng.random_range(config.margin..max_y);
            Point::new(id, x, y)
        })
        .collect::<Vec<_>>();

    debug!(
        count = points.len(),
        width = config.region_width,
        height = config.region_height,
        seed,
        "generated point set"
    );

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_court_size() {
        let config = RegionConfig::default();
        assert_eq!(config.region_width, 800.0);
        assert_eq!(config.region_height, 600.0);
        assert_eq!(config.point_count, 6);
        assert_eq!(config.margin, 20.0);
    }

    #[test]
    fn test_same_seed_same_points() {
        let config = RegionConfig::new(400.0, 300.0, 15);
        let first = generate_points(&config, 42).unwrap();
        let second = generate_points(&config, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_points() {
        let config = RegionConfig::new(400.0, 300.0, 15);
        let first = generate_points(&config, 1).unwrap();
        let second = generate_points(&config, 2).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_points_inside_margin() {
        let config = RegionConfig::new(200.0, 100.0, 200);
        let points = generate_points(&config, 7).unwrap();

        assert_eq!(points.len(), 200);
        for point in &points {
            assert!(point.x >= 20.0 && point.x < 180.0, "x out of range: {}", point.x);
            assert!(point.y >= 20.0 && point.y < 80.0, "y out of range: {}", point.y);
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let points = generate_points(&RegionConfig::default(), 3).unwrap();
        let ids = points.iter().map(|point| point.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_points() {
        let config = RegionConfig::new(100.0, 100.0, 0);
        assert!(generate_points(&config, 0).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_region_without_interior() {
        let config = RegionConfig::new(40.0, 600.0, 5);
        assert!(matches!(
            generate_points(&config, 0),
            Err(TourError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_region() {
        let config = RegionConfig::new(f64::INFINITY, 600.0, 5);
        assert!(generate_points(&config, 0).is_err());
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: RegionConfig = serde_json::from_str(r#"{"point_count":12}"#).unwrap();
        assert_eq!(config.point_count, 12);
        assert_eq!(config.region_width, 800.0);
    }
}
