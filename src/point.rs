//! Point and tour value types.
//!
//! A `Point` is supplied by the caller and never mutated by the planner.
//! A `Tour` is an ordered permutation of a point set, produced by
//! construction and replaced (not edited across call boundaries) by
//! optimization.

use serde::{Deserialize, Serialize};

use crate::distance::path_length;

/// A location to visit.
///
/// `id` is a stable identity, independent of where the point sits in any
/// ordering. Ids must be unique within a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An open visiting order over a point set.
///
/// The path starts at the first point and ends at the last; the two ends
/// are not joined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    points: Vec<Point>,
}

impl Tour {
    /// Creates a tour from points already in visiting order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the points in visiting order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the tour and returns the owned points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Point ids in visiting order.
    pub fn ids(&self) -> Vec<u32> {
        self.points.iter().map(|point| point.id).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length of the open path, computed from scratch.
    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }
}
