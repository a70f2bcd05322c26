//! Tour planner solver: nearest-neighbor construction, then 2-opt.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::construct::nearest_neighbor;
use crate::error::{Result, TourError};
use crate::point::{Point, Tour};
use crate::two_opt::{TwoOptOptions, improve};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Options for the 2-opt refinement phase.
    #[serde(default)]
    pub two_opt: TwoOptOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub tour: Tour,
    /// Length of `tour` as an open path.
    pub length: f64,
    /// Length of the nearest-neighbor tour before refinement.
    pub initial_length: f64,
    pub passes: usize,
    pub moves: usize,
    pub converged: bool,
}

impl Solution {
    fn trivial(tour: Tour) -> Self {
        Self {
            tour,
            length: 0.0,
            initial_length: 0.0,
            passes: 0,
            moves: 0,
            converged: true,
        }
    }
}

/// Computes a short open tour over `points`.
///
/// The tour starts at the first input point. Identical input yields
/// identical output. Invalid input is rejected before any work is done.
pub fn solve(points: &[Point], options: &SolveOptions) -> Result<Solution> {
    let span = debug_span!("solve", n = points.len());
    let _enter = span.enter();

    if let Err(err) = validate(points) {
        debug!(%err, "rejected point set");
        return Err(err);
    }

    let initial = nearest_neighbor(points);
    if points.len() <= 1 {
        return Ok(Solution::trivial(initial));
    }

    let initial_length = initial.length();
    debug!(initial_length, "built nearest-neighbor tour");

    let improvement = improve(initial, &options.two_opt);
    debug!(
        length = improvement.length,
        passes = improvement.passes,
        moves = improvement.moves,
        converged = improvement.converged,
        "solved"
    );

    Ok(Solution {
        tour: improvement.tour,
        length: improvement.length,
        initial_length,
        passes: improvement.passes,
        moves: improvement.moves,
        converged: improvement.converged,
    })
}

/// Checks that every coordinate is finite and every id is unique.
pub fn validate(points: &[Point]) -> Result<()> {
    let mut seen = HashSet::with_capacity(points.len());

    for point in points {
        if !point.is_finite() {
            return Err(TourError::NonFiniteCoordinate {
                id: point.id,
                x: point.x,
                y: point.y,
            });
        }
        if !seen.insert(point.id) {
            return Err(TourError::DuplicateId(point.id));
        }
    }

    Ok(())
}
