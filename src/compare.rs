//! Scoring a hand-made tour against a solved one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::path_length;
use crate::error::{Result, TourError};
use crate::point::Point;
use crate::solver::{Solution, validate};

/// Gap at or below which a tour rates `Excellent`.
const EXCELLENT_GAP_PERCENT: f64 = 5.0;

/// Gap at or below which a tour rates `Good`.
const GOOD_GAP_PERCENT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    KeepTrying,
}

impl Rating {
    pub fn from_gap(gap_percent: f64) -> Self {
        if gap_percent <= EXCELLENT_GAP_PERCENT {
            Rating::Excellent
        } else if gap_percent <= GOOD_GAP_PERCENT {
            Rating::Good
        } else {
            Rating::KeepTrying
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub human_length: f64,
    pub reference_length: f64,
    /// `None` when the reference tour has zero length.
    pub gap_percent: Option<f64>,
    pub rating: Option<Rating>,
}

/// Percentage by which `candidate` exceeds `reference`.
///
/// Uses the exact lengths, not lengths rounded for display. Negative when
/// the candidate is shorter. `None` when `reference` is not positive,
/// since no meaningful ratio exists.
pub fn gap_percent(candidate: f64, reference: f64) -> Option<f64> {
    (reference > 0.0).then(|| (candidate - reference) / reference * 100.0)
}

/// Compares a hand-made visiting order against `solution`.
///
/// `human` must visit exactly the points of the solved tour, each once,
/// in any order. Partial or foreign tours are rejected.
pub fn compare(human: &[Point], solution: &Solution) -> Result<Comparison> {
    validate(human)?;

    let expected: HashMap<u32, &Point> = solution
        .tour
        .points()
        .iter()
        .map(|point| (point.id, point))
        .collect();
    let covers_solution = human.len() == expected.len()
        && human.iter().all(|point| expected.get(&point.id) == Some(&point));
    if !covers_solution {
        let err = TourError::TourMismatch {
            expected: expected.len(),
            found: human.len(),
        };
        debug!(%err, "rejected hand-made tour");
        return Err(err);
    }

    let human_length = path_length(human);
    let gap = gap_percent(human_length, solution.length);

    Ok(Comparison {
        human_length,
        reference_length: solution.length,
        gap_percent: gap,
        rating: gap.map(Rating::from_gap),
    })
}
