//! 2-opt local search over an open tour.
//!
//! A move reverses the positions `i..=j` of the tour. The first point never
//! moves: `i` runs over `1..=n-3` and `j` over `i+2..=n-1`. Reversing
//! removes edge `(i-1, i)` and, unless `j` is the last position, edge
//! `(j, j+1)`. It replaces them with `(i-1, j)` and `(i, j+1)`.
//!
//! Moves are accepted on first improvement: pairs are scanned with `i`
//! ascending, then `j` ascending. An improving move is applied at once and
//! the scan continues from the next pair on the updated tour. Passes repeat
//! until one accepts nothing.
//!
//! Candidates are scored by the change in the replaced edges only, which
//! makes a pass O(n²). The reported length is recomputed from scratch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::distance::{distance, path_length};
use crate::point::{Point, Tour};

/// A move must shorten the tour by more than this fraction of the removed
/// edge length to be accepted.
///
/// Scales with the coordinates, so rounding noise in a delta never counts
/// as improvement while real gains at any magnitude still do.
const RELATIVE_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoOptOptions {
    /// Stop after this many passes even if the last one improved.
    pub max_passes: Option<usize>,
    /// Evaluate candidates on the rayon pool. Acceptance stays serial, so
    /// the result is identical to the sequential scan.
    pub parallel: bool,
    /// Checked between passes; when set, the current tour is returned.
    #[serde(skip)]
    pub cancel: Option<Arc<AtomicBool>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Improvement {
    pub tour: Tour,
    pub length: f64,
    pub passes: usize,
    pub moves: usize,
    /// False when cancellation or `max_passes` ended the search early.
    pub converged: bool,
}

/// Working state threaded through the passes.
struct Scan {
    points: Vec<Point>,
    length: f64,
    moves: usize,
}

impl Scan {
    /// Runs one pass over `pairs` and returns the number of accepted moves.
    fn run_pass(&mut self, pairs: &[(usize, usize)], parallel: bool) -> usize {
        let mut cursor = 0;
        let mut accepted = 0;

        while cursor < pairs.len() {
            let remaining = &pairs[cursor..];
            let found = if parallel {
                first_improving_par(&self.points, remaining)
            } else {
                first_improving(&self.points, remaining)
            };

            let Some((offset, delta)) = found else {
                break;
            };

            let (i, j) = pairs[cursor + offset];
            self.points[i..=j].reverse();
            self.length += delta;
            self.moves += 1;
            accepted += 1;
            trace!(i, j, delta, length = self.length, "accepted 2-opt move");

            cursor += offset + 1;
        }

        accepted
    }
}

/// Improves `tour` with 2-opt until no move shortens it.
///
/// Never returns a tour longer than the input. Tours with fewer than four
/// points have no moves and come back unchanged.
pub fn improve(tour: Tour, options: &TwoOptOptions) -> Improvement {
    let points = tour.into_points();
    let pairs = candidate_pairs(points.len());
    let mut scan = Scan {
        length: path_length(&points),
        points,
        moves: 0,
    };

    let mut passes = 0;
    let mut converged = false;

    loop {
        if is_cancelled(options) {
            warn!(passes, moves = scan.moves, "2-opt cancelled before convergence");
            break;
        }
        if options.max_passes.is_some_and(|max| passes >= max) {
            warn!(passes, moves = scan.moves, "2-opt pass limit reached before convergence");
            break;
        }

        let accepted = scan.run_pass(&pairs, options.parallel);
        passes += 1;
        trace!(pass = passes, accepted, length = scan.length, "2-opt pass complete");

        if accepted == 0 {
            converged = true;
            break;
        }
    }

    let tour = Tour::new(scan.points);
    Improvement {
        length: tour.length(),
        tour,
        passes,
        moves: scan.moves,
        converged,
    }
}

/// True when no 2-opt move shortens the tour.
pub fn is_two_opt_optimal(points: &[Point]) -> bool {
    first_improving(points, &candidate_pairs(points.len())).is_none()
}

/// Change in tour length from reversing positions `i..=j`, together with
/// the length of the edges the move removes.
fn move_delta(points: &[Point], i: usize, j: usize) -> (f64, f64) {
    let before = &points[i - 1];
    let head = &points[i];
    let tail = &points[j];

    let mut removed = distance(before, head);
    let mut added = distance(before, tail);

    if let Some(after) = points.get(j + 1) {
        removed += distance(tail, after);
        added += distance(head, after);
    }

    (added - removed, removed)
}

fn is_improving((delta, removed): (f64, f64)) -> bool {
    delta < -RELATIVE_EPSILON * removed
}

fn first_improving(points: &[Point], pairs: &[(usize, usize)]) -> Option<(usize, f64)> {
    pairs.iter().enumerate().find_map(|(offset, &(i, j))| {
        let scored = move_delta(points, i, j);
        is_improving(scored).then_some((offset, scored.0))
    })
}

fn first_improving_par(points: &[Point], pairs: &[(usize, usize)]) -> Option<(usize, f64)> {
    let offset = pairs
        .par_iter()
        .map(|&(i, j)| move_delta(points, i, j))
        .position_first(is_improving)?;

    let (i, j) = pairs[offset];
    Some((offset, move_delta(points, i, j).0))
}

/// All `(i, j)` moves for a tour of `n` points, in scan order.
fn candidate_pairs(n: usize) -> Vec<(usize, usize)> {
    if n < 4 {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity((n - 3) * (n - 2) / 2);
    for i in 1..=n - 3 {
        for j in i + 2..n {
            pairs.push((i, j));
        }
    }
    pairs
}

fn is_cancelled(options: &TwoOptOptions) -> bool {
    options
        .cancel
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}
