//! tour-planner
//!
//! Short open visiting orders over planar point sets: nearest-neighbor
//! construction refined by 2-opt local search.

pub mod point;
pub mod error;
pub mod distance;
pub mod construct;
pub mod two_opt;
pub mod solver;
pub mod generate;
pub mod compare;
