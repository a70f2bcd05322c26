//! Test fixtures for tour-planner.
//!
//! Provides fixed point layouts:
//! - Small geometric scenarios with known optimal lengths
//! - Ball layouts on a default-size court (800 x 600)

pub mod court_layouts;

pub use court_layouts::*;
