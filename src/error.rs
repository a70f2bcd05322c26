//! Error types for tour planning.

use thiserror::Error;

/// Errors raised before any planning work begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// Two points in the same set share an id.
    #[error("invalid input: duplicate point id {0}")]
    DuplicateId(u32),

    /// A point has a NaN or infinite coordinate.
    #[error("invalid input: point {id} has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate { id: u32, x: f64, y: f64 },

    /// A tour to compare does not visit exactly the solved points.
    #[error("invalid input: tour visits {found} points, expected the {expected} solved points each once")]
    TourMismatch { expected: usize, found: usize },

    /// Point generation was asked for a region with no usable interior.
    #[error("invalid region: {width}x{height} with margin {margin}")]
    InvalidRegion { width: f64, height: f64, margin: f64 },
}

impl TourError {
    /// True for caller-supplied point sets that violate the input contract.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TourError::DuplicateId(_)
                | TourError::NonFiniteCoordinate { .. }
                | TourError::TourMismatch { .. }
        )
    }
}

/// Result type alias for tour planning operations.
pub type Result<T> = std::result::Result<T, TourError>;
