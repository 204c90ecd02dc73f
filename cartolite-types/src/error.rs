//! Error type used by the crate.

use thiserror::Error;

/// Error returned when a geometry cannot be constructed from the given input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Coordinate arrays have different lengths.
    #[error("coordinate arrays have different lengths: {xs} x values and {ys} y values")]
    LengthMismatch {
        /// Number of x values.
        xs: usize,
        /// Number of y values.
        ys: usize,
    },

    /// Not enough points to build the geometry.
    #[error("at least {required} points are required, got {count}")]
    InsufficientPoints {
        /// Number of points given.
        count: usize,
        /// Minimum number of points for the geometry.
        required: usize,
    },
}
