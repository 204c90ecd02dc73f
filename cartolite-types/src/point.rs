use approx::AbsDiffEq;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::Crs;

/// Tolerance used for point comparison unless another one is given.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// A point in planar coordinates.
///
/// Geometric comparison is approximate: two points are [equal](Point::equals) if both of their coordinates differ by
/// less than the point's tolerance. `==` is exact and structural, comparing tolerance and CRS as well.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Maximum difference (exclusive) between coordinates of two points that are considered equal.
    pub tolerance: f64,
    /// Coordinate system of the point.
    pub crs: Option<Crs>,
}

impl Point {
    /// Creates a new point with the [`DEFAULT_TOLERANCE`] and no CRS.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            tolerance: DEFAULT_TOLERANCE,
            crs: None,
        }
    }

    /// Returns a copy of the point with the given comparison tolerance.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Returns a copy of the point tagged with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Returns true if both coordinates of `other` differ from this point's ones by strictly less than
    /// `self.tolerance`.
    pub fn equals(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < self.tolerance && (self.y - other.y).abs() < self.tolerance
    }

    /// Vector from `other` to this point.
    pub fn sub(&self, other: &Point) -> Vector2<f64> {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// Squared euclidean distance between two points.
    pub fn distance_sq(&self, other: &Point) -> f64 {
        self.sub(other).norm_squared()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        self.sub(other).norm()
    }

    /// Returns the point shifted by the given offsets.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Shifts the point in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
