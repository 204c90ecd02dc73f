use serde::{Deserialize, Serialize};

use crate::Point;

/// Axis-aligned bounding rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl Envelope {
    /// Creates a new envelope.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Envelope of a single point.
    pub fn from_point(p: &Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Smallest envelope containing all the given points. Returns `None` if the iterator is empty.
    ///
    /// Every point takes part in the scan, including the last one of a closed ring.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a Point>) -> Option<Self> {
        let first = points.next()?;
        let mut envelope = Self::from_point(first);

        for p in points {
            if envelope.min_x > p.x {
                envelope.min_x = p.x;
            }
            if envelope.min_y > p.y {
                envelope.min_y = p.y;
            }
            if envelope.max_x < p.x {
                envelope.max_x = p.x;
            }
            if envelope.max_y < p.y {
                envelope.max_y = p.y;
            }
        }

        Some(envelope)
    }

    /// Width of the envelope.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the envelope.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the envelope.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest envelope containing both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if the point lies inside the envelope or on its border.
    pub fn contains(&self, point: &Point) -> bool {
        self.min_x <= point.x
            && self.max_x >= point.x
            && self.min_y <= point.y
            && self.max_y >= point.y
    }
}
