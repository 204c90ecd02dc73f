use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::{round_length, Crs, Envelope, Point, Segment};

/// Open sequence of points.
///
/// Line strings own their points. There is no required minimum number of points, so an empty or single-point line
/// string is a valid value with zero length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point>,
    crs: Option<Crs>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(points: Vec<Point>, crs: Option<Crs>) -> Self {
        Self { points, crs }
    }

    /// Points of the line.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Coordinate system of the line.
    pub fn crs(&self) -> Option<Crs> {
        self.crs
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the line has at least two points and its first and last points are equal.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => first.equals(last),
            _ => false,
        }
    }

    /// Iterates over segments between consecutive points.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.points.windows(2).map(|w| Segment(&w[0], &w[1]))
    }

    /// Sum of the lengths of all segments, without rounding.
    pub fn exact_length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Length of the line rounded to one decimal place.
    pub fn length(&self) -> f64 {
        round_length(self.exact_length())
    }

    /// Bounding rectangle of all points of the line, or `None` if the line has no points.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_points(self.points.iter())
    }

    /// Returns a copy of the line shifted by the given offsets.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translated(dx, dy)).collect(),
            crs: self.crs,
        }
    }

    /// Shifts all points of the line in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.translate(dx, dy);
        }
    }

    /// Consumes the line returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl AbsDiffEq for LineString {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
