use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::algorithms::contains;
use crate::{round_length, Crs, Envelope, Point, Segment};

/// Polygon given by a single ring of points.
///
/// The ring is expected to be closed, i.e. the last point should repeat the first one. This is not enforced on
/// construction; use [`Polygon::is_valid`] to check it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
    crs: Option<Crs>,
}

/// Direction in which the polygon ring goes around its interior.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise (negative signed area).
    Clockwise,
    /// Counter-clockwise (positive signed area).
    CounterClockwise,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(points: Vec<Point>, crs: Option<Crs>) -> Self {
        Self { points, crs }
    }

    /// Points of the ring.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Coordinate system of the polygon.
    pub fn crs(&self) -> Option<Crs> {
        self.crs
    }

    /// Number of points in the ring, including the closing one.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has more than 3 points and its first and last points are equal.
    pub fn is_valid(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.size() > 3 => first.equals(last),
            _ => false,
        }
    }

    /// Iterates over the edges of the ring. If the ring is not explicitly closed, the edge from the last point back to
    /// the first one is included.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        let closing = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.size() > 2 && !first.equals(last) => {
                Some(Segment(last, first))
            }
            _ => None,
        };

        self.points
            .windows(2)
            .map(|w| Segment(&w[0], &w[1]))
            .chain(closing)
    }

    /// Sum of distances between consecutive points of the ring, rounded to one decimal place.
    ///
    /// Only consecutive points are measured, so for a closed ring this is its perimeter.
    pub fn length(&self) -> f64 {
        round_length(
            self.points
                .windows(2)
                .map(|w| w[0].distance(&w[1]))
                .sum(),
        )
    }

    /// Signed area of the polygon given by the shoelace formula. Positive for counter-clockwise rings.
    ///
    /// Coordinates are taken relative to the first point of the ring, which keeps the products small for polygons
    /// far from the origin.
    pub fn signed_area(&self) -> f64 {
        self.cross_sums().0 / 2.0
    }

    /// Area of the polygon.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding direction of the ring. Degenerate rings are reported as clockwise.
    pub fn winding(&self) -> Winding {
        if self.signed_area() <= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Center of mass of the polygon.
    ///
    /// If the polygon has zero area, its first point is returned. Returns `None` only if the polygon has no points.
    pub fn centroid(&self) -> Option<Point> {
        let origin = self.points.first()?;
        let (cross_sum, cx_sum, cy_sum) = self.cross_sums();

        if cross_sum == 0.0 {
            return Some(*origin);
        }

        // cx = sum / (6 * A) where A = cross_sum / 2
        let factor = 3.0 * cross_sum;
        Some(Point {
            x: origin.x + cx_sum / factor,
            y: origin.y + cy_sum / factor,
            crs: self.crs.or(origin.crs),
            ..*origin
        })
    }

    /// Bounding rectangle of all points of the ring, or `None` if there are no points.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_points(self.points.iter())
    }

    /// Returns true if the point is inside the polygon, or within `tolerance` of its boundary.
    ///
    /// See [`contains`](crate::algorithms::contains).
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        contains(self, point, tolerance)
    }

    /// Returns a copy of the polygon shifted by the given offsets.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translated(dx, dy)).collect(),
            crs: self.crs,
        }
    }

    /// Shifts all points of the polygon in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.translate(dx, dy);
        }
    }

    /// Consumes the polygon returning the points of its ring.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Accumulates the cross products of consecutive ring points relative to the first point, together with the
    /// centroid numerators: `(sum(cross), sum((xi + xj) * cross), sum((yi + yj) * cross))`.
    fn cross_sums(&self) -> (f64, f64, f64) {
        let Some(origin) = self.points.first() else {
            return (0.0, 0.0, 0.0);
        };

        let count = self.points.len();
        let mut cross_sum = 0.0;
        let mut cx_sum = 0.0;
        let mut cy_sum = 0.0;

        for i in 0..count {
            let pi = self.points[i].sub(origin);
            let pj = self.points[(i + 1) % count].sub(origin);

            let cross = pi.x * pj.y - pj.x * pi.y;
            cross_sum += cross;
            cx_sum += (pi.x + pj.x) * cross;
            cy_sum += (pi.y + pj.y) * cross;
        }

        (cross_sum, cx_sum, cy_sum)
    }
}

impl AbsDiffEq for Polygon {
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
