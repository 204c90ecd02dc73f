use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::{Crs, Envelope, LineString, Point, Polygon};

/// Kind of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// Single point.
    Point,
    /// Open sequence of points.
    LineString,
    /// Closed ring of points.
    Polygon,
}

impl GeometryKind {
    /// Classifies a raw sequence of points: a sequence of at least two points whose first and last points are equal
    /// is a polygon ring, anything else is a line string.
    pub fn of_points(points: &[Point]) -> Self {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() > 1 && first.equals(last) => {
                GeometryKind::Polygon
            }
            _ => GeometryKind::LineString,
        }
    }
}

/// Any geometry supported by the crate.
///
/// `==` compares geometries exactly. Use `approx::AbsDiffEq` to compare coordinates with a tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Point geometry.
    Point(Point),
    /// Line string geometry.
    LineString(LineString),
    /// Polygon geometry.
    Polygon(Polygon),
}

impl Geometry {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Coordinate system of the geometry.
    pub fn crs(&self) -> Option<Crs> {
        match self {
            Geometry::Point(v) => v.crs,
            Geometry::LineString(v) => v.crs(),
            Geometry::Polygon(v) => v.crs(),
        }
    }

    /// Bounding rectangle of the geometry. `None` for line strings and polygons without points.
    pub fn envelope(&self) -> Option<Envelope> {
        match self {
            Geometry::Point(v) => Some(Envelope::from_point(v)),
            Geometry::LineString(v) => v.envelope(),
            Geometry::Polygon(v) => v.envelope(),
        }
    }

    /// Returns a copy of the geometry shifted by the given offsets.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match self {
            Geometry::Point(v) => Geometry::Point(v.translated(dx, dy)),
            Geometry::LineString(v) => Geometry::LineString(v.translated(dx, dy)),
            Geometry::Polygon(v) => Geometry::Polygon(v.translated(dx, dy)),
        }
    }

    /// Shifts every coordinate of the geometry in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Geometry::Point(v) => v.translate(dx, dy),
            Geometry::LineString(v) => v.translate(dx, dy),
            Geometry::Polygon(v) => v.translate(dx, dy),
        }
    }

    /// Returns the point if the geometry is a point.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the line string if the geometry is a line string.
    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the polygon if the geometry is a polygon.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl TryFrom<Geometry> for Point {
    type Error = Geometry;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::Point(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl TryFrom<Geometry> for LineString {
    type Error = Geometry;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::LineString(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl TryFrom<Geometry> for Polygon {
    type Error = Geometry;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::Polygon(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl AbsDiffEq for Geometry {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (Geometry::Point(a), Geometry::Point(b)) => a.abs_diff_eq(b, epsilon),
            (Geometry::LineString(a), Geometry::LineString(b)) => a.abs_diff_eq(b, epsilon),
            (Geometry::Polygon(a), Geometry::Polygon(b)) => a.abs_diff_eq(b, epsilon),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn kind_of_points() {
        assert_eq!(
            GeometryKind::of_points(&points(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])),
            GeometryKind::Polygon
        );
        assert_eq!(
            GeometryKind::of_points(&points(&[(0.0, 0.0), (1.0, 0.0)])),
            GeometryKind::LineString
        );
        assert_eq!(
            GeometryKind::of_points(&points(&[(0.0, 0.0)])),
            GeometryKind::LineString
        );
        assert_eq!(GeometryKind::of_points(&[]), GeometryKind::LineString);
    }

    #[test]
    fn kind() {
        assert_eq!(Geometry::from(Point::new(1.0, 2.0)).kind(), GeometryKind::Point);
        assert_eq!(
            Geometry::from(LineString::new(points(&[(0.0, 0.0), (1.0, 1.0)]), None)).kind(),
            GeometryKind::LineString
        );
        assert_eq!(
            Geometry::from(Polygon::new(vec![], None)).kind(),
            GeometryKind::Polygon
        );
    }

    #[test]
    fn envelope_of_point() {
        let geometry = Geometry::from(Point::new(3.0, -1.0));
        assert_eq!(geometry.envelope(), Some(Envelope::new(3.0, -1.0, 3.0, -1.0)));
    }

    #[test]
    fn translate_in_place() {
        let mut geometry = Geometry::from(LineString::new(
            points(&[(0.0, 0.0), (1.0, 1.0)]),
            Some(Crs::EPSG4326),
        ));
        geometry.translate(1.0, 1.0);

        let line = geometry.as_line_string().unwrap();
        assert_eq!((line.points()[1].x, line.points()[1].y), (2.0, 2.0));
        assert_eq!(geometry.crs(), Some(Crs::EPSG4326));
    }

    #[test]
    fn try_from() {
        let geometry = Geometry::from(Point::new(1.0, 2.0));
        assert_matches!(LineString::try_from(geometry.clone()), Err(Geometry::Point(_)));
        let point = Point::try_from(geometry).unwrap();
        assert_eq!((point.x, point.y), (1.0, 2.0));
    }

    #[test]
    fn exact_comparison() {
        let line = Geometry::from(LineString::new(points(&[(0.0, 0.0), (1.0, 1.0)]), None));
        assert_eq!(line, line.clone());
        assert_ne!(line, line.translated(0.0, 1e-10));
        assert_ne!(
            line,
            Geometry::from(Polygon::new(points(&[(0.0, 0.0), (1.0, 1.0)]), None))
        );
    }

    #[test]
    fn approximate_comparison() {
        let a = Geometry::from(Point::new(1.0, 2.0));
        let b = Geometry::from(Point::new(1.0, 2.0 + 1e-10));
        assert!(a.abs_diff_eq(&b, 1e-9));
        assert!(!a.abs_diff_eq(&Geometry::from(Polygon::new(vec![], None)), 1e-9));
    }
}
