use std::fmt::Write;

use cartolite_types::{Geometry, LineString, Point, Polygon};

/// Serializes a geometry into WKT text.
///
/// Coordinates are written with the shortest representation that reads back into the same `f64` value. Text written
/// for geometries with finite coordinates is accepted by [`WktReader`](crate::WktReader); `NaN` and infinite values
/// are written as `NaN`/`inf`, which the reader rejects.
pub trait ToWkt {
    /// Writes the geometry as WKT.
    fn to_wkt(&self) -> String;
}

fn write_coordinates<'a>(out: &mut String, points: impl Iterator<Item = &'a Point>) {
    for (index, point) in points.enumerate() {
        if index > 0 {
            out.push(',');
        }
        write!(out, "{} {}", point.x, point.y).ok();
    }
}

impl ToWkt for Point {
    fn to_wkt(&self) -> String {
        format!("POINT({} {})", self.x, self.y)
    }
}

impl ToWkt for LineString {
    fn to_wkt(&self) -> String {
        let mut out = String::from("LINESTRING(");
        write_coordinates(&mut out, self.points().iter());
        out.push(')');
        out
    }
}

impl ToWkt for Polygon {
    fn to_wkt(&self) -> String {
        let mut out = String::from("POLYGON((");
        write_coordinates(&mut out, self.points().iter());
        out.push_str("))");
        out
    }
}

impl ToWkt for Geometry {
    fn to_wkt(&self) -> String {
        match self {
            Geometry::Point(v) => v.to_wkt(),
            Geometry::LineString(v) => v.to_wkt(),
            Geometry::Polygon(v) => v.to_wkt(),
        }
    }
}
