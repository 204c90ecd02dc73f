//! Numeric predicates over geometries.

use crate::{Geometry, GeometryKind, Point, Polygon, Segment};

/// Kind of the geometry. Same as [`Geometry::kind`].
pub fn classify(geometry: &Geometry) -> GeometryKind {
    geometry.kind()
}

/// Euclidean distance between two points.
pub fn point_point_distance(p: &Point, q: &Point) -> f64 {
    p.distance(q)
}

/// Distance from `p3` to the finite segment between `p1` and `p2`.
///
/// The projection of `p3` onto the segment's line is clamped to the segment endpoints, so for points beyond the ends
/// the distance to the nearest endpoint is returned.
pub fn point_line_seg_distance(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    Segment(p1, p2).distance_to_point(p3)
}

/// Returns true if the `point` lies inside the `polygon`.
///
/// Containment is tested by counting crossings of a horizontal ray going from the point with the polygon edges. Each
/// edge is taken with a half-open y-range, so a ray passing exactly through a shared vertex is counted once.
///
/// If `tolerance` is positive, points within `tolerance` of any edge of the polygon are considered to be inside as
/// well. With zero tolerance points lying exactly on the boundary may be reported either way.
pub fn contains(polygon: &Polygon, point: &Point, tolerance: f64) -> bool {
    let points = polygon.points();
    if points.is_empty() {
        return false;
    }

    if tolerance > 0.0 {
        let tolerance_sq = tolerance * tolerance;
        let on_boundary = if points.len() == 1 {
            points[0].distance_sq(point) <= tolerance_sq
        } else {
            polygon
                .segments()
                .any(|s| s.distance_to_point_sq(point) <= tolerance_sq)
        };

        if on_boundary {
            return true;
        }
    }

    let count = points.len();
    let mut inside = false;
    for i in 0..count {
        let pi = &points[i];
        let pj = &points[(i + 1) % count];

        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}

/// Returns a copy of the geometry with `(dx, dy)` added to every coordinate.
///
/// The source geometry is not changed. To translate a geometry in place use [`Geometry::translate`].
pub fn move_geometry(geometry: &Geometry, dx: f64, dy: f64) -> Geometry {
    geometry.translated(dx, dy)
}
