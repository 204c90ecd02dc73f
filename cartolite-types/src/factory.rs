use crate::error::GeometryError;
use crate::{Crs, Envelope, Geometry, GeometryKind, LineString, Point, Polygon, DEFAULT_TOLERANCE};

/// Builds geometries from raw coordinates.
///
/// The factory carries the tolerance assigned to every point it creates and a default coordinate system. A CRS given
/// to a particular `create_*` call takes precedence over the factory default.
///
/// ```
/// use cartolite_types::{Crs, GeometryFactory};
///
/// let factory = GeometryFactory::default().with_crs(Some(Crs::EPSG3857));
/// let line = factory
///     .create_line_string_from_coords(&[0.0, 3.0], &[0.0, 4.0], None)
///     .unwrap();
/// assert_eq!(line.length(), 5.0);
/// assert_eq!(line.crs(), Some(Crs::EPSG3857));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct GeometryFactory {
    tolerance: f64,
    crs: Option<Crs>,
}

impl Default for GeometryFactory {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            crs: None,
        }
    }
}

impl GeometryFactory {
    /// Minimum number of coordinates accepted by [`GeometryFactory::create_line_string_from_coords`] and
    /// [`GeometryFactory::create_polygon_from_coords`].
    pub const MIN_COORDS: usize = 2;

    /// Sets the tolerance of created points.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Sets the default coordinate system of created geometries.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Tolerance of created points.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Default coordinate system of created geometries.
    pub fn crs(&self) -> Option<Crs> {
        self.crs
    }

    /// Creates a point.
    pub fn create_point(&self, x: f64, y: f64, crs: Option<Crs>) -> Point {
        Point {
            x,
            y,
            tolerance: self.tolerance,
            crs: self.resolve_crs(crs),
        }
    }

    /// Creates a line string from the given points. Points are copied, so the line does not share them with the
    /// caller.
    pub fn create_line_string_from_points(&self, points: &[Point], crs: Option<Crs>) -> LineString {
        LineString::new(points.to_vec(), self.resolve_crs(crs))
    }

    /// Creates a polygon from the given ring points. Points are copied, so the polygon does not share them with the
    /// caller. The ring is not checked for closure, see [`Polygon::is_valid`].
    pub fn create_polygon_from_points(&self, points: &[Point], crs: Option<Crs>) -> Polygon {
        Polygon::new(points.to_vec(), self.resolve_crs(crs))
    }

    /// Creates a line string or a polygon depending on whether the point sequence is a closed ring. See
    /// [`GeometryKind::of_points`].
    pub fn create_geometry_from_points(&self, points: &[Point], crs: Option<Crs>) -> Geometry {
        match GeometryKind::of_points(points) {
            GeometryKind::Polygon => self.create_polygon_from_points(points, crs).into(),
            _ => self.create_line_string_from_points(points, crs).into(),
        }
    }

    /// Creates a closed rectangular polygon covering the envelope.
    ///
    /// The ring always starts at the lower left corner and goes through the upper left, upper right and lower right
    /// corners back to the start.
    pub fn create_polygon_from_envelope(&self, envelope: &Envelope, crs: Option<Crs>) -> Polygon {
        let crs = self.resolve_crs(crs);
        let points = [
            (envelope.min_x, envelope.min_y),
            (envelope.min_x, envelope.max_y),
            (envelope.max_x, envelope.max_y),
            (envelope.max_x, envelope.min_y),
            (envelope.min_x, envelope.min_y),
        ]
        .into_iter()
        .map(|(x, y)| self.create_point(x, y, crs))
        .collect();

        Polygon::new(points, crs)
    }

    /// Creates a line string from separate arrays of x and y coordinates.
    ///
    /// Fails if the arrays have different lengths or contain fewer than two coordinates.
    pub fn create_line_string_from_coords(
        &self,
        xs: &[f64],
        ys: &[f64],
        crs: Option<Crs>,
    ) -> Result<LineString, GeometryError> {
        let crs = self.resolve_crs(crs);
        let points = self.points_from_coords(xs, ys, crs)?;
        Ok(LineString::new(points, crs))
    }

    /// Creates a polygon from separate arrays of x and y coordinates.
    ///
    /// Fails if the arrays have different lengths or contain fewer than two coordinates.
    pub fn create_polygon_from_coords(
        &self,
        xs: &[f64],
        ys: &[f64],
        crs: Option<Crs>,
    ) -> Result<Polygon, GeometryError> {
        let crs = self.resolve_crs(crs);
        let points = self.points_from_coords(xs, ys, crs)?;
        Ok(Polygon::new(points, crs))
    }

    fn points_from_coords(
        &self,
        xs: &[f64],
        ys: &[f64],
        crs: Option<Crs>,
    ) -> Result<Vec<Point>, GeometryError> {
        if xs.len() != ys.len() {
            log::debug!(
                "Rejected coordinates: {} x values, {} y values",
                xs.len(),
                ys.len()
            );
            return Err(GeometryError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        if xs.len() < Self::MIN_COORDS {
            log::debug!("Rejected coordinates: only {} points", xs.len());
            return Err(GeometryError::InsufficientPoints {
                count: xs.len(),
                required: Self::MIN_COORDS,
            });
        }

        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| self.create_point(x, y, crs))
            .collect())
    }

    fn resolve_crs(&self, crs: Option<Crs>) -> Option<Crs> {
        crs.or(self.crs)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn coords(points: &[Point]) -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn create_point() {
        let factory = GeometryFactory::default().with_tolerance(0.5);
        let point = factory.create_point(1.0, 2.0, Some(Crs::EPSG4326));
        assert_eq!((point.x, point.y), (1.0, 2.0));
        assert_eq!(point.tolerance, 0.5);
        assert_eq!(point.crs, Some(Crs::EPSG4326));
    }

    #[test]
    fn crs_override() {
        let factory = GeometryFactory::default().with_crs(Some(Crs::EPSG3857));
        assert_eq!(factory.create_point(0.0, 0.0, None).crs, Some(Crs::EPSG3857));
        assert_eq!(
            factory.create_point(0.0, 0.0, Some(Crs::EPSG4326)).crs,
            Some(Crs::EPSG4326)
        );
    }

    #[test]
    fn polygon_from_envelope() {
        let factory = GeometryFactory::default();
        let polygon =
            factory.create_polygon_from_envelope(&Envelope::new(0.0, 0.0, 10.0, 10.0), None);
        assert_eq!(
            coords(polygon.points()),
            vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]
        );
        assert!(polygon.is_valid());
        assert_eq!(polygon.area(), 100.0);
    }

    #[test]
    fn line_string_from_coords() {
        let factory = GeometryFactory::default();
        let line = factory
            .create_line_string_from_coords(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], None)
            .unwrap();
        assert_eq!(line.size(), 3);
        assert_eq!(coords(line.points()), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    }

    #[test]
    fn polygon_from_coords() {
        let factory = GeometryFactory::default();
        let polygon = factory
            .create_polygon_from_coords(
                &[0.0, 0.0, 10.0, 10.0, 0.0],
                &[0.0, 10.0, 10.0, 0.0, 0.0],
                Some(Crs::EPSG4326),
            )
            .unwrap();
        assert_eq!(polygon.area(), 100.0);
        assert_eq!(polygon.crs(), Some(Crs::EPSG4326));
        assert!(polygon.points().iter().all(|p| p.crs == Some(Crs::EPSG4326)));
    }

    #[test]
    fn coords_length_mismatch() {
        let factory = GeometryFactory::default();
        assert_matches!(
            factory.create_line_string_from_coords(&[0.0, 1.0, 2.0], &[0.0, 1.0], None),
            Err(GeometryError::LengthMismatch { xs: 3, ys: 2 })
        );
        assert_matches!(
            factory.create_polygon_from_coords(&[0.0], &[0.0, 1.0], None),
            Err(GeometryError::LengthMismatch { xs: 1, ys: 2 })
        );
    }

    #[test]
    fn coords_insufficient_points() {
        let factory = GeometryFactory::default();
        assert_matches!(
            factory.create_line_string_from_coords(&[1.0], &[1.0], None),
            Err(GeometryError::InsufficientPoints {
                count: 1,
                required: 2
            })
        );
        assert_matches!(
            factory.create_polygon_from_coords(&[], &[], None),
            Err(GeometryError::InsufficientPoints {
                count: 0,
                required: 2
            })
        );
    }

    #[test]
    fn points_are_copied() {
        let factory = GeometryFactory::default();
        let mut points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let first = factory.create_line_string_from_points(&points, None);
        let second = factory.create_line_string_from_points(&points, None);

        points[0].translate(5.0, 5.0);
        let mut moved = first.clone();
        moved.translate(1.0, 1.0);

        assert_eq!(coords(moved.points()), vec![(1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(coords(first.points()), vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(coords(second.points()), vec![(0.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn geometry_from_points() {
        let factory = GeometryFactory::default();
        let ring = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(
            factory.create_geometry_from_points(&ring, None).kind(),
            GeometryKind::Polygon
        );
        assert_eq!(
            factory.create_geometry_from_points(&ring[..3], None).kind(),
            GeometryKind::LineString
        );
    }
}
