use crate::Point;

/// A straight line segment between two points.
#[derive(Debug, Copy, Clone)]
pub struct Segment<'a>(pub &'a Point, pub &'a Point);

impl Segment<'_> {
    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.0.distance(self.1)
    }

    /// Shortest euclidean distance between a point and the segment:
    ///
    /// * if the projection of the point onto the segment's line falls inside the segment, the returned value is the
    ///   length of the normal from the point to the segment
    /// * otherwise the projection is clamped to the nearest endpoint, and the distance to that endpoint is returned
    ///
    /// A zero-length segment is treated as a single point.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        self.distance_to_point_sq(point).sqrt()
    }

    /// Squared version of [`Segment::distance_to_point`].
    pub fn distance_to_point_sq(&self, point: &Point) -> f64 {
        let ds = self.1.sub(self.0);
        let ds_len = ds.norm_squared();
        if ds_len == 0.0 {
            return self.0.distance_sq(point);
        }

        let dp = point.sub(self.0);
        let r = dp.dot(&ds) / ds_len;
        if r <= 0.0 {
            self.0.distance_sq(point)
        } else if r >= 1.0 {
            self.1.distance_sq(point)
        } else {
            let cross = dp.y * ds.x - dp.x * ds.y;
            cross * cross / ds_len
        }
    }
}
