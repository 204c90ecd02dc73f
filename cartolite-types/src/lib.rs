//! Planar geometry kernel.
//!
//! This crate provides value types for the three supported geometry kinds ([`Point`], [`LineString`] and
//! [`Polygon`]), the [`Geometry`] tagged union over them, a [`GeometryFactory`] to construct them from raw
//! coordinates, and a set of numeric predicates in the [`algorithms`] module.
//!
//! All geometries own their coordinates exclusively. Translating a geometry with [`algorithms::move_geometry`]
//! produces a new value, while the `translate` methods on the concrete types mutate a value the caller already owns.
//!
//! ```
//! use cartolite_types::{Envelope, GeometryFactory};
//!
//! let factory = GeometryFactory::default();
//! let square = factory.create_polygon_from_envelope(&Envelope::new(0.0, 0.0, 10.0, 10.0), None);
//! assert_eq!(square.area(), 100.0);
//! ```

pub mod algorithms;
pub mod error;

mod crs;
mod envelope;
mod factory;
mod geometry;
mod line_string;
mod point;
mod polygon;
mod segment;

pub use crs::{Crs, ParseCrsError};
pub use envelope::Envelope;
pub use factory::GeometryFactory;
pub use geometry::{Geometry, GeometryKind};
pub use line_string::LineString;
pub use point::{Point, DEFAULT_TOLERANCE};
pub use polygon::{Polygon, Winding};
pub use segment::Segment;

/// Rounds a measured length to one decimal place, the precision used for on-screen measurements.
pub(crate) fn round_length(length: f64) -> f64 {
    (length * 10.0).round() / 10.0
}
