//! Reader and writer of a restricted subset of Well-Known Text.
//!
//! Only `POINT`, `LINESTRING` and single-ring `POLYGON` geometries can be read. `MULTIPOLYGON` text is recognized
//! and rejected with [`WktError::Unsupported`].
//!
//! ```
//! use cartolite_wkt::{geometry_from_text, ToWkt};
//!
//! let geometry = geometry_from_text("LINESTRING(0 0, 3 4)").unwrap();
//! assert_eq!(geometry.as_line_string().map(|l| l.length()), Some(5.0));
//! assert_eq!(geometry.to_wkt(), "LINESTRING(0 0,3 4)");
//! ```

use cartolite_types::{Geometry, LineString, Point, Polygon};

pub mod error;
mod reader;
mod tokenizer;
mod writer;

pub use error::WktError;
pub use reader::WktReader;
pub use writer::ToWkt;

/// Reads any supported geometry with the default [`WktReader`].
pub fn geometry_from_text(wkt: &str) -> Result<Geometry, WktError> {
    WktReader::default().geometry_from_text(wkt)
}

/// Reads a `POINT` with the default [`WktReader`].
pub fn point_from_text(wkt: &str) -> Result<Point, WktError> {
    WktReader::default().point_from_text(wkt)
}

/// Reads a `LINESTRING` with the default [`WktReader`].
pub fn line_from_text(wkt: &str) -> Result<LineString, WktError> {
    WktReader::default().line_from_text(wkt)
}

/// Reads a single-ring `POLYGON` with the default [`WktReader`].
pub fn poly_from_text(wkt: &str) -> Result<Polygon, WktError> {
    WktReader::default().poly_from_text(wkt)
}
