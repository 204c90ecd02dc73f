use std::fmt::{Display, Formatter};
use std::iter::Peekable;

use cartolite_types::{Geometry, GeometryFactory, LineString, Point, Polygon};

use crate::error::WktError;
use crate::tokenizer::{Spanned, Token, Tokenizer};

/// Geometry tags recognized by the reader.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Tag {
    Point,
    LineString,
    Polygon,
    MultiPolygon,
}

impl Tag {
    fn from_word(word: &str) -> Option<Self> {
        const TAGS: [(&str, Tag); 4] = [
            ("POINT", Tag::Point),
            ("LINESTRING", Tag::LineString),
            ("POLYGON", Tag::Polygon),
            ("MULTIPOLYGON", Tag::MultiPolygon),
        ];

        TAGS.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(word))
            .map(|&(_, tag)| tag)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::Point => "POINT",
            Tag::LineString => "LINESTRING",
            Tag::Polygon => "POLYGON",
            Tag::MultiPolygon => "MULTIPOLYGON",
        };
        f.write_str(name)
    }
}

/// Reads geometries from WKT text.
///
/// Supported forms are:
///
/// ```text
/// POINT(x y)
/// LINESTRING(x1 y1, x2 y2, ...)
/// POLYGON((x1 y1, x2 y2, ..., x1 y1))
/// ```
///
/// Any amount of whitespace is allowed between tokens and tags are case-insensitive. Polygons can only have an
/// exterior ring. `MULTIPOLYGON` is recognized but not supported.
///
/// Geometries are built with the reader's [`GeometryFactory`], so they get its point tolerance and CRS.
#[derive(Debug, Clone, Default)]
pub struct WktReader {
    factory: GeometryFactory,
}

impl WktReader {
    /// Creates a new reader that uses the given factory.
    pub fn new(factory: GeometryFactory) -> Self {
        Self { factory }
    }

    /// Factory used to build geometries.
    pub fn factory(&self) -> &GeometryFactory {
        &self.factory
    }

    /// Reads any supported geometry, choosing its type by the leading tag.
    pub fn geometry_from_text(&self, wkt: &str) -> Result<Geometry, WktError> {
        let mut parser = Parser::new(wkt, &self.factory);
        let geometry: Geometry = match parser.tag()? {
            Tag::Point => parser.point_body()?.into(),
            Tag::LineString => parser.line_body()?.into(),
            Tag::Polygon => parser.polygon_body()?.into(),
            Tag::MultiPolygon => return Err(multipolygons_unsupported()),
        };
        parser.finish()?;

        log::debug!("Read {:?} geometry from WKT", geometry.kind());
        Ok(geometry)
    }

    /// Reads a `POINT`.
    pub fn point_from_text(&self, wkt: &str) -> Result<Point, WktError> {
        let mut parser = Parser::new(wkt, &self.factory);
        parser.expect_tag(Tag::Point)?;
        let point = parser.point_body()?;
        parser.finish()?;
        Ok(point)
    }

    /// Reads a `LINESTRING`.
    pub fn line_from_text(&self, wkt: &str) -> Result<LineString, WktError> {
        let mut parser = Parser::new(wkt, &self.factory);
        parser.expect_tag(Tag::LineString)?;
        let line = parser.line_body()?;
        parser.finish()?;
        Ok(line)
    }

    /// Reads a `POLYGON` with a single exterior ring.
    pub fn poly_from_text(&self, wkt: &str) -> Result<Polygon, WktError> {
        let mut parser = Parser::new(wkt, &self.factory);
        parser.expect_tag(Tag::Polygon)?;
        let polygon = parser.polygon_body()?;
        parser.finish()?;
        Ok(polygon)
    }

    /// Reads a `MULTIPOLYGON`.
    ///
    /// Multipolygons are not supported, so this only checks the tag and returns [`WktError::Unsupported`].
    pub fn mpoly_from_text(&self, wkt: &str) -> Result<Vec<Polygon>, WktError> {
        let mut parser = Parser::new(wkt, &self.factory);
        parser.expect_tag(Tag::MultiPolygon)?;
        Err(multipolygons_unsupported())
    }
}

fn multipolygons_unsupported() -> WktError {
    log::warn!("MULTIPOLYGON geometries cannot be read");
    WktError::Unsupported("multipolygons")
}

struct Parser<'a, 'f> {
    tokens: Peekable<Tokenizer<'a>>,
    factory: &'f GeometryFactory,
}

impl<'a, 'f> Parser<'a, 'f> {
    fn new(text: &'a str, factory: &'f GeometryFactory) -> Self {
        Self {
            tokens: Tokenizer::new(text).peekable(),
            factory,
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<Spanned<'a>, WktError> {
        self.tokens
            .next()
            .unwrap_or(Err(WktError::UnexpectedEnd { expected }))
    }

    fn unexpected(spanned: Spanned<'_>, expected: &'static str) -> WktError {
        WktError::UnexpectedToken {
            expected,
            found: spanned.token.to_string(),
            position: spanned.position,
        }
    }

    fn expect(&mut self, token: Token<'static>, expected: &'static str) -> Result<(), WktError> {
        let spanned = self.next_token(expected)?;
        if spanned.token == token {
            Ok(())
        } else {
            Err(Self::unexpected(spanned, expected))
        }
    }

    fn tag(&mut self) -> Result<Tag, WktError> {
        let spanned = match self.tokens.next() {
            Some(v) => v?,
            None => return Err(WktError::UnrecognizedFormat(String::new())),
        };

        match spanned.token {
            Token::Word(word) => {
                Tag::from_word(word).ok_or_else(|| WktError::UnrecognizedFormat(word.to_string()))
            }
            other => Err(WktError::UnrecognizedFormat(other.to_string())),
        }
    }

    fn expect_tag(&mut self, expected: Tag) -> Result<(), WktError> {
        let tag = self.tag()?;
        if tag == expected {
            Ok(())
        } else {
            Err(WktError::UnrecognizedFormat(format!(
                "expected {expected}, found {tag}"
            )))
        }
    }

    fn number(&mut self) -> Result<f64, WktError> {
        const EXPECTED: &str = "coordinate value";
        let spanned = self.next_token(EXPECTED)?;
        match spanned.token {
            Token::Number(v) => Ok(v),
            _ => Err(Self::unexpected(spanned, EXPECTED)),
        }
    }

    fn coordinate(&mut self) -> Result<(f64, f64), WktError> {
        let x = self.number()?;
        let y = self.number()?;

        if let Some(Ok(Spanned {
            token: Token::Number(_),
            ..
        })) = self.tokens.peek()
        {
            return Err(WktError::Unsupported(
                "coordinates with more than two ordinates",
            ));
        }

        Ok((x, y))
    }

    /// `'(' x y (',' x y)* ')'`
    fn coordinate_list(&mut self) -> Result<(Vec<f64>, Vec<f64>), WktError> {
        self.expect(Token::LeftParen, "'('")?;

        let mut xs = vec![];
        let mut ys = vec![];
        loop {
            let (x, y) = self.coordinate()?;
            xs.push(x);
            ys.push(y);

            const EXPECTED: &str = "',' or ')'";
            let spanned = self.next_token(EXPECTED)?;
            match spanned.token {
                Token::Comma => continue,
                Token::RightParen => break,
                _ => return Err(Self::unexpected(spanned, EXPECTED)),
            }
        }

        Ok((xs, ys))
    }

    fn point_body(&mut self) -> Result<Point, WktError> {
        self.expect(Token::LeftParen, "'('")?;
        let (x, y) = self.coordinate()?;
        self.expect(Token::RightParen, "')'")?;

        Ok(self.factory.create_point(x, y, None))
    }

    fn line_body(&mut self) -> Result<LineString, WktError> {
        let (xs, ys) = self.coordinate_list()?;
        Ok(self.factory.create_line_string_from_coords(&xs, &ys, None)?)
    }

    fn polygon_body(&mut self) -> Result<Polygon, WktError> {
        self.expect(Token::LeftParen, "'('")?;
        let (xs, ys) = self.coordinate_list()?;

        const EXPECTED: &str = "')'";
        let spanned = self.next_token(EXPECTED)?;
        match spanned.token {
            Token::RightParen => {}
            Token::Comma => {
                log::warn!("Polygon interior rings cannot be read");
                return Err(WktError::Unsupported("polygon interior rings"));
            }
            _ => return Err(Self::unexpected(spanned, EXPECTED)),
        }

        Ok(self.factory.create_polygon_from_coords(&xs, &ys, None)?)
    }

    fn finish(&mut self) -> Result<(), WktError> {
        match self.tokens.next() {
            None => Ok(()),
            Some(Err(err)) => Err(err),
            Some(Ok(spanned)) => Err(WktError::TrailingInput {
                position: spanned.position,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use cartolite_types::error::GeometryError;
    use cartolite_types::{Crs, GeometryKind};

    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn coords(points: &[Point]) -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn read_point() {
        init_logger();
        let reader = WktReader::default();
        let point = reader.point_from_text("POINT(10 20)").unwrap();
        assert_abs_diff_eq!(point, Point::new(10.0, 20.0));

        let point = reader.point_from_text("  point ( -1.5e2\t0.25 ) ").unwrap();
        assert_abs_diff_eq!(point, Point::new(-150.0, 0.25));
    }

    #[test]
    fn read_line_string() {
        let reader = WktReader::default();
        let line = reader.line_from_text("LINESTRING(0 0,1 1,2 2)").unwrap();
        assert_eq!(line.size(), 3);
        assert_eq!(line.length(), 2.8);
        assert_eq!(
            coords(line.points()),
            vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]
        );

        let spaced = reader
            .line_from_text("LINESTRING ( 0 0 , 1 1 ,\n 2 2 )")
            .unwrap();
        assert_abs_diff_eq!(spaced, line);
    }

    #[test]
    fn read_polygon() {
        let reader = WktReader::default();
        let polygon = reader
            .poly_from_text("POLYGON((0 0,0 10,10 10,10 0,0 0))")
            .unwrap();
        assert_eq!(polygon.size(), 5);
        assert!(polygon.is_valid());
        assert_eq!(polygon.area(), 100.0);
        assert_abs_diff_eq!(polygon.centroid().unwrap(), Point::new(5.0, 5.0));

        let spaced = reader
            .poly_from_text("POLYGON ( ( 0 0, 0 10, 10 10, 10 0, 0 0 ) )")
            .unwrap();
        assert_abs_diff_eq!(spaced, polygon);
    }

    #[test]
    fn geometry_dispatch() {
        let reader = WktReader::default();
        assert_eq!(
            reader.geometry_from_text("POINT(1 2)").unwrap().kind(),
            GeometryKind::Point
        );
        assert_eq!(
            reader.geometry_from_text("LINESTRING(1 2, 3 4)").unwrap().kind(),
            GeometryKind::LineString
        );
        assert_eq!(
            reader
                .geometry_from_text("POLYGON((0 0, 1 0, 1 1, 0 0))")
                .unwrap()
                .kind(),
            GeometryKind::Polygon
        );
    }

    #[test]
    fn factory_settings_are_applied() {
        let reader = WktReader::new(
            GeometryFactory::default()
                .with_tolerance(0.5)
                .with_crs(Some(Crs::EPSG3857)),
        );
        let line = reader.line_from_text("LINESTRING(0 0, 1 1)").unwrap();
        assert_eq!(line.crs(), Some(Crs::EPSG3857));
        assert!(line.points().iter().all(|p| p.tolerance == 0.5));
    }

    #[test]
    fn unrecognized_tag() {
        init_logger();
        let reader = WktReader::default();
        assert_matches!(
            reader.geometry_from_text("CIRCLE(0 0, 5)"),
            Err(WktError::UnrecognizedFormat(tag)) if tag == "CIRCLE"
        );
        assert_matches!(
            reader.geometry_from_text(""),
            Err(WktError::UnrecognizedFormat(_))
        );
        assert_matches!(
            reader.geometry_from_text("(1 2)"),
            Err(WktError::UnrecognizedFormat(_))
        );
    }

    #[test]
    fn mismatched_tag() {
        let reader = WktReader::default();
        assert_matches!(
            reader.point_from_text("LINESTRING(0 0, 1 1)"),
            Err(WktError::UnrecognizedFormat(_))
        );
        assert_matches!(
            reader.poly_from_text("POINT(0 0)"),
            Err(WktError::UnrecognizedFormat(_))
        );
    }

    #[test]
    fn multipolygon_is_unsupported() {
        let reader = WktReader::default();
        assert_matches!(
            reader.geometry_from_text("MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)))"),
            Err(WktError::Unsupported(_))
        );
        assert_matches!(
            reader.mpoly_from_text("MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)))"),
            Err(WktError::Unsupported(_))
        );
        assert_matches!(
            reader.mpoly_from_text("POLYGON((0 0, 1 0, 1 1, 0 0))"),
            Err(WktError::UnrecognizedFormat(_))
        );
    }

    #[test]
    fn interior_rings_are_unsupported() {
        let reader = WktReader::default();
        assert_matches!(
            reader.poly_from_text("POLYGON((0 0,0 10,10 10,10 0,0 0),(2 2,2 3,3 3,2 2))"),
            Err(WktError::Unsupported("polygon interior rings"))
        );
    }

    #[test]
    fn three_dimensional_coordinates_are_unsupported() {
        let reader = WktReader::default();
        assert_matches!(
            reader.point_from_text("POINT(1 2 3)"),
            Err(WktError::Unsupported(_))
        );
    }

    #[test]
    fn malformed_input() {
        let reader = WktReader::default();
        assert_matches!(
            reader.point_from_text("POINT(1)"),
            Err(WktError::UnexpectedToken { position: 7, .. })
        );
        assert_matches!(
            reader.point_from_text("POINT(1 2"),
            Err(WktError::UnexpectedEnd { .. })
        );
        assert_matches!(
            reader.line_from_text("LINESTRING(0 0; 1 1)"),
            Err(WktError::UnexpectedCharacter { character: ';', .. })
        );
        assert_matches!(
            reader.line_from_text("LINESTRING(0 0 1 1)"),
            Err(WktError::Unsupported(_))
        );
        assert_matches!(
            reader.point_from_text("POINT(a 2)"),
            Err(WktError::UnexpectedToken { .. })
        );
        assert_matches!(
            reader.point_from_text("POINT(1 2) POINT(3 4)"),
            Err(WktError::TrailingInput { position: 11 })
        );
    }

    #[test]
    fn too_few_points() {
        let reader = WktReader::default();
        assert_matches!(
            reader.line_from_text("LINESTRING(1 1)"),
            Err(WktError::Geometry(GeometryError::InsufficientPoints {
                count: 1,
                ..
            }))
        );
    }
}
