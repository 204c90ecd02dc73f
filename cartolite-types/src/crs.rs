use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a coordinate reference system, expressed as an EPSG code.
///
/// Geometries carry the CRS they were created in, but the kernel never transforms coordinates between systems.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs {
    epsg: u32,
}

impl Crs {
    /// WGS 84 geographic coordinates.
    pub const EPSG4326: Crs = Crs { epsg: 4326 };

    /// Web Mercator projection.
    pub const EPSG3857: Crs = Crs { epsg: 3857 };

    /// CRS with the given EPSG code.
    pub const fn epsg(code: u32) -> Self {
        Self { epsg: code }
    }

    /// EPSG code of the CRS.
    pub fn code(&self) -> u32 {
        self.epsg
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.epsg)
    }
}

/// Error parsing a [`Crs`] identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS identifier: {0}")]
pub struct ParseCrsError(String);

impl FromStr for Crs {
    type Err = ParseCrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((authority, code)) = trimmed.split_once(':') else {
            return Err(ParseCrsError(s.to_string()));
        };

        if !authority.eq_ignore_ascii_case("EPSG") {
            return Err(ParseCrsError(s.to_string()));
        }

        code.trim()
            .parse::<u32>()
            .map(Crs::epsg)
            .map_err(|_| ParseCrsError(s.to_string()))
    }
}
