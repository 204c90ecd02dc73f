//! Error type used by the crate.

use cartolite_types::error::GeometryError;
use thiserror::Error;

/// Error reading a geometry from WKT.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WktError {
    /// The text does not start with a known geometry tag, or the tag does not match the requested geometry type.
    #[error("unrecognized geometry format: {0}")]
    UnrecognizedFormat(String),

    /// A token other than the expected one was found.
    #[error("expected {expected} at position {position}, found {found}")]
    UnexpectedToken {
        /// Description of the expected token.
        expected: &'static str,
        /// The token that was found.
        found: String,
        /// Byte offset of the found token.
        position: usize,
    },

    /// The text ended before the geometry was complete.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// Description of the expected token.
        expected: &'static str,
    },

    /// A numeric token could not be parsed.
    #[error("invalid number '{lexeme}' at position {position}")]
    InvalidNumber {
        /// Text of the token.
        lexeme: String,
        /// Byte offset of the token.
        position: usize,
    },

    /// A character that cannot start any token.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The character.
        character: char,
        /// Byte offset of the character.
        position: usize,
    },

    /// Extra text after a complete geometry.
    #[error("unexpected input after geometry at position {position}")]
    TrailingInput {
        /// Byte offset of the first extra token.
        position: usize,
    },

    /// The construct is recognized but not supported.
    #[error("{0} are not supported")]
    Unsupported(&'static str),

    /// Parsed coordinates do not form a valid geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
