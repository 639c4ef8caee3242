//! Error type shared by every stage of the engine.
//!
//! Variants raised at a site that already knows the pixel or cell they refer
//! to carry the coordinates as plain fields. Palette lookups happen below the
//! loops that know where the pixel lives, so those variants carry an
//! optional [`Position`] that the nearest enclosing loop fills in through
//! [`CellError::at`].

use std::fmt;

use thiserror::Error;

/// Pixel (or cell) coordinates attached to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn located(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!(" at {position}"),
        None => String::new(),
    }
}

/// Everything that can go wrong while decoding, quantizing or laying out an
/// image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: &'static str,
    },

    #[error("x not multiple of 8 ({x})")]
    XNotMultipleOf8 { x: usize },

    #[error("invalid coordinates ({x}, {y})")]
    InvalidCoordinates { x: usize, y: usize },

    #[error("color clash at ({x}, {y})")]
    ColorClash { x: usize, y: usize },

    #[error("mixing dark and bright colors at ({x}, {y})")]
    MixedBrightness { x: usize, y: usize },

    #[error("color {color} has no attribute encoding at ({x}, {y})")]
    UnencodableColor { color: u8, x: usize, y: usize },

    #[error("out of characters (maximum {max_chars})")]
    CharsetFull { max_chars: usize },

    #[error("invalid charset size {max_chars}: must be between 1 and 256")]
    InvalidCharsetSize { max_chars: usize },

    #[error("invalid color ${color:06x}{}", located(.position))]
    UnknownColor {
        color: u32,
        position: Option<Position>,
    },

    #[error("palette index {index} out of range{}", located(.position))]
    PaletteIndexOutOfRange {
        index: u8,
        position: Option<Position>,
    },

    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    #[error(transparent)]
    Malformed(#[from] MalformedInput),
}

impl CellError {
    /// Attach pixel coordinates to a palette lookup failure.
    ///
    /// Only an unset position is written: the innermost site that knows the
    /// coordinates wins. Variants without a position slot are returned
    /// unchanged.
    pub fn at(self, x: usize, y: usize) -> Self {
        match self {
            CellError::UnknownColor {
                color,
                position: None,
            } => CellError::UnknownColor {
                color,
                position: Some(Position { x, y }),
            },
            CellError::PaletteIndexOutOfRange {
                index,
                position: None,
            } => CellError::PaletteIndexOutOfRange {
                index,
                position: Some(Position { x, y }),
            },
            other => other,
        }
    }
}

/// Structural problems in an input byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("premature end of data ({produced} of {expected} bytes)")]
    TruncatedInput { produced: usize, expected: usize },

    #[error("{count} bytes of trailing data")]
    TrailingData { count: usize },

    #[error("unknown format tag ${tag:02x}")]
    UnknownFormatTag { tag: u8 },

    #[error("data length {len} is not a multiple of the 8 byte tile size")]
    PartialTile { len: usize },
}
