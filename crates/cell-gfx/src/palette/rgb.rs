//! 24-bit RGB color value.

use std::fmt;
use std::str::FromStr;

use crate::error::CellError;

/// A 24-bit color packed as `0xRRGGBB`.
///
/// Palette matching is byte-exact, so the color is kept in its packed
/// integer form rather than as floating point channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);

    /// Create a color from its packed `0xRRGGBB` value. Bits above 24 are
    /// dropped.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value & 0xff_ffff)
    }

    /// Create a color from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use cell_gfx::Rgb;
    /// assert_eq!(Rgb::from_u8(0x12, 0x34, 0x56), Rgb::new(0x123456));
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Channels as `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Parses `#RRGGBB` or `RRGGBB`.
impl FromStr for Rgb {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(CellError::InvalidPalette(format!(
                "color '{s}' must have 6 hex digits"
            )));
        }
        u32::from_str_radix(hex, 16)
            .map(Rgb)
            .map_err(|e| CellError::InvalidPalette(format!("color '{s}': {e}")))
    }
}
