//! Fixed color tables with exact reverse lookup.

use super::rgb::Rgb;
use crate::error::CellError;

/// Largest palette addressable by a `u8` pixel index.
pub const MAX_PALETTE_SIZE: usize = 256;

/// Index conventionally reserved for transparent pixels.
pub const DEFAULT_TRANSPARENT_INDEX: u8 = 255;

/// The C64 colors as measured by the "colodore" model.
pub const C64_COLODORE: [Rgb; 16] = [
    Rgb(0x000000),
    Rgb(0xFFFFFF),
    Rgb(0x813338),
    Rgb(0x75CEC8),
    Rgb(0x8E3C97),
    Rgb(0x56AC4D),
    Rgb(0x2E2C9B),
    Rgb(0xEDF171),
    Rgb(0x8E5029),
    Rgb(0x553800),
    Rgb(0xC46C71),
    Rgb(0x4A4A4A),
    Rgb(0x7B7B7B),
    Rgb(0xA9FF9F),
    Rgb(0x706DEB),
    Rgb(0xB2B2B2),
];

/// An immutable, ordered color table.
///
/// Entries need not be unique; [`Palette::lookup`] returns the first
/// matching index. One index is designated transparent: it marks pixels
/// that carry no color and is never produced by a lookup.
///
/// # Example
///
/// ```
/// use cell_gfx::{Palette, Rgb};
///
/// let palette = Palette::c64_colodore();
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.lookup(Rgb::new(0xFFFFFF)).unwrap(), 1);
/// assert!(palette.lookup(Rgb::new(0x123456)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Rgb>,
    transparent_index: u8,
}

impl Palette {
    /// Create a palette from its entries.
    ///
    /// # Errors
    ///
    /// [`CellError::InvalidPalette`] if there are more than 256 entries.
    pub fn new(entries: Vec<Rgb>, transparent_index: u8) -> Result<Self, CellError> {
        if entries.len() > MAX_PALETTE_SIZE {
            return Err(CellError::InvalidPalette(format!(
                "{} entries (maximum {MAX_PALETTE_SIZE})",
                entries.len()
            )));
        }
        Ok(Self {
            entries,
            transparent_index,
        })
    }

    /// The 16 color C64 palette, transparent index 255.
    pub fn c64_colodore() -> Self {
        Self {
            entries: C64_COLODORE.to_vec(),
            transparent_index: DEFAULT_TRANSPARENT_INDEX,
        }
    }

    /// Parse `#RRGGBB` strings into a palette.
    pub fn from_hex(colors: &[&str], transparent_index: u8) -> Result<Self, CellError> {
        let entries = colors
            .iter()
            .map(|s| s.parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries, transparent_index)
    }

    /// Number of real entries (the transparent sentinel is not counted
    /// unless it coincides with a real entry).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn transparent_index(&self) -> u8 {
        self.transparent_index
    }

    #[inline]
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    /// True if `index` may be stored in an image bound to this palette.
    #[inline]
    pub fn is_valid_index(&self, index: u8) -> bool {
        index == self.transparent_index || (index as usize) < self.entries.len()
    }

    /// Index of the first entry equal to `color`.
    pub fn lookup(&self, color: Rgb) -> Result<u8, CellError> {
        self.entries
            .iter()
            .position(|&entry| entry == color)
            .map(|index| index as u8)
            .ok_or(CellError::UnknownColor {
                color: color.value(),
                position: None,
            })
    }

    /// Color of entry `index`.
    pub fn get(&self, index: u8) -> Result<Rgb, CellError> {
        self.entries
            .get(index as usize)
            .copied()
            .ok_or(CellError::PaletteIndexOutOfRange {
                index,
                position: None,
            })
    }
}

/// Mutable palette under construction.
///
/// Used for palettes defined at run time (configuration files); call
/// [`PaletteBuilder::build`] to freeze it into a [`Palette`].
#[derive(Debug, Clone, Default)]
pub struct PaletteBuilder {
    entries: Vec<Rgb>,
    transparent_index: Option<u8>,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `size` black entries.
    pub fn with_size(size: usize) -> Self {
        Self {
            entries: vec![Rgb::BLACK; size],
            transparent_index: None,
        }
    }

    pub fn push(mut self, color: Rgb) -> Self {
        self.entries.push(color);
        self
    }

    /// Overwrite entry `index`.
    pub fn set(&mut self, index: u8, color: Rgb) -> Result<(), CellError> {
        let slot = self
            .entries
            .get_mut(index as usize)
            .ok_or(CellError::PaletteIndexOutOfRange {
                index,
                position: None,
            })?;
        *slot = color;
        Ok(())
    }

    pub fn transparent_index(mut self, index: u8) -> Self {
        self.transparent_index = Some(index);
        self
    }

    pub fn build(self) -> Result<Palette, CellError> {
        Palette::new(
            self.entries,
            self.transparent_index.unwrap_or(DEFAULT_TRANSPARENT_INDEX),
        )
    }
}
