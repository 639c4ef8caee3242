//! Palette-indexed image and the per-cell two-color resolver.

use std::sync::Arc;

use super::grid::PixelGrid;
use crate::charset::Tile;
use crate::error::CellError;
use crate::palette::{Palette, Rgb};

/// Width and height of a character cell in pixels.
pub const CELL_SIZE: usize = 8;

/// Background/foreground slots of one cell while it is being scanned.
///
/// Seeded by the caller from the target format's policy (an explicit color
/// or `None` for "discover"), then filled in by [`Image::get_byte`] as new
/// colors show up. The same value is carried across all rows of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellColors {
    pub background: Option<u8>,
    pub foreground: Option<u8>,
}

impl CellColors {
    pub fn new(background: Option<u8>, foreground: Option<u8>) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Both colors left to discovery.
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// A grid of palette indices bound to a shared [`Palette`].
#[derive(Debug, Clone)]
pub struct Image {
    pixels: PixelGrid,
    palette: Arc<Palette>,
}

impl Image {
    /// A `width` x `height` image with every pixel set to index 0.
    pub fn new(width: usize, height: usize, palette: Arc<Palette>) -> Self {
        Self {
            pixels: PixelGrid::new(width, height),
            palette,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    #[inline]
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    #[inline]
    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Palette index at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<u8, CellError> {
        self.pixels.get(x, y)
    }

    /// Store palette index `index` at `(x, y)`.
    ///
    /// The index must name a real palette entry or the transparent index.
    pub fn set(&mut self, x: usize, y: usize, index: u8) -> Result<(), CellError> {
        if !self.palette.is_valid_index(index) {
            return Err(CellError::PaletteIndexOutOfRange {
                index,
                position: Some(crate::error::Position { x, y }),
            });
        }
        self.pixels.set(x, y, index)
    }

    /// Color at `(x, y)`.
    pub fn get_rgb(&self, x: usize, y: usize) -> Result<Rgb, CellError> {
        let index = self.get(x, y)?;
        self.palette.get(index).map_err(|e| e.at(x, y))
    }

    /// Store the palette index of `color` at `(x, y)`.
    pub fn set_rgb(&mut self, x: usize, y: usize, color: Rgb) -> Result<(), CellError> {
        let index = self.palette.lookup(color).map_err(|e| e.at(x, y))?;
        self.set(x, y, index)
    }

    /// Reduce the 8 pixels starting at `(x, y)` to one bitplane byte.
    ///
    /// Bit 7 is pixel `x`, bit 0 is pixel `x + 7`. A bit is set iff the pixel
    /// is the foreground color. Transparent and background pixels clear the
    /// bit. The first unseen color fills the empty background slot, the next
    /// one the empty foreground slot; a color matching neither once both are
    /// filled is a [`CellError::ColorClash`] at that pixel.
    pub fn get_byte(&self, x: usize, y: usize, colors: &mut CellColors) -> Result<u8, CellError> {
        if x % CELL_SIZE != 0 {
            return Err(CellError::XNotMultipleOf8 { x });
        }

        let transparent = self.palette.transparent_index();
        let mut byte = 0u8;
        for bit in 0..8 {
            let pixel = self.get(x + bit, y)?;

            byte <<= 1;
            if pixel == transparent || colors.background == Some(pixel) {
                continue;
            }
            if colors.foreground == Some(pixel) {
                byte |= 1;
            } else if colors.background.is_none() {
                colors.background = Some(pixel);
            } else if colors.foreground.is_none() {
                colors.foreground = Some(pixel);
                byte |= 1;
            } else {
                return Err(CellError::ColorClash { x: x + bit, y });
            }
        }

        Ok(byte)
    }

    /// Reduce the 8x8 cell at cell coordinates `(cell_x, cell_y)` to a tile.
    pub fn get_tile(
        &self,
        cell_x: usize,
        cell_y: usize,
        colors: &mut CellColors,
    ) -> Result<Tile, CellError> {
        let mut rows = [0u8; 8];
        for (row, byte) in rows.iter_mut().enumerate() {
            *byte = self.get_byte(cell_x * CELL_SIZE, cell_y * CELL_SIZE + row, colors)?;
        }
        Ok(Tile::new(rows))
    }

    /// Fail with [`CellError::InvalidDimensions`] unless both dimensions are
    /// multiples of `cell_width` x `cell_height`.
    pub fn check_cell_multiple(
        &self,
        cell_width: usize,
        cell_height: usize,
        reason: &'static str,
    ) -> Result<(), CellError> {
        if self.width() % cell_width != 0 || self.height() % cell_height != 0 {
            return Err(CellError::InvalidDimensions {
                width: self.width(),
                height: self.height(),
                reason,
            });
        }
        Ok(())
    }
}
