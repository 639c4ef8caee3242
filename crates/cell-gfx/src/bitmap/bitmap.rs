//! Two-plane hires bitmap.

use std::sync::Arc;

use super::layout::{CellLayout, Layout};
use crate::charset::Tile;
use crate::error::CellError;
use crate::image::{CellColors, Image, PixelGrid, CELL_SIZE};
use crate::palette::Palette;

/// A hires bitmap split into a pixel plane and a per-cell color plane.
///
/// `width` and `height` are in cells. The byte order of both planes is
/// decided by the [`Layout`] chosen at construction; layout specific
/// restrictions are checked per cell in [`Bitmap::set_tile`], so encoding
/// stops at the first cell the hardware cannot show.
///
/// # Example
///
/// ```
/// use cell_gfx::{Bitmap, Layout, Tile};
///
/// let mut bitmap = Bitmap::new(2, 1, Layout::C64).unwrap();
/// bitmap.set_tile(1, 0, &Tile::new([0xff; 8]), 1, 6).unwrap();
///
/// assert_eq!(&bitmap.bitmap_bytes()[8..], &[0xff; 8]);
/// assert_eq!(bitmap.screen_bytes(), &[0x00, 0x61]);
/// ```
pub struct Bitmap {
    width: usize,
    height: usize,
    layout: Layout,
    strategy: &'static dyn CellLayout,
    bitmap: Vec<u8>,
    screen: PixelGrid,
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl Bitmap {
    /// An empty bitmap of `width` x `height` cells.
    pub fn new(width: usize, height: usize, layout: Layout) -> Result<Self, CellError> {
        let strategy = layout.strategy();
        strategy.check_size(width, height)?;

        Ok(Self {
            width,
            height,
            layout,
            strategy,
            bitmap: vec![0; strategy.bitmap_len(width, height)],
            screen: PixelGrid::new(width, height),
        })
    }

    /// Encode `image` cell by cell.
    ///
    /// Each cell starts from the given color hints; `None` lets the cell
    /// discover that color from its pixels. A slot that is still empty after
    /// the scan is stored as color 0.
    pub fn from_image(
        image: &Image,
        layout: Layout,
        background: Option<u8>,
        foreground: Option<u8>,
    ) -> Result<Self, CellError> {
        image.check_cell_multiple(
            CELL_SIZE,
            CELL_SIZE,
            "image dimensions not multiple of 8",
        )?;

        let mut bitmap = Self::new(image.width() / CELL_SIZE, image.height() / CELL_SIZE, layout)?;

        for y in 0..bitmap.height {
            for x in 0..bitmap.width {
                let mut colors = CellColors::new(background, foreground);
                let tile = image.get_tile(x, y, &mut colors)?;
                bitmap.set_tile(
                    x,
                    y,
                    &tile,
                    colors.foreground.unwrap_or(0),
                    colors.background.unwrap_or(0),
                )?;
            }
        }

        tracing::debug!(
            layout = %layout,
            width = bitmap.width,
            height = bitmap.height,
            "Encoded bitmap"
        );

        Ok(bitmap)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Store one cell's pixels and colors.
    pub fn set_tile(
        &mut self,
        x: usize,
        y: usize,
        tile: &Tile,
        foreground: u8,
        background: u8,
    ) -> Result<(), CellError> {
        if x >= self.width || y >= self.height {
            return Err(CellError::InvalidCoordinates { x, y });
        }
        self.strategy.place(
            &mut self.bitmap,
            &mut self.screen,
            x,
            y,
            tile,
            foreground,
            background,
        )
    }

    /// Read cell `(x, y)` back as `(tile, foreground, background)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<(Tile, u8, u8), CellError> {
        if x >= self.width || y >= self.height {
            return Err(CellError::InvalidCoordinates { x, y });
        }
        self.strategy.cell(&self.bitmap, &self.screen, x, y)
    }

    /// Render the bitmap back into a two-color-per-cell image.
    pub fn to_image(&self, palette: Arc<Palette>) -> Result<Image, CellError> {
        let mut image = Image::new(self.width * CELL_SIZE, self.height * CELL_SIZE, palette);
        for y in 0..self.height {
            for x in 0..self.width {
                let (tile, foreground, background) = self.cell(x, y)?;
                for row in 0..CELL_SIZE {
                    for column in 0..CELL_SIZE {
                        let color = if tile.pixel(column, row) {
                            foreground
                        } else {
                            background
                        };
                        image.set(x * CELL_SIZE + column, y * CELL_SIZE + row, color)?;
                    }
                }
            }
        }
        Ok(image)
    }

    /// The pixel plane in hardware order.
    #[inline]
    pub fn bitmap_bytes(&self) -> &[u8] {
        &self.bitmap
    }

    /// The attribute plane, one byte per cell, row-major.
    #[inline]
    pub fn screen_bytes(&self) -> &[u8] {
        self.screen.as_bytes()
    }
}
