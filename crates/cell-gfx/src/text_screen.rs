//! Character mode screens: charset + screen codes + color RAM.

use crate::charset::{Charset, Tile};
use crate::error::CellError;
use crate::image::{CellColors, Image, PixelGrid, CELL_SIZE};

/// A text mode rendition of an image.
///
/// The three planes mirror the hardware split: `charset` holds the unique
/// tile patterns, `screen` the character index per cell and `colors` the
/// foreground color per cell.
#[derive(Debug, Clone)]
pub struct TextScreen {
    pub charset: Charset,
    pub screen: PixelGrid,
    pub colors: PixelGrid,
}

impl TextScreen {
    /// An empty `width` x `height` cell screen with a fresh charset.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            charset: Charset::new(),
            screen: PixelGrid::new(width, height),
            colors: PixelGrid::new(width, height),
        }
    }

    /// Encode `image` against a shared `background` color.
    pub fn from_image(image: &Image, background: u8) -> Result<Self, CellError> {
        Self::with_charset(image, background, Charset::new())
    }

    /// Encode `image`, adding its tiles to an existing charset.
    ///
    /// Tiles already in `charset` keep their indices.
    pub fn with_charset(image: &Image, background: u8, charset: Charset) -> Result<Self, CellError> {
        image.check_cell_multiple(
            CELL_SIZE,
            CELL_SIZE,
            "image dimensions not multiple of 8",
        )?;

        let width = image.width() / CELL_SIZE;
        let height = image.height() / CELL_SIZE;
        let mut text = Self {
            charset,
            screen: PixelGrid::new(width, height),
            colors: PixelGrid::new(width, height),
        };
        let preloaded = text.charset.len();

        for y in 0..height {
            for x in 0..width {
                let mut colors = CellColors::new(Some(background), None);
                let tile = image.get_tile(x, y, &mut colors)?;
                text.set(x, y, &tile, colors.foreground.unwrap_or(0))?;
            }
        }

        tracing::debug!(
            width,
            height,
            preloaded,
            chars = text.charset.len(),
            "Encoded text screen"
        );

        Ok(text)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.screen.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.screen.height()
    }

    /// Store `tile` with foreground `color` at cell `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, tile: &Tile, color: u8) -> Result<(), CellError> {
        if !self.screen.check_bounds(x, y) {
            return Err(CellError::InvalidCoordinates { x, y });
        }
        let index = self.charset.add(tile)?;
        self.screen.set(x, y, index)?;
        self.colors.set(x, y, color)
    }
}
