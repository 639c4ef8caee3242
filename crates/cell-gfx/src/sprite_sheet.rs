//! Hardware sprite sheets (24x21 monochrome).

use crate::error::CellError;
use crate::image::{CellColors, Image};

pub const SPRITE_WIDTH: usize = 24;
pub const SPRITE_HEIGHT: usize = 21;

/// Bytes per sprite slot; the 64th byte is padding.
pub const SPRITE_SLOT_SIZE: usize = 64;

const BYTES_PER_ROW: usize = SPRITE_WIDTH / 8;

/// A grid of monochrome sprites stored in 64 byte slots, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    rows: usize,
    columns: usize,
    data: Vec<u8>,
}

impl SpriteSheet {
    /// An empty sheet of `rows` x `columns` sprites.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![0; rows * columns * SPRITE_SLOT_SIZE],
        }
    }

    /// Cut `image` into 24x21 sprites.
    ///
    /// With `background` set, pixels of that color and transparent pixels
    /// are clear. Without it, only transparent pixels are clear and the
    /// first other color of each sprite becomes its foreground.
    pub fn from_image(image: &Image, background: Option<u8>) -> Result<Self, CellError> {
        image.check_cell_multiple(
            SPRITE_WIDTH,
            SPRITE_HEIGHT,
            "image dimensions not multiple of sprite size",
        )?;

        let background = background.unwrap_or(image.palette().transparent_index());
        let mut sheet = Self::new(image.height() / SPRITE_HEIGHT, image.width() / SPRITE_WIDTH);

        for sheet_y in 0..sheet.rows {
            for sheet_x in 0..sheet.columns {
                let mut colors = CellColors::new(Some(background), None);
                let offset = (sheet_y * sheet.columns + sheet_x) * SPRITE_SLOT_SIZE;

                for sprite_y in 0..SPRITE_HEIGHT {
                    for byte_x in 0..BYTES_PER_ROW {
                        sheet.data[offset + sprite_y * BYTES_PER_ROW + byte_x] = image.get_byte(
                            sheet_x * SPRITE_WIDTH + byte_x * 8,
                            sheet_y * SPRITE_HEIGHT + sprite_y,
                            &mut colors,
                        )?;
                    }
                }

                // TODO: emit colors.foreground once the sheet format has a
                // per-sprite color table.
            }
        }

        tracing::debug!(
            rows = sheet.rows,
            columns = sheet.columns,
            "Encoded sprite sheet"
        );

        Ok(sheet)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All slots, `rows * columns * 64` bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The 64 byte slot of sprite `(column, row)`.
    pub fn sprite(&self, column: usize, row: usize) -> Option<&[u8]> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let offset = (row * self.columns + column) * SPRITE_SLOT_SIZE;
        Some(&self.data[offset..offset + SPRITE_SLOT_SIZE])
    }
}
