//! Hardware layouts for bitmap and attribute planes.
//!
//! Each layout is a strategy picked once when a [`Bitmap`](super::Bitmap) is
//! built. It decides the size of the pixel plane, where a cell's eight
//! bytes go, how the color pair is packed into the attribute byte and which
//! color pairs the hardware cannot show.

use std::fmt;
use std::str::FromStr;

use crate::charset::Tile;
use crate::error::CellError;
use crate::image::PixelGrid;

/// Spectrum screen size in cells.
pub const SPECTRUM_WIDTH: usize = 32;
pub const SPECTRUM_HEIGHT: usize = 24;

/// Size of the Spectrum pixel plane in bytes.
pub const SPECTRUM_BITMAP_SIZE: usize = 6144;

const SPECTRUM_THIRD_SIZE: usize = 2048;
const SPECTRUM_BRIGHT: u8 = 0x40;
const BRIGHT_BIT: u8 = 0x08;
const MAX_ATTRIBUTE_COLOR: u8 = 0x0f;

/// Target hardware of a [`Bitmap`](super::Bitmap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Commodore 64 hires bitmap: linear 8-byte cells, one screen byte per
    /// cell holding `fg | bg << 4`.
    #[default]
    C64,
    /// ZX Spectrum screen: interleaved 6144 byte pixel plane and 768 byte
    /// attribute plane, fixed at 32x24 cells.
    Spectrum,
}

impl Layout {
    pub(crate) fn strategy(self) -> &'static dyn CellLayout {
        match self {
            Layout::C64 => &C64Layout,
            Layout::Spectrum => &SpectrumLayout,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::C64 => "c64",
            Layout::Spectrum => "spectrum",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c64" => Ok(Layout::C64),
            "spectrum" | "zx" => Ok(Layout::Spectrum),
            other => Err(format!("unknown layout '{other}'")),
        }
    }
}

/// Placement contract shared by all layouts.
pub(crate) trait CellLayout: Sync {
    /// Reject cell dimensions the hardware cannot display.
    fn check_size(&self, width: usize, height: usize) -> Result<(), CellError>;

    /// Length of the pixel plane for `width` x `height` cells.
    fn bitmap_len(&self, width: usize, height: usize) -> usize;

    /// Write one cell's pixels and color pair.
    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        bitmap: &mut [u8],
        screen: &mut PixelGrid,
        x: usize,
        y: usize,
        tile: &Tile,
        foreground: u8,
        background: u8,
    ) -> Result<(), CellError>;

    /// Read one cell back as `(tile, foreground, background)`.
    fn cell(
        &self,
        bitmap: &[u8],
        screen: &PixelGrid,
        x: usize,
        y: usize,
    ) -> Result<(Tile, u8, u8), CellError>;
}

struct C64Layout;

impl C64Layout {
    fn offset(screen: &PixelGrid, x: usize, y: usize) -> usize {
        (y * screen.width() + x) * 8
    }
}

impl CellLayout for C64Layout {
    fn check_size(&self, _width: usize, _height: usize) -> Result<(), CellError> {
        Ok(())
    }

    fn bitmap_len(&self, width: usize, height: usize) -> usize {
        width * height * 8
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        bitmap: &mut [u8],
        screen: &mut PixelGrid,
        x: usize,
        y: usize,
        tile: &Tile,
        foreground: u8,
        background: u8,
    ) -> Result<(), CellError> {
        for color in [foreground, background] {
            if color > MAX_ATTRIBUTE_COLOR {
                return Err(CellError::UnencodableColor { color, x, y });
            }
        }
        screen.set(x, y, foreground | (background << 4))?;
        let offset = Self::offset(screen, x, y);
        bitmap[offset..offset + 8].copy_from_slice(tile.rows());
        Ok(())
    }

    fn cell(
        &self,
        bitmap: &[u8],
        screen: &PixelGrid,
        x: usize,
        y: usize,
    ) -> Result<(Tile, u8, u8), CellError> {
        let attribute = screen.get(x, y)?;
        let offset = Self::offset(screen, x, y);
        let mut rows = [0u8; 8];
        rows.copy_from_slice(&bitmap[offset..offset + 8]);
        Ok((Tile::new(rows), attribute & 0x0f, attribute >> 4))
    }
}

struct SpectrumLayout;

impl SpectrumLayout {
    /// Byte offset of pixel row `row` of cell `(x, y)`.
    fn offset(x: usize, y: usize, row: usize) -> usize {
        (y / 8) * SPECTRUM_THIRD_SIZE + x + (y % 8) * 32 + row * 256
    }

    fn from_attribute(color: u8, bright: bool) -> u8 {
        if bright && color != 0 {
            color | BRIGHT_BIT
        } else {
            color
        }
    }
}

impl CellLayout for SpectrumLayout {
    fn check_size(&self, width: usize, height: usize) -> Result<(), CellError> {
        if width != SPECTRUM_WIDTH || height != SPECTRUM_HEIGHT {
            return Err(CellError::InvalidDimensions {
                width: width * 8,
                height: height * 8,
                reason: "Spectrum screens must be 256x192",
            });
        }
        Ok(())
    }

    fn bitmap_len(&self, _width: usize, _height: usize) -> usize {
        SPECTRUM_BITMAP_SIZE
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        bitmap: &mut [u8],
        screen: &mut PixelGrid,
        x: usize,
        y: usize,
        tile: &Tile,
        foreground: u8,
        background: u8,
    ) -> Result<(), CellError> {
        // Bright black reads back as black, so only 0..=7 and 9..=15 survive.
        for color in [foreground, background] {
            if color > MAX_ATTRIBUTE_COLOR || color == BRIGHT_BIT {
                return Err(CellError::UnencodableColor { color, x, y });
            }
        }

        // Black has no bright variant, so it combines with either half.
        if (foreground ^ background) & BRIGHT_BIT != 0 && foreground != 0 && background != 0 {
            return Err(CellError::MixedBrightness { x, y });
        }

        let bright = if (foreground | background) & BRIGHT_BIT != 0 {
            SPECTRUM_BRIGHT
        } else {
            0
        };
        let ink = foreground & 0x07;
        let paper = background & 0x07;
        screen.set(x, y, bright | (paper << 3) | ink)?;

        for (row, &byte) in tile.rows().iter().enumerate() {
            bitmap[Self::offset(x, y, row)] = byte;
        }
        Ok(())
    }

    fn cell(
        &self,
        bitmap: &[u8],
        screen: &PixelGrid,
        x: usize,
        y: usize,
    ) -> Result<(Tile, u8, u8), CellError> {
        let attribute = screen.get(x, y)?;
        let bright = attribute & SPECTRUM_BRIGHT != 0;
        let mut rows = [0u8; 8];
        for (row, byte) in rows.iter_mut().enumerate() {
            *byte = bitmap[Self::offset(x, y, row)];
        }
        Ok((
            Tile::new(rows),
            Self::from_attribute(attribute & 0x07, bright),
            Self::from_attribute((attribute >> 3) & 0x07, bright),
        ))
    }
}
