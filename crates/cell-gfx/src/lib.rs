#![allow(clippy::module_inception)]

//! cell-gfx: attribute-cell graphics for 8-bit home computers
//!
//! Converts palette-indexed images into the video memory formats of
//! hardware that can show only two colors per 8x8 cell: hires bitmaps,
//! character mode screens with a deduplicated charset, and sprite sheets.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use cell_gfx::{Bitmap, Image, Layout, Palette};
//!
//! let palette = Arc::new(Palette::c64_colodore());
//! let mut image = Image::new(16, 8, palette);
//! for y in 0..8 {
//!     image.set(3, y, 1).unwrap();
//! }
//!
//! let bitmap = Bitmap::from_image(&image, Layout::C64, Some(0), None).unwrap();
//!
//! assert_eq!(bitmap.bitmap_bytes()[0], 0b0001_0000);
//! assert_eq!(bitmap.screen_bytes(), &[0x01, 0x00]);
//! ```
//!
//! # Cell Colors
//!
//! Every encoder reduces a cell through [`Image::get_byte`], seeded with a
//! [`CellColors`] that holds what the target format already fixes:
//!
//! - [`Bitmap`]: optional background and foreground hints, both discovered
//!   per cell when absent
//! - [`TextScreen`]: one shared background, foreground discovered per cell
//! - [`SpriteSheet`]: background (or the transparent index), foreground
//!   discovered per sprite
//!
//! A cell that needs a third color fails with [`CellError::ColorClash`].
//!
//! # Layouts
//!
//! [`Layout::C64`] stores each cell's 8 bytes consecutively and packs
//! `foreground | background << 4` into the screen byte.
//! [`Layout::Spectrum`] interleaves pixel rows across screen thirds and
//! stores `bright | paper << 3 | ink` attributes; it only supports the full
//! 32x24 cell screen.
//!
//! # Input Formats
//!
//! The [`decode`] module reads Printfox/Pagefox RLE files, raw palette
//! index dumps and C64 character ROMs.

pub mod bitmap;
pub mod charset;
pub mod decode;
pub mod error;
pub mod image;
pub mod palette;
pub mod sprite_sheet;
pub mod text_screen;

#[cfg(test)]
mod domain_tests;

pub use bitmap::{Bitmap, Layout};
pub use charset::{Charset, Tile, MAX_CHARS};
pub use decode::{decode_printfox, decode_raw, decode_raw_charset};
pub use error::{CellError, MalformedInput, Position};
pub use image::{CellColors, Image, PixelGrid, CELL_SIZE};
pub use palette::{Palette, PaletteBuilder, Rgb};
pub use sprite_sheet::SpriteSheet;
pub use text_screen::TextScreen;
