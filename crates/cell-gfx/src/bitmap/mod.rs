//! Hires bitmap encoding
//!
//! [`Bitmap`] holds the pixel and attribute planes; [`Layout`] selects the
//! hardware byte order and attribute packing.

mod bitmap;
mod layout;

pub use bitmap::Bitmap;
pub use layout::{Layout, SPECTRUM_BITMAP_SIZE, SPECTRUM_HEIGHT, SPECTRUM_WIDTH};
