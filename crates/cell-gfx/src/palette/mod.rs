//! Palette types
//!
//! Palettes are plain values: the built-in C64 table is an explicit
//! constructor, not process-wide state.

mod palette;
mod rgb;

pub use palette::{
    Palette, PaletteBuilder, C64_COLODORE, DEFAULT_TRANSPARENT_INDEX, MAX_PALETTE_SIZE,
};
pub use rgb::Rgb;
