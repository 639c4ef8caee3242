//! Image storage
//!
//! [`PixelGrid`] is the raw byte matrix; [`Image`] binds one to a palette
//! and provides the two-color cell reduction every encoder builds on.

mod grid;
mod image;

pub use grid::PixelGrid;
pub use image::{CellColors, Image, CELL_SIZE};
