//! Bounds-checked 2D byte matrix.

use crate::error::CellError;

/// A `width` x `height` matrix of bytes stored row-major.
///
/// Backs image pixels (palette indices) as well as the per-cell screen and
/// color planes of the encoders; [`PixelGrid::as_bytes`] is the exact byte
/// layout those planes are written out in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// A zero-filled grid.
    ///
    /// Callers size grids from decoded data, so `width * height` is bounded
    /// by an input that already exists in memory.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
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
    pub fn check_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<u8, CellError> {
        if !self.check_bounds(x, y) {
            return Err(CellError::InvalidCoordinates { x, y });
        }
        Ok(self.data[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), CellError> {
        if !self.check_bounds(x, y) {
            return Err(CellError::InvalidCoordinates { x, y });
        }
        self.data[y * self.width + x] = value;
        Ok(())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
