//! Test fixtures: images and legacy files written into a temp directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cell_gfx::{Image, Palette};
use gfx_convert::codec::write_png;
use tempfile::TempDir;

/// C64 palette indices used by the fixtures
pub mod colors {
    pub const BLACK: u8 = 0;
    pub const WHITE: u8 = 1;
    pub const RED: u8 = 2;
    pub const PURPLE: u8 = 4;
    pub const BLUE: u8 = 6;
    pub const YELLOW: u8 = 7;
    pub const LIGHT_RED: u8 = 10;
    pub const TRANSPARENT: u8 = 255;
}

pub fn c64_palette() -> Arc<Palette> {
    Arc::new(Palette::c64_colodore())
}

/// An image filled with one palette index.
pub fn filled_image(width: usize, height: usize, index: u8) -> Image {
    let mut image = Image::new(width, height, c64_palette());
    fill(&mut image, 0, 0, width, height, index);
    image
}

pub fn fill(image: &mut Image, x0: usize, y0: usize, width: usize, height: usize, index: u8) {
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            image.set(x, y, index).unwrap();
        }
    }
}

/// Write `image` as a PNG named `name` inside `dir`.
pub fn write_png_fixture(dir: &TempDir, name: &str, image: &Image) -> PathBuf {
    let path = dir.path().join(name);
    write_png(&path, image).unwrap();
    path
}

pub fn write_fixture(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

/// An uncompressed Printfox 'P' file of `width` x `height` cells.
///
/// Payload bytes equal to the RLE escape are written as runs of one.
pub fn printfox_p(width: u8, height: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![b'P', height, width];
    for &byte in payload {
        if byte == 0x9b {
            data.extend_from_slice(&[0x9b, 0x01, 0x00, 0x9b]);
        } else {
            data.push(byte);
        }
    }
    data
}

/// Prefix for output files inside `dir`.
pub fn output_prefix(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

pub fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
