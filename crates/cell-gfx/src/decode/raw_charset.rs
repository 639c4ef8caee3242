//! C64 character ROM dumps.
//!
//! The ROM is laid out as rows of 32 consecutive 8 byte tiles. Set bits
//! decode to palette index 0, clear bits to index 1.

use std::sync::Arc;

use crate::error::{CellError, MalformedInput};
use crate::image::{Image, CELL_SIZE};
use crate::palette::Palette;

/// Tiles per decoded row.
pub const CHARSET_COLUMNS: usize = 32;

/// At most this many rows are read (2 KiB of tile data).
pub const CHARSET_MAX_ROWS: usize = 8;

const ROW_SIZE: usize = CHARSET_COLUMNS * CELL_SIZE;

/// Decode a character ROM into a 256 pixel wide image.
///
/// `skip_load_address` drops the two byte load address of a `.prg` file.
/// Only complete rows are decoded; data beyond eight rows is ignored.
pub fn decode_raw_charset(
    data: &[u8],
    palette: Arc<Palette>,
    skip_load_address: bool,
) -> Result<Image, CellError> {
    let data = if skip_load_address {
        data.get(2..).unwrap_or_default()
    } else {
        data
    };

    let rows = (data.len() / ROW_SIZE).min(CHARSET_MAX_ROWS);
    if rows == 0 {
        return Err(MalformedInput::TruncatedInput {
            produced: data.len(),
            expected: ROW_SIZE,
        }
        .into());
    }

    let mut image = Image::new(CHARSET_COLUMNS * CELL_SIZE, rows * CELL_SIZE, palette);

    for (tile, bytes) in data[..rows * ROW_SIZE].chunks_exact(CELL_SIZE).enumerate() {
        let x = (tile % CHARSET_COLUMNS) * CELL_SIZE;
        let y = (tile / CHARSET_COLUMNS) * CELL_SIZE;
        for (row, &byte) in bytes.iter().enumerate() {
            for column in 0..CELL_SIZE {
                let index = if byte & (0x80 >> column) != 0 { 0 } else { 1 };
                image.set(x + column, y + row, index)?;
            }
        }
    }

    tracing::debug!(rows, "Decoded character ROM");

    Ok(image)
}
