//! Printfox / Pagefox run-length encoded bitmaps.
//!
//! A file starts with a one byte tag:
//!
//! | tag | size in cells | run length |
//! |-----|---------------|------------|
//! | `B` | 40x25, 8192 byte bitplane | 1 byte |
//! | `G` | 80x50 | 2 bytes LE |
//! | `P` | height and width bytes follow | 2 bytes LE |
//!
//! The payload is the bitplane followed by one color byte per cell (high
//! nibble for set bits, low nibble for clear bits). `0x9B` starts a run:
//! run length, then the repeated byte. A run length of 0 stands for a
//! literal `0x9B`.

use std::sync::Arc;

use crate::error::{CellError, MalformedInput};
use crate::image::{Image, CELL_SIZE};
use crate::palette::Palette;

const ESCAPE: u8 = 0x9b;

/// Payload geometry announced by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    width: usize,
    height: usize,
    bitmap_size: usize,
    wide_runs: bool,
}

impl Header {
    fn payload_size(&self) -> usize {
        self.bitmap_size + self.width * self.height
    }
}

/// Byte cursor that reports truncation against the expected payload size.
struct Source<'a> {
    data: &'a [u8],
    position: usize,
}

impl Source<'_> {
    fn next(&mut self, produced: usize, expected: usize) -> Result<u8, CellError> {
        let byte = self
            .data
            .get(self.position)
            .copied()
            .ok_or(MalformedInput::TruncatedInput { produced, expected })?;
        self.position += 1;
        Ok(byte)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

fn read_header(source: &mut Source<'_>) -> Result<Header, CellError> {
    let tag = source.next(0, 1)?;
    match tag {
        b'B' => Ok(Header {
            width: 40,
            height: 25,
            bitmap_size: 8192,
            wide_runs: false,
        }),
        b'G' => Ok(Header {
            width: 80,
            height: 50,
            bitmap_size: 80 * 50 * 8,
            wide_runs: true,
        }),
        b'P' => {
            let height = source.next(0, 2)? as usize;
            let width = source.next(0, 2)? as usize;
            Ok(Header {
                width,
                height,
                bitmap_size: width * height * 8,
                wide_runs: true,
            })
        }
        tag => Err(MalformedInput::UnknownFormatTag { tag }.into()),
    }
}

/// Expand the run-length payload to exactly `expected` bytes.
fn unpack(source: &mut Source<'_>, expected: usize, wide_runs: bool) -> Result<Vec<u8>, CellError> {
    let mut payload = Vec::with_capacity(expected);

    while payload.len() < expected {
        let produced = payload.len();
        let byte = source.next(produced, expected)?;
        if byte != ESCAPE {
            payload.push(byte);
            continue;
        }

        let mut run = source.next(produced, expected)? as usize;
        if wide_runs {
            run |= (source.next(produced, expected)? as usize) << 8;
        }
        let value = source.next(produced, expected)?;

        if run == 0 {
            payload.push(ESCAPE);
        } else {
            // Runs past the end of the payload are cut off.
            let run = run.min(expected - produced);
            payload.resize(produced + run, value);
        }
    }

    if source.remaining() > 0 {
        return Err(MalformedInput::TrailingData {
            count: source.remaining(),
        }
        .into());
    }

    Ok(payload)
}

/// Decompress a Printfox file into the raw bitplane + color payload.
///
/// Returns `(width, height, payload)` with dimensions in cells.
pub fn unpack_printfox(data: &[u8]) -> Result<(usize, usize, Vec<u8>), CellError> {
    let mut source = Source { data, position: 0 };
    let header = read_header(&mut source)?;
    let payload = unpack(&mut source, header.payload_size(), header.wide_runs)?;
    Ok((header.width, header.height, payload))
}

/// Decode a Printfox file into an image.
pub fn decode_printfox(data: &[u8], palette: Arc<Palette>) -> Result<Image, CellError> {
    let mut source = Source { data, position: 0 };
    let header = read_header(&mut source)?;
    let payload = unpack(&mut source, header.payload_size(), header.wide_runs)?;

    let (bitmap, colors) = payload.split_at(header.bitmap_size);
    let mut image = Image::new(header.width * CELL_SIZE, header.height * CELL_SIZE, palette);

    for (cell, &color) in colors.iter().enumerate() {
        let x = (cell % header.width) * CELL_SIZE;
        let y = (cell / header.width) * CELL_SIZE;
        for row in 0..CELL_SIZE {
            let byte = bitmap[cell * CELL_SIZE + row];
            for column in 0..CELL_SIZE {
                let index = if byte & (0x80 >> column) != 0 {
                    color >> 4
                } else {
                    color & 0x0f
                };
                image.set(x + column, y + row, index)?;
            }
        }
    }

    tracing::debug!(
        width = header.width,
        height = header.height,
        packed = data.len(),
        "Decoded Printfox image"
    );

    Ok(image)
}
