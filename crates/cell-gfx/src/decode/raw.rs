//! Headerless palette index dumps.

use std::sync::Arc;

use crate::error::{CellError, MalformedInput};
use crate::image::Image;
use crate::palette::Palette;

/// Decode `width * height` palette indices, row-major.
///
/// Bytes past the image are ignored. Every index must be valid for
/// `palette`.
pub fn decode_raw(
    data: &[u8],
    palette: Arc<Palette>,
    width: usize,
    height: usize,
) -> Result<Image, CellError> {
    let expected = width
        .checked_mul(height)
        .ok_or(CellError::InvalidDimensions {
            width,
            height,
            reason: "pixel count overflows",
        })?;
    if data.len() < expected {
        return Err(MalformedInput::TruncatedInput {
            produced: data.len(),
            expected,
        }
        .into());
    }

    let mut image = Image::new(width, height, palette);
    for (offset, &index) in data[..expected].iter().enumerate() {
        image.set(offset % width, offset / width, index)?;
    }

    Ok(image)
}
