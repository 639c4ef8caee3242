//! PNG <-> palette-indexed [`Image`] conversion.

use std::path::Path;
use std::sync::Arc;

use cell_gfx::{Image, Palette, Rgb};

use crate::error::ConvertError;
use crate::files;

/// Decode PNG data onto `palette`.
///
/// Opaque pixels must match a palette entry exactly. Fully transparent
/// pixels become the palette's transparent index; any other alpha value is
/// rejected.
pub fn decode_png(data: &[u8], palette: Arc<Palette>) -> Result<Image, ConvertError> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    let samples = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(ConvertError::PngColorType(other)),
    };

    let width = info.width as usize;
    let height = info.height as usize;
    let transparent = palette.transparent_index();
    let mut image = Image::new(width, height, palette);

    for (y, line) in buf.chunks(info.line_size).take(height).enumerate() {
        for (x, pixel) in line[..width * samples].chunks_exact(samples).enumerate() {
            let alpha = if samples % 2 == 0 { pixel[samples - 1] } else { 255 };
            match alpha {
                255 => {
                    let color = if samples < 3 {
                        Rgb::from_u8(pixel[0], pixel[0], pixel[0])
                    } else {
                        Rgb::from_u8(pixel[0], pixel[1], pixel[2])
                    };
                    image.set_rgb(x, y, color)?;
                }
                0 => image.set(x, y, transparent)?,
                alpha => return Err(ConvertError::InvalidAlpha { alpha, x, y }),
            }
        }
    }

    Ok(image)
}

/// Encode `image` as 8-bit RGBA; the transparent index gets alpha 0.
pub fn encode_png(image: &Image) -> Result<Vec<u8>, ConvertError> {
    let transparent = image.palette().transparent_index();
    let mut rgba = Vec::with_capacity(image.width() * image.height() * 4);

    for y in 0..image.height() {
        for x in 0..image.width() {
            if image.get(x, y)? == transparent {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                rgba.extend_from_slice(&image.get_rgb(x, y)?.to_bytes());
                rgba.push(255);
            }
        }
    }

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width() as u32, image.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
        writer.finish()?;
    }
    Ok(buf)
}

pub fn read_png(path: &Path, palette: Arc<Palette>) -> Result<Image, ConvertError> {
    decode_png(&files::read_file(path)?, palette)
}

pub fn write_png(path: &Path, image: &Image) -> Result<(), ConvertError> {
    files::write_file(path, &encode_png(image)?)
}
