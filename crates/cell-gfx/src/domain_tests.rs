//! Cross-module regression tests for cell-gfx.
//!
//! Each test documents the hardware behavior it guards.

#[cfg(test)]
mod domain_tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::bitmap::{Bitmap, Layout, SPECTRUM_HEIGHT, SPECTRUM_WIDTH};
    use crate::charset::{Charset, Tile};
    use crate::decode::unpack_printfox;
    use crate::error::{CellError, MalformedInput};
    use crate::image::{CellColors, Image, CELL_SIZE};
    use crate::palette::{Palette, Rgb};
    use crate::text_screen::TextScreen;

    fn c64_image(width: usize, height: usize) -> Image {
        Image::new(width, height, Arc::new(Palette::c64_colodore()))
    }

    /// Deterministic two-color pattern: each cell gets its own foreground
    /// and a pixel pattern derived from its position.
    fn two_color_image(cells_x: usize, cells_y: usize, background: u8, colors: &[u8]) -> Image {
        let mut image = c64_image(cells_x * CELL_SIZE, cells_y * CELL_SIZE);
        for y in 0..image.height() {
            for x in 0..image.width() {
                let cell = (y / CELL_SIZE) * cells_x + x / CELL_SIZE;
                let foreground = colors[cell % colors.len()];
                let on = (x * 7 + y * 3 + cell) % 5 < 2;
                image
                    .set(x, y, if on { foreground } else { background })
                    .unwrap();
            }
        }
        image
    }

    // ========================================================================
    // Tile deduplication
    // ========================================================================

    /// If this breaks, it means: tiles differing in a single bit collide in
    /// the dedup map, or a repeated tile is stored twice.
    #[test]
    fn test_single_bit_differences_get_distinct_indices() {
        let mut charset = Charset::new();
        let mut indices = Vec::new();
        for bit in 0..64 {
            let tile = Tile((1u64 << bit).to_be_bytes());
            indices.push(charset.add(&tile).unwrap());
        }

        let expected: Vec<u8> = (0..64).collect();
        assert_eq!(indices, expected);

        for bit in 0..64 {
            let tile = Tile((1u64 << bit).to_be_bytes());
            assert_eq!(charset.add(&tile).unwrap(), bit as u8);
        }
        assert_eq!(charset.len(), 64);
    }

    /// If this breaks, it means: the charset either refuses its last slot or
    /// silently overflows past the hardware limit.
    #[test]
    fn test_capacity_is_exact() {
        let mut charset = Charset::new();
        for n in 0..256u64 {
            assert_eq!(charset.add(&Tile(n.to_be_bytes())).unwrap(), n as u8);
        }
        assert_eq!(
            charset.add(&Tile(256u64.to_be_bytes())),
            Err(CellError::CharsetFull { max_chars: 256 })
        );
        // Known tiles still resolve once full.
        assert_eq!(charset.add(&Tile(7u64.to_be_bytes())).unwrap(), 7);

        let mut small = Charset::with_max_chars(4).unwrap();
        for n in 0..4u64 {
            small.add(&Tile(n.to_be_bytes())).unwrap();
        }
        assert_eq!(
            small.add(&Tile(4u64.to_be_bytes())),
            Err(CellError::CharsetFull { max_chars: 4 })
        );
    }

    /// If this breaks, it means: reloading a saved charset gives the blank
    /// tile two indices, so text screens built on it stop being stable.
    #[test]
    fn test_reload_keeps_one_blank() {
        let a = Tile::new([0x18; 8]);
        let b = Tile::new([0x81; 8]);
        let mut data = Vec::new();
        for tile in [a, Tile::BLANK, Tile::BLANK, b] {
            data.extend_from_slice(tile.rows());
        }

        let mut charset = Charset::from_bytes(&data, 256).unwrap();

        assert_eq!(charset.find(&Tile::BLANK), Some(1));
        assert_eq!(charset.find(&a), Some(0));
        assert_eq!(charset.find(&b), Some(3));
        assert_eq!(charset.add(&Tile::BLANK).unwrap(), 1);
        assert_eq!(charset.add(&Tile::new([0xff; 8])).unwrap(), 4);
    }

    /// If this breaks, it means: a full-size save no longer reloads to the
    /// charset it was written from.
    #[test]
    fn test_full_save_reloads() {
        let mut image = c64_image(24, 8);
        image.set(1, 1, 3).unwrap();
        image.set(17, 6, 3).unwrap();
        let text = TextScreen::from_image(&image, 0).unwrap();

        let saved = text.charset.to_bytes(true);
        assert_eq!(saved.len(), 256 * 8);

        let reloaded = Charset::from_bytes(&saved, 256).unwrap();
        assert_eq!(reloaded.len(), text.charset.len());
        assert_eq!(reloaded.to_bytes(false), text.charset.to_bytes(false));
    }

    // ========================================================================
    // Color clash resolution
    // ========================================================================

    /// If this breaks, it means: bits no longer mark exactly the foreground
    /// pixels of a two-color cell.
    #[test]
    fn test_two_color_cell_marks_foreground() {
        let mut image = c64_image(8, 8);
        let foreground = [(0, 0), (7, 0), (3, 4), (4, 4), (0, 7)];
        for &(x, y) in &foreground {
            image.set(x, y, 13).unwrap();
        }

        let mut colors = CellColors::new(Some(0), None);
        let tile = image.get_tile(0, 0, &mut colors).unwrap();

        assert_eq!(colors.foreground, Some(13));
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(tile.pixel(x, y), foreground.contains(&(x, y)), "({x}, {y})");
            }
        }
    }

    /// If this breaks, it means: a clash is reported at the wrong pixel, or
    /// transparent pixels count as a color.
    #[test]
    fn test_clash_reports_exact_pixel() {
        let mut image = c64_image(16, 16);
        image.set(9, 10, 2).unwrap();
        image.set(12, 11, 255).unwrap();
        image.set(13, 12, 5).unwrap();

        let err = Bitmap::from_image(&image, Layout::C64, Some(0), None).unwrap_err();
        assert_eq!(err, CellError::ColorClash { x: 13, y: 12 });

        image.set(13, 12, 2).unwrap();
        assert!(Bitmap::from_image(&image, Layout::C64, Some(0), None).is_ok());
    }

    // ========================================================================
    // Hardware layouts
    // ========================================================================

    /// If this breaks, it means: C64 bitmap or screen bytes no longer
    /// describe the image they were built from.
    #[test]
    fn test_c64_round_trip() {
        let image = two_color_image(5, 3, 6, &[1, 2, 7, 14]);

        let bitmap = Bitmap::from_image(&image, Layout::C64, Some(6), None).unwrap();
        let decoded = bitmap.to_image(image.palette().clone()).unwrap();

        assert_eq!(decoded.pixels(), image.pixels());
    }

    /// If this breaks, it means: the Spectrum third/row interleave or the
    /// bright flag handling lost information.
    #[test]
    fn test_spectrum_round_trip() {
        let image = two_color_image(SPECTRUM_WIDTH, SPECTRUM_HEIGHT, 0, &[1, 10, 7, 15, 4]);

        let bitmap = Bitmap::from_image(&image, Layout::Spectrum, Some(0), None).unwrap();
        let decoded = bitmap.to_image(image.palette().clone()).unwrap();

        assert_eq!(decoded.pixels(), image.pixels());
    }

    /// If this breaks, it means: cells the hardware cannot show (bright ink
    /// on dark paper) are silently encoded.
    #[test]
    fn test_spectrum_mixed_brightness() {
        let mut image = c64_image(SPECTRUM_WIDTH * CELL_SIZE, SPECTRUM_HEIGHT * CELL_SIZE);
        for y in 0..image.height() {
            for x in 0..image.width() {
                image.set(x, y, 2).unwrap();
            }
        }
        image.set(8 * 3 + 1, 8 * 2 + 1, 10).unwrap();

        let err = Bitmap::from_image(&image, Layout::Spectrum, Some(2), None).unwrap_err();
        assert_eq!(err, CellError::MixedBrightness { x: 3, y: 2 });

        let mut black = c64_image(SPECTRUM_WIDTH * CELL_SIZE, SPECTRUM_HEIGHT * CELL_SIZE);
        black.set(8 * 3 + 1, 8 * 2 + 1, 10).unwrap();
        let bitmap = Bitmap::from_image(&black, Layout::Spectrum, Some(0), None).unwrap();
        assert_eq!(bitmap.screen_bytes()[2 * 32 + 3], 0x40 | 2);
    }

    /// If this breaks, it means: a palette index wider than the attribute
    /// nibble is truncated into some other color instead of failing.
    #[test]
    fn test_attribute_rejects_wide_palette_index() {
        let colors = (0..17u32).map(|i| Rgb::new(i * 0x0f0f0f)).collect();
        let palette = Arc::new(Palette::new(colors, 255).unwrap());

        let mut image = Image::new(16, 8, palette.clone());
        image.set(8, 0, 16).unwrap();
        let err = Bitmap::from_image(&image, Layout::C64, Some(0), None).unwrap_err();
        assert_eq!(err, CellError::UnencodableColor { color: 16, x: 1, y: 0 });

        let mut screen = Image::new(
            SPECTRUM_WIDTH * CELL_SIZE,
            SPECTRUM_HEIGHT * CELL_SIZE,
            palette,
        );
        screen.set(8 * 3, 8 * 2, 16).unwrap();
        let err = Bitmap::from_image(&screen, Layout::Spectrum, Some(0), None).unwrap_err();
        assert_eq!(err, CellError::UnencodableColor { color: 16, x: 3, y: 2 });
    }

    // ========================================================================
    // Printfox
    // ========================================================================

    /// If this breaks, it means: the RLE escape is read with the wrong run
    /// length width for 'B' files.
    #[test]
    fn test_printfox_short_run() {
        let mut data = vec![b'B', 0x9b, 0x05, 0x00];
        let mut left = 8192 + 1000 - 5;
        while left > 0 {
            let run = left.min(200);
            data.extend_from_slice(&[0x9b, run as u8, 0xaa]);
            left -= run;
        }

        let (_, _, payload) = unpack_printfox(&data).unwrap();
        assert_eq!(&payload[..6], &[0, 0, 0, 0, 0, 0xaa]);

        assert!(matches!(
            unpack_printfox(&data[..data.len() - 1]),
            Err(CellError::Malformed(MalformedInput::TruncatedInput { .. }))
        ));

        data.push(0);
        assert_eq!(
            unpack_printfox(&data),
            Err(CellError::Malformed(MalformedInput::TrailingData { count: 1 }))
        );
    }
}
