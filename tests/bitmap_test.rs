//! End-to-end bitmap and sprite conversion from PNG input.

mod common;

use cell_gfx::CellError;
use common::colors::*;
use common::*;
use gfx_convert::convert::{Converter, OutputFormat};
use gfx_convert::error::ConvertError;
use gfx_convert::models::ConvertConfig;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_c64_bitmap_files() {
    let dir = TempDir::new().unwrap();
    let mut image = filled_image(16, 8, BLUE);
    fill(&mut image, 0, 0, 1, 8, WHITE);
    let input = write_png_fixture(&dir, "stripe.png", &image);
    let prefix = output_prefix(&dir, "stripe");

    let converter = Converter::new(ConvertConfig::default()).unwrap();
    let written = converter
        .run(&input, None, None, OutputFormat::Bitmap, &prefix)
        .unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("stripe-bitmap.bin"),
            dir.path().join("stripe-screen.bin"),
        ]
    );

    let mut bitmap = vec![0x80; 8];
    bitmap.extend_from_slice(&[0x00; 8]);
    assert_eq!(read(&written[0]), bitmap);
    // Foreground hint 1 holds for both cells, background is discovered.
    assert_eq!(read(&written[1]), vec![WHITE | BLUE << 4; 2]);
}

#[test]
fn test_spectrum_layout_from_config() {
    let dir = TempDir::new().unwrap();
    let mut image = filled_image(256, 192, BLACK);
    fill(&mut image, 8, 64, 8, 1, LIGHT_RED);
    let input = write_png_fixture(&dir, "screen.png", &image);
    let config_path = write_fixture(
        &dir,
        "zx.yaml",
        b"bitmap:\n  layout: spectrum\n  foreground: null\n  background: 0\n",
    );
    let prefix = output_prefix(&dir, "zx");

    let converter = Converter::new(ConvertConfig::load(&config_path).unwrap()).unwrap();
    let written = converter
        .run(&input, None, None, OutputFormat::Bitmap, &prefix)
        .unwrap();

    let bitmap = read(&written[0]);
    let screen = read(&written[1]);
    assert_eq!(bitmap.len(), 6144);
    assert_eq!(screen.len(), 768);
    // Cell (1, 8): second third, first row of the cell.
    assert_eq!(bitmap[2048 + 1], 0xff);
    assert_eq!(bitmap.iter().filter(|&&b| b != 0).count(), 1);
    assert_eq!(screen[8 * 32 + 1], 0x40 | 2);
}

#[test]
fn test_color_clash_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut image = filled_image(8, 8, BLACK);
    image.set(2, 3, RED).unwrap();
    image.set(5, 3, YELLOW).unwrap();
    let input = write_png_fixture(&dir, "clash.png", &image);
    let prefix = output_prefix(&dir, "clash");

    let mut config = ConvertConfig::default();
    config.bitmap.foreground = None;
    let converter = Converter::new(config).unwrap();
    let err = converter
        .run(&input, None, None, OutputFormat::Bitmap, &prefix)
        .unwrap_err();

    assert!(matches!(
        err,
        ConvertError::Cell(CellError::ColorClash { x: 5, y: 3 })
    ));
    assert!(!dir.path().join("clash-bitmap.bin").exists());
}

#[test]
fn test_unknown_color_reports_position() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("odd.png");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(file, 2, 2);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0x12, 0x34, 0x56])
            .unwrap();
    }

    let converter = Converter::new(ConvertConfig::default()).unwrap();
    let err = converter
        .run(&path, None, None, OutputFormat::Bitmap, &output_prefix(&dir, "odd"))
        .unwrap_err();

    assert_eq!(err.to_string(), "invalid color $123456 at (1, 1)");
}

#[test]
fn test_sprite_sheet_single_file() {
    let dir = TempDir::new().unwrap();
    let mut image = filled_image(48, 21, TRANSPARENT);
    fill(&mut image, 0, 0, 24, 1, PURPLE);
    fill(&mut image, 47, 20, 1, 1, WHITE);
    let input = write_png_fixture(&dir, "sprites.png", &image);
    let output = output_prefix(&dir, "sprites.bin");

    let converter = Converter::new(ConvertConfig::default()).unwrap();
    let written = converter
        .run(&input, None, None, OutputFormat::Sprites, &output)
        .unwrap();

    assert_eq!(written, vec![output.clone()]);
    let data = read(&output);
    assert_eq!(data.len(), 128);
    assert_eq!(&data[..3], &[0xff, 0xff, 0xff]);
    assert!(data[3..64].iter().all(|&b| b == 0));
    assert_eq!(data[64 + 62], 0x01);
}

#[test]
fn test_missing_input_names_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.png");

    let converter = Converter::new(ConvertConfig::default()).unwrap();
    let err = converter
        .run(&input, None, None, OutputFormat::Bitmap, &output_prefix(&dir, "x"))
        .unwrap_err();

    match err {
        ConvertError::Io { path, .. } => assert_eq!(path, input),
        other => panic!("Expected Io error, got {other:?}"),
    }
}
