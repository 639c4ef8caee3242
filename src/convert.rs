//! Input decoding and output format dispatch.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cell_gfx::decode::{decode_printfox, decode_raw, decode_raw_charset};
use cell_gfx::{Bitmap, Charset, Image, Palette, SpriteSheet, TextScreen, MAX_CHARS};

use crate::codec::png::{read_png, write_png};
use crate::error::ConvertError;
use crate::files::{read_file, with_suffix, write_file};
use crate::models::ConvertConfig;

/// Source file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Png,
    /// Printfox / Pagefox RLE (`.pg`, `.gb`, `.pp`)
    Printfox,
    /// Headerless palette indices, needs explicit dimensions
    Raw,
    /// C64 character ROM dump (`.prg`, `.64c`)
    RawCharset,
}

impl InputFormat {
    /// Guess the format from the file extension, defaulting to PNG.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pg" | "gb" | "pp") => InputFormat::Printfox,
            Some("prg" | "64c") => InputFormat::RawCharset,
            _ => InputFormat::Png,
        }
    }
}

/// Target formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Hires bitmap: `-bitmap.bin` and `-screen.bin`
    Bitmap,
    /// Character mode: `-charset.bin`, `-screen.bin` and `-colors.bin`
    Text,
    /// 24x21 sprites in 64 byte slots
    Sprites,
    /// RGBA PNG
    Png,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Bitmap => "bitmap",
            OutputFormat::Text => "text",
            OutputFormat::Sprites => "sprites",
            OutputFormat::Png => "png",
        })
    }
}

/// Runs conversions with one configuration and palette.
pub struct Converter {
    config: ConvertConfig,
    palette: Arc<Palette>,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Result<Self, ConvertError> {
        let palette = Arc::new(config.palette()?);
        Ok(Self { config, palette })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Decode `path` as `format`.
    ///
    /// `dimensions` is `(width, height)` in pixels and only used for
    /// [`InputFormat::Raw`], which requires it.
    pub fn read_image(
        &self,
        path: &Path,
        format: InputFormat,
        dimensions: Option<(usize, usize)>,
    ) -> Result<Image, ConvertError> {
        let palette = self.palette.clone();
        let image = match format {
            InputFormat::Png => read_png(path, palette)?,
            InputFormat::Printfox => decode_printfox(&read_file(path)?, palette)?,
            InputFormat::Raw => {
                let (width, height) = dimensions.ok_or(ConvertError::MissingDimensions)?;
                decode_raw(&read_file(path)?, palette, width, height)?
            }
            InputFormat::RawCharset => {
                let is_prg = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("prg"));
                decode_raw_charset(&read_file(path)?, palette, is_prg)?
            }
        };

        tracing::info!(
            path = %path.display(),
            format = ?format,
            width = image.width(),
            height = image.height(),
            "Read image"
        );

        Ok(image)
    }

    /// Encode `image` as `format` and write the result next to `prefix`.
    ///
    /// Returns the written files in order. Files written before a failure
    /// are left in place.
    pub fn convert(
        &self,
        image: &Image,
        format: OutputFormat,
        prefix: &Path,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        let outputs: Vec<(PathBuf, Vec<u8>)> = match format {
            OutputFormat::Bitmap => {
                let bitmap = self.bitmap(image)?;
                vec![
                    (with_suffix(prefix, "-bitmap.bin"), bitmap.bitmap_bytes().to_vec()),
                    (with_suffix(prefix, "-screen.bin"), bitmap.screen_bytes().to_vec()),
                ]
            }
            OutputFormat::Text => {
                let text = self.text_screen(image)?;
                vec![
                    (
                        with_suffix(prefix, "-charset.bin"),
                        text.charset.to_bytes(self.config.text.full_charset),
                    ),
                    (with_suffix(prefix, "-screen.bin"), text.screen.into_bytes()),
                    (with_suffix(prefix, "-colors.bin"), text.colors.into_bytes()),
                ]
            }
            OutputFormat::Sprites => {
                let sheet = SpriteSheet::from_image(image, self.config.sprites.background)?;
                vec![(prefix.to_path_buf(), sheet.as_bytes().to_vec())]
            }
            OutputFormat::Png => {
                write_png(prefix, image)?;
                tracing::info!(%format, output = %prefix.display(), "Converted image");
                return Ok(vec![prefix.to_path_buf()]);
            }
        };

        let mut written = Vec::with_capacity(outputs.len());
        let mut bytes = 0;
        for (path, data) in outputs {
            write_file(&path, &data)?;
            bytes += data.len();
            written.push(path);
        }

        tracing::info!(%format, files = written.len(), bytes, "Converted image");

        Ok(written)
    }

    /// Read `input` and convert it in one go.
    pub fn run(
        &self,
        input: &Path,
        input_format: Option<InputFormat>,
        dimensions: Option<(usize, usize)>,
        format: OutputFormat,
        prefix: &Path,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        let input_format = input_format.unwrap_or_else(|| InputFormat::from_path(input));
        let image = self.read_image(input, input_format, dimensions)?;
        self.convert(&image, format, prefix)
    }

    fn bitmap(&self, image: &Image) -> Result<Bitmap, ConvertError> {
        let bitmap = &self.config.bitmap;
        Ok(Bitmap::from_image(
            image,
            self.config.layout()?,
            bitmap.background,
            bitmap.foreground,
        )?)
    }

    fn text_screen(&self, image: &Image) -> Result<TextScreen, ConvertError> {
        let text = &self.config.text;
        let charset = match &text.charset {
            Some(path) => Charset::from_bytes(&read_file(path)?, MAX_CHARS)?,
            None => Charset::new(),
        };
        Ok(TextScreen::with_charset(image, text.background, charset)?)
    }
}
