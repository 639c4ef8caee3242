use std::path::{Path, PathBuf};

use cell_gfx::palette::DEFAULT_TRANSPARENT_INDEX;
use cell_gfx::{Layout, Palette};
use serde::Deserialize;

use crate::error::ConvertError;
use crate::files;

/// Conversion settings loaded from a YAML file.
///
/// Every section is optional; missing values fall back to the defaults
/// below, and command line flags are applied on top by the caller.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConvertConfig {
    /// Custom palette; the built-in C64 table when absent
    pub palette: Option<PaletteConfig>,

    pub bitmap: BitmapConfig,

    pub text: TextConfig,

    pub sprites: SpriteConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Colors as `#RRGGBB` strings, in index order
    pub colors: Vec<String>,

    #[serde(default = "default_transparent_index")]
    pub transparent_index: u8,
}

fn default_transparent_index() -> u8 {
    DEFAULT_TRANSPARENT_INDEX
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BitmapConfig {
    /// `c64` or `spectrum`
    pub layout: String,

    /// Foreground hint, `None` to discover per cell
    pub foreground: Option<u8>,

    /// Background hint, `None` to discover per cell
    pub background: Option<u8>,
}

impl Default for BitmapConfig {
    fn default() -> Self {
        Self {
            layout: Layout::C64.name().to_string(),
            foreground: Some(1),
            background: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Shared background color of all cells
    pub background: u8,

    /// Existing charset to extend
    pub charset: Option<PathBuf>,

    /// Pad the charset output to 256 tiles
    pub full_charset: bool,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SpriteConfig {
    /// Background color; `None` treats only transparent pixels as background
    pub background: Option<u8>,
}

impl ConvertConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let data = files::read_file(path)?;
        let config: Self = serde_yaml::from_slice(&data).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            custom_palette = config.palette.is_some(),
            layout = %config.bitmap.layout,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Build the configured palette
    pub fn palette(&self) -> Result<Palette, ConvertError> {
        match &self.palette {
            Some(palette) => {
                let colors: Vec<&str> = palette.colors.iter().map(String::as_str).collect();
                Ok(Palette::from_hex(&colors, palette.transparent_index)?)
            }
            None => Ok(Palette::c64_colodore()),
        }
    }

    /// Parse the configured bitmap layout
    pub fn layout(&self) -> Result<Layout, ConvertError> {
        self.bitmap
            .layout
            .parse()
            .map_err(|_| ConvertError::UnknownFormat {
                kind: "layout",
                name: self.bitmap.layout.clone(),
            })
    }
}
