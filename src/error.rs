use std::path::PathBuf;

use cell_gfx::CellError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Cell(#[from] CellError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG color type {0:?}")]
    PngColorType(png::ColorType),

    #[error("invalid alpha {alpha} at ({x}, {y})")]
    InvalidAlpha { alpha: u8, x: usize, y: usize },

    #[error("Config error in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unknown {kind} '{name}'")]
    UnknownFormat { kind: &'static str, name: String },

    #[error("Raw input needs --width and --height")]
    MissingDimensions,
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
