pub mod config;

pub use config::{BitmapConfig, ConvertConfig, PaletteConfig, SpriteConfig, TextConfig};
