use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gfx_convert::convert::{Converter, InputFormat, OutputFormat};
use gfx_convert::models::ConvertConfig;

#[derive(Parser)]
#[command(name = "gfx-convert")]
#[command(about = "Convert images into C64 and ZX Spectrum graphics data")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(value_enum)]
    format: OutputFormat,

    /// Input image
    input: PathBuf,

    /// Output file, or prefix for formats that write several files
    output: PathBuf,

    /// Input format (default: guessed from the file extension)
    #[arg(short, long, value_enum)]
    input_format: Option<InputFormat>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bitmap layout: "c64" or "spectrum"
    #[arg(short, long)]
    layout: Option<String>,

    /// Width in pixels of raw input
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Height in pixels of raw input
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// Pad the charset to 256 characters
    #[arg(long)]
    full_charset: bool,

    /// Log conversion details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "gfx_convert=debug,cell_gfx=debug"
    } else {
        "gfx_convert=warn,cell_gfx=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gfx-convert: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ConvertConfig::load(path).context("can't load configuration")?,
        None => ConvertConfig::default(),
    };
    if let Some(layout) = cli.layout {
        config.bitmap.layout = layout;
    }
    if cli.full_charset {
        config.text.full_charset = true;
    }

    let converter = Converter::new(config).context("invalid configuration")?;
    let dimensions = cli.width.zip(cli.height);

    converter
        .run(
            &cli.input,
            cli.input_format,
            dimensions,
            cli.format,
            &cli.output,
        )
        .with_context(|| format!("can't convert '{}' to {}", cli.input.display(), cli.format))?;

    Ok(())
}
