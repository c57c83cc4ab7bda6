//! Shared plumbing for the generator binaries

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::core::config::{load_config, GeneratorConfig};
use crate::core::error::Result;
use crate::render::{export, markup, Composition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Flags every generator binary understands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// TOML file with generator settings; explicit flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fixed seed for reproducible output
    #[arg(long, value_name = "INT")]
    pub random_seed: Option<u64>,

    /// Rasterize the artwork into this PNG file instead of printing SVG
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Pixel width of the PNG; height follows the view box
    #[arg(long, value_name = "INT")]
    pub output_size: Option<u32>,

    /// Format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default filter
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("generative_grids=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Config from `path`, or the defaults when no file was given
pub fn load_or_default<T: GeneratorConfig>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => load_config(path),
        None => Ok(T::default()),
    }
}

/// Write the composition as requested by `args`
pub fn emit(composition: &Composition, args: &OutputArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut out, composition)?;
        writeln!(out)?;
        return Ok(());
    }

    let svg = markup::to_svg(composition);
    if let Some(path) = &args.output {
        match export::rasterize(&svg, args.output_size, path) {
            Ok(()) => return Ok(()),
            Err(e) => tracing::error!("Couldn't rasterize nor write a PNG file: {}", e),
        }
    }
    writeln!(out, "{}", svg)?;
    Ok(())
}
