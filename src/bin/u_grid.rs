//! Grid of Us
//!
//! Prints a grid of randomly rotated U shapes as SVG.

use clap::Parser;
use generative_grids::cli::{self, OutputArgs};
use generative_grids::core::config::GeneratorConfig;
use generative_grids::core::error::{GenError, Result};
use generative_grids::core::random;
use generative_grids::generators::u_grid::{self, UGridConfig};

#[derive(Parser, Debug)]
#[command(name = "u_grid")]
#[command(about = "Generate a grid of randomly rotated U shapes as SVG")]
struct Args {
    /// Number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Base scale factor of the grid elements
    #[arg(long)]
    scale: Option<f64>,

    /// Non-random gap between grid elements
    #[arg(long)]
    gap: Option<f64>,

    /// Upper limit of the notch variation
    #[arg(long)]
    shape_variation: Option<f64>,

    /// Upper limit of the random position jitter
    #[arg(long)]
    offset_jiggle: Option<f64>,

    /// Spacing around the grid
    #[arg(long)]
    frame: Option<f64>,

    /// Emit one path per element
    #[arg(long)]
    separate_paths: bool,

    /// White shapes on black
    #[arg(long)]
    negative: bool,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    cli::init_logging();
    let args = Args::parse();

    let mut config: UGridConfig = cli::load_or_default(args.output.config.as_deref())?;
    if let Some(v) = args.columns {
        config.columns = v;
    }
    if let Some(v) = args.rows {
        config.rows = v;
    }
    if let Some(v) = args.scale {
        config.scale = v;
    }
    if let Some(v) = args.gap {
        config.gap = v;
    }
    if let Some(v) = args.shape_variation {
        config.shape_variation = v;
    }
    if let Some(v) = args.offset_jiggle {
        config.offset_jiggle = v;
    }
    if let Some(v) = args.frame {
        config.frame = v;
    }
    config.separate_paths |= args.separate_paths;
    config.negative |= args.negative;
    config.validate().map_err(GenError::InvalidConfig)?;

    let (mut rng, _) = random::stream(args.output.random_seed);
    let output = u_grid::generate(&config, &mut rng)?;
    cli::emit(&output.composition(), &args.output)
}
