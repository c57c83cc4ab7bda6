//! Tile Grid
//!
//! Prints a grid of coloured tiles with square or circle accents as SVG.

use clap::Parser;
use generative_grids::cli::{self, OutputArgs};
use generative_grids::core::config::GeneratorConfig;
use generative_grids::core::error::{GenError, Result};
use generative_grids::core::random;
use generative_grids::generators::palette::PaletteName;
use generative_grids::generators::tiles::{self, TileGridConfig};

#[derive(Parser, Debug)]
#[command(name = "tile_grid")]
#[command(about = "Generate a grid of coloured tiles with accent shapes as SVG")]
struct Args {
    /// Number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Disable the accent shape inset
    #[arg(long)]
    no_inset: bool,

    /// Tiles between the grid border and the inset
    #[arg(long)]
    inset_offset: Option<usize>,

    /// Disable the horizontal accent shape flip
    #[arg(long)]
    no_horizontal_flip: bool,

    /// Disable the vertical accent shape flip
    #[arg(long)]
    no_vertical_flip: bool,

    /// Strength of the directional colour bias
    #[arg(long)]
    color_bias: Option<usize>,

    /// Edge length of a tile
    #[arg(long)]
    scale: Option<f64>,

    /// Frame around the accent shapes
    #[arg(long)]
    padding: Option<f64>,

    /// Colour scheme to draw from
    #[arg(long, value_enum)]
    palette: Option<PaletteName>,

    /// Treat the values above as limits and draw random ones
    #[arg(long)]
    randomize: bool,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    cli::init_logging();
    let args = Args::parse();

    let mut config: TileGridConfig = cli::load_or_default(args.output.config.as_deref())?;
    if let Some(v) = args.columns {
        config.columns = v;
    }
    if let Some(v) = args.rows {
        config.rows = v;
    }
    if args.inset_offset.is_some() {
        config.inset_offset = args.inset_offset;
    }
    if let Some(v) = args.color_bias {
        config.color_bias = v;
    }
    if let Some(v) = args.scale {
        config.scale = v;
    }
    if args.padding.is_some() {
        config.padding = args.padding;
    }
    if let Some(v) = args.palette {
        config.palette = v;
    }
    config.inset &= !args.no_inset;
    config.horizontal_flip &= !args.no_horizontal_flip;
    config.vertical_flip &= !args.no_vertical_flip;
    config.randomize |= args.randomize;
    config.validate().map_err(GenError::InvalidConfig)?;

    let (mut rng, _) = random::stream(args.output.random_seed);
    let output = tiles::generate(&config, &mut rng)?;
    tracing::debug!("{} colour collisions could not be avoided", output.collisions);
    cli::emit(&output.composition(), &args.output)
}
