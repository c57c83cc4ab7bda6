//! Disc of Arcs
//!
//! Prints concentric, randomly opened arcs as SVG.

use clap::Parser;
use generative_grids::cli::{self, OutputArgs};
use generative_grids::core::config::GeneratorConfig;
use generative_grids::core::error::{GenError, Result};
use generative_grids::core::random;
use generative_grids::generators::arc_disc::{self, ArcDiscConfig, OutlineMode};

#[derive(Parser, Debug)]
#[command(name = "arc_disc")]
#[command(about = "Generate a disc of concentric random arcs as SVG")]
struct Args {
    /// Number of concentric arcs
    #[arg(long)]
    circles: Option<usize>,

    /// Width of the arc strokes
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Distance between the arcs; defaults to the stroke width
    #[arg(long)]
    gap: Option<f64>,

    /// Radius of the empty centre; defaults to the stroke width
    #[arg(long)]
    inner_radius: Option<f64>,

    /// Horizontal offset of the disc centre
    #[arg(long)]
    hoffset: Option<f64>,

    /// Vertical offset of the disc centre
    #[arg(long)]
    voffset: Option<f64>,

    /// SVG colour of the strokes
    #[arg(long)]
    colour: Option<String>,

    /// SVG colour of an optional background
    #[arg(long)]
    background_colour: Option<String>,

    /// Which outline circles to draw
    #[arg(long, value_enum)]
    outline_mode: Option<OutlineMode>,

    /// Treat the values above as limits and draw random ones
    #[arg(long)]
    randomise: bool,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    cli::init_logging();
    let args = Args::parse();

    let mut config: ArcDiscConfig = cli::load_or_default(args.output.config.as_deref())?;
    if let Some(v) = args.circles {
        config.circles = v;
    }
    if let Some(v) = args.stroke_width {
        config.stroke_width = v;
    }
    if args.gap.is_some() {
        config.gap = args.gap;
    }
    if args.inner_radius.is_some() {
        config.inner_radius = args.inner_radius;
    }
    if let Some(v) = args.hoffset {
        config.hoffset = v;
    }
    if let Some(v) = args.voffset {
        config.voffset = v;
    }
    if let Some(v) = args.colour {
        config.colour = v;
    }
    if args.background_colour.is_some() {
        config.background_colour = args.background_colour;
    }
    if let Some(v) = args.outline_mode {
        config.outline_mode = v;
    }
    config.randomise |= args.randomise;
    config.validate().map_err(GenError::InvalidConfig)?;

    let (mut rng, _) = random::stream(args.output.random_seed);
    let output = arc_disc::generate(&config, &mut rng)?;
    cli::emit(&output.composition(), &args.output)
}
