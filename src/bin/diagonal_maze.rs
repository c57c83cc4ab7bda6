//! Diagonal Maze
//!
//! Prints a "10 PRINT" style maze of diagonal lines as SVG, optionally with
//! the longest walk through it highlighted.

use clap::Parser;
use generative_grids::cli::{self, OutputArgs};
use generative_grids::core::config::GeneratorConfig;
use generative_grids::core::error::{GenError, Result};
use generative_grids::core::random;
use generative_grids::generators::maze::{self, MazeConfig};

#[derive(Parser, Debug)]
#[command(name = "diagonal_maze")]
#[command(about = "Generate a maze of coloured diagonal lines as SVG")]
struct Args {
    /// Number of maze columns
    #[arg(long)]
    columns: Option<usize>,

    /// Number of maze rows
    #[arg(long)]
    rows: Option<usize>,

    /// Size of a maze cell
    #[arg(long)]
    scale: Option<f64>,

    /// Spacing around the maze
    #[arg(long)]
    frame: Option<f64>,

    /// Width of the maze lines
    #[arg(long)]
    stroke_width: Option<f64>,

    /// SVG colour of an optional background
    #[arg(long)]
    background_color: Option<String>,

    /// Hue rotation for every fresh line, in degrees
    #[arg(long)]
    hue_shift: Option<f64>,

    /// Hue rotation for continued lines, in degrees
    #[arg(long)]
    hue_shift_line: Option<f64>,

    /// Highlight the longest walk with a stroke of this width
    #[arg(long)]
    best_path_width: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    cli::init_logging();
    let args = Args::parse();

    let mut config: MazeConfig = cli::load_or_default(args.output.config.as_deref())?;
    if let Some(v) = args.columns {
        config.columns = v;
    }
    if let Some(v) = args.rows {
        config.rows = v;
    }
    if let Some(v) = args.scale {
        config.scale = v;
    }
    if let Some(v) = args.frame {
        config.frame = v;
    }
    if let Some(v) = args.stroke_width {
        config.stroke_width = v;
    }
    if args.background_color.is_some() {
        config.background_color = args.background_color;
    }
    if let Some(v) = args.hue_shift {
        config.hue_shift = v;
    }
    if args.hue_shift_line.is_some() {
        config.hue_shift_line = args.hue_shift_line;
    }
    if args.best_path_width.is_some() {
        config.best_path_width = args.best_path_width;
    }
    config.validate().map_err(GenError::InvalidConfig)?;

    let (mut rng, _) = random::stream(args.output.random_seed);
    let output = maze::generate(&config, &mut rng)?;
    tracing::debug!("Maze layout:\n{}", output.glyphs());
    if let Some(walk) = &output.best_path {
        tracing::info!("Longest walk takes {} steps", walk.moves);
    }
    cli::emit(&output.composition(), &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_mirror_config_fields() {
        let args = Args::try_parse_from([
            "diagonal_maze",
            "--columns",
            "3",
            "--rows",
            "2",
            "--best-path-width",
            "2",
            "--hue-shift-line",
            "4",
        ])
        .unwrap();
        assert_eq!(args.columns, Some(3));
        assert_eq!(args.best_path_width, Some(2.0));
        assert_eq!(args.hue_shift_line, Some(4.0));
        assert!(Args::try_parse_from(["diagonal_maze", "--best-path", "2"]).is_err());
    }
}
