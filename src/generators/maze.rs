//! Diagonal-line maze with hue continuity
//!
//! Every cell gets a "/" or "\" line at random. Lines that touch an already
//! generated line in the row above continue its colour, so connected strokes
//! read as one hue drifting along the maze.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::random::uniform;
use crate::core::types::{Cell, Point};
use crate::generators::walk::{self, Walk};
use crate::render::colors::Rgb;
use crate::render::{Composition, LineCap, LineJoin, Paint, Primitive, Shape, Style, ViewBox};
use crate::spatial::FillGrid;

/// Lightness and saturation of the maze lines
const LINE_LIGHTNESS: f64 = 0.6;
const LINE_SATURATION: f64 = 0.5;

/// Lightness and saturation of the best-path marker
const MARKER_LIGHTNESS: f64 = 0.5;
const MARKER_SATURATION: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slope {
    /// "/"
    Up,
    /// "\"
    Down,
}

impl Slope {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Slope::Up
        } else {
            Slope::Down
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Slope::Up => '/',
            Slope::Down => '\\',
        }
    }
}

/// One maze cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiagonalLine {
    pub cell: Cell,
    pub slope: Slope,
    /// Hue in degrees, `[0, 360)`
    pub hue: f64,
}

impl DiagonalLine {
    /// Line endpoints for cells of size `scale` inset by `frame`
    pub fn endpoints(&self, scale: f64, frame: f64) -> (Point, Point) {
        let left = self.cell.col as f64 * scale + frame;
        let top = self.cell.row as f64 * scale + frame;
        let (right, bottom) = (left + scale, top + scale);
        match self.slope {
            Slope::Down => (Point::new(left, top), Point::new(right, bottom)),
            Slope::Up => (Point::new(right, top), Point::new(left, bottom)),
        }
    }
}

/// Circular midpoint of two hues along the shorter arc
pub fn hue_blend(a: f64, b: f64) -> f64 {
    let (mut a, b) = if a > b { (b, a) } else { (a, b) };
    let d = b - a;
    if d > 180.0 {
        a += 360.0;
        (a + (b - a) / 2.0).rem_euclid(360.0)
    } else {
        a + d / 2.0
    }
}

/// Hue inherited from the connecting, already generated lines above `cell`,
/// or `None` if no line connects
pub fn lookup_hue(grid: &FillGrid<DiagonalLine>, cell: Cell, slope: Slope, line_shift: f64) -> Option<f64> {
    let (first, second) = match slope {
        Slope::Down => (
            grid.up_left(cell).filter(|l| l.slope == Slope::Down),
            grid.up(cell).filter(|l| l.slope == Slope::Up),
        ),
        Slope::Up => (
            grid.up(cell).filter(|l| l.slope == Slope::Down),
            grid.up_right(cell).filter(|l| l.slope == Slope::Up),
        ),
    };
    match (first, second) {
        (Some(a), Some(b)) => Some(hue_blend(a.hue, b.hue)),
        (Some(one), None) | (None, Some(one)) => Some((one.hue + line_shift).rem_euclid(360.0)),
        (None, None) => None,
    }
}

/// Configuration for the diagonal maze
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub columns: usize,
    pub rows: usize,
    /// Size of a maze cell
    pub scale: f64,
    /// Spacing around the maze
    pub frame: f64,
    pub stroke_width: f64,
    /// SVG colour specification of an optional background
    pub background_color: Option<String>,
    /// Rotation of the colour wheel for every fresh line (degrees)
    pub hue_shift: f64,
    /// Rotation for continued lines; defaults to `hue_shift`
    pub hue_shift_line: Option<f64>,
    /// Width of the best-path marker; the walk is skipped when unset
    pub best_path_width: Option<f64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 30,
            scale: 10.0,
            frame: 20.0,
            stroke_width: 2.0,
            background_color: None,
            hue_shift: 15.0,
            hue_shift_line: None,
            best_path_width: None,
        }
    }
}

impl MazeConfig {
    pub fn line_shift(&self) -> f64 {
        self.hue_shift_line.unwrap_or(self.hue_shift)
    }

    /// Width of the best-path marker if the walk is enabled
    pub fn walk_width(&self) -> Option<f64> {
        self.best_path_width.filter(|w| *w > 0.0)
    }
}

impl GeneratorConfig for MazeConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err("scale must be positive".into());
        }
        if !self.hue_shift.is_finite() || !self.line_shift().is_finite() {
            return Err("hue shifts must be finite numbers".into());
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err("stroke_width must be non-negative".into());
        }
        Ok(())
    }
}

/// Result of one maze generation pass
#[derive(Debug, Clone, Serialize)]
pub struct MazeOutput {
    pub lines: FillGrid<DiagonalLine>,
    pub best_path: Option<Walk>,
    /// Marker colour, drawn only when a best path exists
    pub marker_color: Option<Rgb>,
    pub view_box: ViewBox,
    pub scale: f64,
    pub frame: f64,
    pub stroke_width: f64,
    pub best_path_width: Option<f64>,
    pub background: Option<Paint>,
}

/// Fill the maze in row-major order, then optionally walk it
pub fn generate<R: Rng + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<MazeOutput> {
    let line_shift = config.line_shift();
    let mut master_hue = uniform(rng, 0.0, 360.0);
    let mut lines = FillGrid::new(config.columns, config.rows);

    while let Some(cell) = lines.cursor() {
        let slope = Slope::random(rng);
        let hue = match lookup_hue(&lines, cell, slope, line_shift) {
            Some(hue) => hue,
            None => {
                let hue = master_hue;
                master_hue = (master_hue + config.hue_shift).rem_euclid(360.0);
                hue
            }
        };
        if lines.push(DiagonalLine { cell, slope, hue }).is_err() {
            break;
        }
    }

    let best_path = match config.walk_width() {
        Some(_) => walk::best_path(&lines, config.scale, config.frame, rng),
        None => None,
    };
    let marker_color = best_path
        .as_ref()
        .map(|_| Rgb::from_hls(uniform(rng, 0.0, 360.0), MARKER_LIGHTNESS, MARKER_SATURATION));

    let width = (config.scale * config.columns as f64 + config.frame * 2.0).trunc();
    let height = (config.scale * config.rows as f64 + config.frame * 2.0).trunc();
    tracing::debug!("Generated {}x{} maze", config.columns, config.rows);

    Ok(MazeOutput {
        lines,
        best_path,
        marker_color,
        view_box: ViewBox::sized(width, height),
        scale: config.scale,
        frame: config.frame,
        stroke_width: config.stroke_width,
        best_path_width: config.walk_width(),
        background: config.background_color.clone().map(Paint::Named),
    })
}

impl MazeOutput {
    /// Text rendering of the slopes, one row per line
    pub fn glyphs(&self) -> String {
        self.lines
            .rows()
            .map(|row| row.iter().map(|l| l.slope.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn composition(&self) -> Composition {
        let mut composition = Composition::new("A Diagonal Maze", self.view_box);
        if let Some(background) = &self.background {
            composition.push_background(background.clone());
        }

        let children = self
            .lines
            .iter()
            .map(|(cell, line)| {
                let (a, b) = line.endpoints(self.scale, self.frame);
                let color = Rgb::from_hls(line.hue, LINE_LIGHTNESS, LINE_SATURATION);
                Primitive::new(
                    Shape::Line { x1: a.x, y1: a.y, x2: b.x, y2: b.y },
                    Style { stroke: Some(color.into()), ..Style::default() },
                )
                .with_id(format!("line-{}x{}", cell.col + 1, cell.row + 1))
            })
            .collect();
        composition.push_group(
            Some("goto10".into()),
            Style::default()
                .with_stroke_width(self.stroke_width)
                .with_line_cap(LineCap::Round),
            children,
        );

        if let (Some(path), Some(color), Some(width)) =
            (&self.best_path, self.marker_color, self.best_path_width)
        {
            let marker = Primitive::new(
                Shape::Path { d: path.path_data.clone() },
                Style::stroke(color, width)
                    .with_line_cap(LineCap::Round)
                    .with_line_join(LineJoin::Round)
                    .with_fill(Paint::None),
            );
            let start = Primitive::new(
                Shape::Circle { cx: path.start.x, cy: path.start.y, r: width },
                Style::fill(color),
            )
            .with_id("start_point");
            composition.push_group(Some("best_walker".into()), Style::default(), vec![marker, start]);
        }
        composition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn line(col: usize, row: usize, slope: Slope, hue: f64) -> DiagonalLine {
        DiagonalLine { cell: Cell::new(col, row), slope, hue }
    }

    #[test]
    fn test_hue_blend_basics() {
        assert_eq!(hue_blend(40.0, 40.0), 40.0);
        assert_eq!(hue_blend(10.0, 30.0), 20.0);
        assert_eq!(hue_blend(0.0, 180.0), 90.0);
        // Wraps across 0 instead of going the long way round
        assert_eq!(hue_blend(350.0, 10.0), 0.0);
        assert_eq!(hue_blend(300.0, 20.0), 340.0);
    }

    #[test]
    fn test_lookup_hue_single_neighbour_shifts() {
        let mut grid = FillGrid::new(2, 2);
        grid.push(line(0, 0, Slope::Down, 100.0)).unwrap();
        grid.push(line(1, 0, Slope::Down, 200.0)).unwrap();
        // "\" at (1,1) continues the "\" at (0,0)
        assert_eq!(lookup_hue(&grid, Cell::new(0, 1), Slope::Down, 15.0), None);
        grid.push(line(0, 1, Slope::Up, 0.0)).unwrap();
        assert_eq!(lookup_hue(&grid, Cell::new(1, 1), Slope::Down, 15.0), Some(115.0));
    }

    #[test]
    fn test_lookup_hue_wraps_shift() {
        let mut grid = FillGrid::new(1, 2);
        grid.push(line(0, 0, Slope::Down, 350.0)).unwrap();
        // "/" below a "\" connects through the shared bottom corner
        assert_eq!(lookup_hue(&grid, Cell::new(0, 1), Slope::Up, 15.0), Some(5.0));
    }

    #[test]
    fn test_lookup_hue_blends_two_neighbours() {
        let mut grid = FillGrid::new(3, 2);
        grid.push(line(0, 0, Slope::Down, 100.0)).unwrap();
        grid.push(line(1, 0, Slope::Up, 140.0)).unwrap();
        grid.push(line(2, 0, Slope::Up, 300.0)).unwrap();
        assert_eq!(lookup_hue(&grid, Cell::new(1, 1), Slope::Down, 15.0), Some(120.0));
    }

    #[test]
    fn test_top_row_has_no_neighbours() {
        let grid: FillGrid<DiagonalLine> = FillGrid::new(3, 3);
        assert_eq!(lookup_hue(&grid, Cell::new(1, 0), Slope::Up, 15.0), None);
        assert_eq!(lookup_hue(&grid, Cell::new(0, 0), Slope::Down, 15.0), None);
    }

    #[test]
    fn test_endpoints_follow_slope() {
        let down = line(1, 2, Slope::Down, 0.0).endpoints(10.0, 5.0);
        assert_eq!(down, (Point::new(15.0, 25.0), Point::new(25.0, 35.0)));
        let up = line(1, 2, Slope::Up, 0.0).endpoints(10.0, 5.0);
        assert_eq!(up, (Point::new(25.0, 25.0), Point::new(15.0, 35.0)));
    }

    #[test]
    fn test_generate_fills_grid() {
        let config = MazeConfig { columns: 6, rows: 4, ..MazeConfig::default() };
        let output = generate(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert!(output.lines.is_complete());
        assert_eq!(output.lines.filled(), 24);
        assert!(output.best_path.is_none());
        assert!(output.marker_color.is_none());
        for (_, l) in output.lines.iter() {
            assert!((0.0..360.0).contains(&l.hue));
        }
        assert_eq!(output.glyphs().lines().count(), 4);
        assert_eq!(output.view_box, ViewBox::sized(100.0, 80.0));
    }

    #[test]
    fn test_zero_sized_grid_is_empty() {
        for (columns, rows) in [(0, 5), (5, 0), (0, 0)] {
            let config = MazeConfig { columns, rows, best_path_width: Some(3.0), ..MazeConfig::default() };
            let output = generate(&config, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
            assert_eq!(output.lines.filled(), 0);
            assert!(output.best_path.is_none());
        }
    }

    #[test]
    fn test_best_path_enabled_draws_marker() {
        let config = MazeConfig { columns: 8, rows: 8, best_path_width: Some(3.0), ..MazeConfig::default() };
        let output = generate(&config, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
        assert!(output.best_path.is_some());
        assert!(output.marker_color.is_some());
        let composition = output.composition();
        // 64 lines + marker path + start circle
        assert_eq!(composition.primitives().count(), 66);
    }

    #[test]
    fn test_zero_width_disables_walk() {
        let config = MazeConfig { best_path_width: Some(0.0), ..MazeConfig::default() };
        assert_eq!(config.walk_width(), None);
    }

    #[test]
    fn test_master_hue_advances_by_shift() {
        // Top row lines never connect upwards, so each one takes a fresh hue
        for hue_shift in [15.0, 100.0, 350.0] {
            let config = MazeConfig { columns: 12, rows: 1, hue_shift, ..MazeConfig::default() };
            let output = generate(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
            let hues: Vec<f64> = output.lines.iter().map(|(_, l)| l.hue).collect();
            assert_eq!(hues.len(), 12);
            for pair in hues.windows(2) {
                let step = (pair[1] - pair[0]).rem_euclid(360.0);
                assert!((step - hue_shift).abs() < 1e-9, "step {} for shift {}", step, hue_shift);
            }
        }
    }
}
