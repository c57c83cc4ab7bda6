//! Biased-colour tile grid
//!
//! Each tile carries a background colour and a smaller accent shape (square
//! or circle). Colours are drawn with a strong bias that drifts across the
//! palette from left to right. An inset region and two flip rules add
//! symmetry to the accent shapes.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::random::{coin, randrange, uniform};
use crate::core::types::Cell;
use crate::generators::bias::{sample_until, triangular_stronger_bias};
use crate::generators::palette::PaletteName;
use crate::render::colors::Rgb;
use crate::render::{Composition, Primitive, Shape, Style, ViewBox};
use crate::spatial::FillGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccentShape {
    Square,
    Circle,
}

impl AccentShape {
    pub fn swapped(self) -> Self {
        match self {
            AccentShape::Square => AccentShape::Circle,
            AccentShape::Circle => AccentShape::Square,
        }
    }
}

/// One tile, colours given as palette indices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tile {
    pub cell: Cell,
    pub background: usize,
    pub accent: usize,
    pub shape: AccentShape,
    /// The background could not be kept apart from its left/top neighbours
    pub background_collision: bool,
    /// The accent could not be kept apart from the background
    pub accent_collision: bool,
}

/// Configuration for the tile grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TileGridConfig {
    pub columns: usize,
    pub rows: usize,
    /// Swap shapes and reverse the colour drift inside the inset
    pub inset: bool,
    /// Tiles between the grid border and the inset; derived from the grid
    /// size when unset
    pub inset_offset: Option<usize>,
    pub horizontal_flip: bool,
    pub vertical_flip: bool,
    /// Number of triangular draws per colour sample
    pub color_bias: usize,
    /// Edge length of a tile
    pub scale: f64,
    /// Frame between tile edge and accent shape; 14% of `scale` when unset
    pub padding: Option<f64>,
    pub palette: PaletteName,
    /// Re-draw all values above, using the configured ones as limits
    pub randomize: bool,
}

impl Default for TileGridConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            inset: true,
            inset_offset: None,
            horizontal_flip: true,
            vertical_flip: true,
            color_bias: 1,
            scale: 74.0,
            padding: None,
            palette: PaletteName::Folklore,
            randomize: false,
        }
    }
}

impl GeneratorConfig for TileGridConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if !self.scale.is_finite() {
            return Err("scale must be a finite number".into());
        }
        if let Some(padding) = self.padding {
            if !padding.is_finite() {
                return Err("padding must be a finite number".into());
            }
        }
        Ok(())
    }
}

/// Effective parameters after clamping and optional randomisation
#[derive(Debug, Clone, Serialize)]
pub struct TileParams {
    pub columns: usize,
    pub rows: usize,
    pub scale: f64,
    pub inset_offset: usize,
    pub padding: f64,
    pub palette: PaletteName,
    pub color_iterations: usize,
    pub flip_x: bool,
    pub flip_y: bool,
    pub inset: bool,
}

impl TileParams {
    pub fn resolve<R: Rng + ?Sized>(config: &TileGridConfig, rng: &mut R) -> Self {
        let scale = config.scale.max(1.0);
        let columns = config.columns.max(1);
        let rows = config.rows.max(1);
        let mut params = Self {
            columns,
            rows,
            scale,
            inset_offset: config.inset_offset.unwrap_or(columns.min(rows) / 4),
            padding: config.padding.unwrap_or((0.14 * scale * 100.0).round() / 100.0),
            palette: config.palette,
            color_iterations: config.color_bias.max(1),
            flip_x: config.horizontal_flip,
            flip_y: config.vertical_flip,
            inset: config.inset,
        };

        if config.randomize {
            params.scale = (randrange(rng, params.scale as usize) + 1) as f64;
            let mut columns = randrange(rng, params.columns) + 1;
            if columns % 2 == 1 {
                columns += 1;
            }
            params.columns = columns;
            params.rows = columns;
            params.inset_offset = randrange(rng, params.inset_offset + 1);
            params.padding = uniform(rng, 0.0, params.padding);
            params.palette = *PaletteName::ALL.choose(rng).unwrap_or(&config.palette);
            params.color_iterations =
                triangular_stronger_bias(rng, 0.0, params.color_iterations as f64, 0.0, 10).max(1);
            params.flip_x = coin(rng);
            params.flip_y = coin(rng);
            params.inset = coin(rng);
        }
        params
    }

    fn in_inset(&self, cell: Cell) -> bool {
        let off = self.inset_offset;
        cell.col >= off && cell.col + off < self.columns && cell.row >= off && cell.row + off < self.rows
    }

    /// Accent shape and bias point for `cell`
    pub fn shape_and_bias(&self, cell: Cell, initial: AccentShape, colors: usize) -> (AccentShape, f64) {
        let mut shape = initial;
        let mut bias = cell.col as f64 / self.columns as f64 * colors as f64;
        if self.inset && self.in_inset(cell) {
            shape = shape.swapped();
            bias = colors as f64 - bias;
        }
        if self.flip_y && cell.row as f64 >= self.rows as f64 / 2.0 {
            shape = shape.swapped();
        }
        if self.flip_x && cell.col as f64 >= self.columns as f64 / 2.0 {
            shape = shape.swapped();
        }
        (shape, bias)
    }
}

/// Result of one tile grid pass
#[derive(Debug, Clone, Serialize)]
pub struct TileGridOutput {
    pub params: TileParams,
    /// Palette in the order actually used
    pub palette: Vec<Rgb>,
    pub reversed: bool,
    pub tiles: FillGrid<Tile>,
    /// Number of exhausted retry budgets
    pub collisions: usize,
    pub view_box: ViewBox,
}

pub fn generate<R: Rng + ?Sized>(config: &TileGridConfig, rng: &mut R) -> Result<TileGridOutput> {
    let params = TileParams::resolve(config, rng);

    let mut palette = params.palette.colors().to_vec();
    let reversed = rng.gen::<f64>() < 0.5;
    if reversed {
        palette.reverse();
    }
    let colors = palette.len();
    let initial = if coin(rng) { AccentShape::Circle } else { AccentShape::Square };

    let mut tiles: FillGrid<Tile> = FillGrid::new(params.columns, params.rows);
    let mut collisions = 0;
    while let Some(cell) = tiles.cursor() {
        let (shape, bias) = params.shape_and_bias(cell, initial, colors);

        let left = tiles.left(cell).map(|t| t.background);
        let up = tiles.up(cell).map(|t| t.background);
        let (background, background_ok) = sample_until(rng, colors, bias, params.color_iterations, |c| {
            Some(c) != left && Some(c) != up
        });
        if !background_ok {
            tracing::warn!(
                "No non-colliding background colour for tile {}x{}; colour bias too high for {} colours",
                cell.col,
                cell.row,
                colors
            );
            collisions += 1;
        }

        let (accent, accent_ok) =
            sample_until(rng, colors, bias, params.color_iterations, |c| c != background);
        if !accent_ok {
            tracing::warn!(
                "No non-colliding accent colour for tile {}x{}; colour bias too high for {} colours",
                cell.col,
                cell.row,
                colors
            );
            collisions += 1;
        }

        let pushed = tiles.push(Tile {
            cell,
            background,
            accent,
            shape,
            background_collision: !background_ok,
            accent_collision: !accent_ok,
        });
        if pushed.is_err() {
            break;
        }
    }

    let view_box = ViewBox::sized(
        (params.scale * params.columns as f64).trunc(),
        (params.scale * params.rows as f64).trunc(),
    );
    tracing::debug!(
        "Generated {}x{} tiles from {:?} ({} collisions)",
        params.columns,
        params.rows,
        params.palette,
        collisions
    );

    Ok(TileGridOutput { params, palette, reversed, tiles, collisions, view_box })
}

impl TileGridOutput {
    fn color(&self, index: usize) -> Rgb {
        self.palette.get(index).copied().unwrap_or(crate::render::colors::BLACK)
    }

    pub fn composition(&self) -> Composition {
        let mut composition = Composition::new("A Grid of Tiles", self.view_box);
        let size = self.params.scale;
        let pad = self.params.padding;
        let inner = size - 2.0 * pad;

        for (cell, tile) in self.tiles.iter() {
            let x = cell.col as f64 * size;
            let y = cell.row as f64 * size;
            // Overlap the next tile to hide hairlines between tiles
            let width = if cell.col + 1 < self.params.columns { size * 2.0 } else { size };
            let height = if cell.row + 1 < self.params.rows { size * 2.0 } else { size };
            let background = Primitive::new(
                Shape::Rect { x, y, width, height },
                Style::fill(self.color(tile.background)),
            );
            let accent_shape = match tile.shape {
                AccentShape::Square => Shape::Rect { x: x + pad, y: y + pad, width: inner, height: inner },
                AccentShape::Circle => Shape::Circle { cx: x + size / 2.0, cy: y + size / 2.0, r: inner / 2.0 },
            };
            let accent = Primitive::new(accent_shape, Style::fill(self.color(tile.accent)));
            composition.push_group(
                Some(format!("tile_{}x{}", cell.col + 1, cell.row + 1)),
                Style::default(),
                vec![background, accent],
            );
        }
        composition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Node;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params(columns: usize, rows: usize, inset_offset: usize) -> TileParams {
        TileParams {
            columns,
            rows,
            scale: 10.0,
            inset_offset,
            padding: 1.4,
            palette: PaletteName::Folklore,
            color_iterations: 1,
            flip_x: false,
            flip_y: false,
            inset: true,
        }
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TileGridConfig::default();
        let resolved = TileParams::resolve(&config, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(resolved.inset_offset, 2);
        assert_eq!(resolved.padding, 10.36);
        assert_eq!(resolved.color_iterations, 1);
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let config = TileGridConfig { columns: 0, rows: 0, scale: -3.0, color_bias: 0, ..TileGridConfig::default() };
        let resolved = TileParams::resolve(&config, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!((resolved.columns, resolved.rows), (1, 1));
        assert_eq!(resolved.scale, 1.0);
        assert_eq!(resolved.color_iterations, 1);
        assert_eq!(resolved.inset_offset, 0);
    }

    #[test]
    fn test_randomize_keeps_square_even_grid() {
        let config = TileGridConfig { randomize: true, columns: 9, rows: 3, ..TileGridConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let resolved = TileParams::resolve(&config, &mut rng);
            assert_eq!(resolved.columns % 2, 0);
            assert_eq!(resolved.columns, resolved.rows);
            assert!(resolved.columns <= 10);
            assert!(resolved.scale >= 1.0 && resolved.scale <= 74.0);
            assert!(resolved.inset_offset <= 2);
            assert!(resolved.color_iterations >= 1);
        }
    }

    #[test]
    fn test_inset_reverses_bias_and_swaps_shape() {
        let p = params(8, 8, 2);
        let (outside, bias_out) = p.shape_and_bias(Cell::new(1, 1), AccentShape::Square, 4);
        assert_eq!(outside, AccentShape::Square);
        assert_eq!(bias_out, 0.5);
        let (inside, bias_in) = p.shape_and_bias(Cell::new(2, 2), AccentShape::Square, 4);
        assert_eq!(inside, AccentShape::Circle);
        assert_eq!(bias_in, 3.0);
        // Last inset column is columns - offset - 1
        assert!(p.in_inset(Cell::new(5, 5)));
        assert!(!p.in_inset(Cell::new(6, 5)));
    }

    #[test]
    fn test_inset_offset_larger_than_grid() {
        let p = params(3, 3, 5);
        for col in 0..3 {
            assert!(!p.in_inset(Cell::new(col, 1)));
        }
    }

    #[test]
    fn test_flips_swap_bottom_right() {
        let p = TileParams { flip_x: true, flip_y: true, inset: false, ..params(4, 4, 0) };
        let shape = |c, r| p.shape_and_bias(Cell::new(c, r), AccentShape::Square, 4).0;
        assert_eq!(shape(0, 0), AccentShape::Square);
        assert_eq!(shape(3, 0), AccentShape::Circle);
        assert_eq!(shape(0, 3), AccentShape::Circle);
        assert_eq!(shape(3, 3), AccentShape::Square);
    }

    #[test]
    fn test_generated_neighbours_differ() {
        let output = generate(&TileGridConfig::default(), &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(output.tiles.filled(), 100);
        for (cell, tile) in output.tiles.iter() {
            assert!(tile.background < output.palette.len());
            assert!(tile.accent < output.palette.len());
            if !tile.accent_collision {
                assert_ne!(tile.accent, tile.background);
            }
            if tile.background_collision {
                continue;
            }
            if let Some(left) = output.tiles.left(cell) {
                assert_ne!(left.background, tile.background);
            }
            if let Some(up) = output.tiles.up(cell) {
                assert_ne!(up.background, tile.background);
            }
        }
        assert_eq!(output.view_box, ViewBox::sized(740.0, 740.0));
    }

    #[test]
    fn test_binary_palette_with_heavy_bias_reports_collisions() {
        let config = TileGridConfig { palette: PaletteName::Binary, color_bias: 50, ..TileGridConfig::default() };
        let output = generate(&config, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        let flagged = output
            .tiles
            .iter()
            .map(|(_, t)| t.background_collision as usize + t.accent_collision as usize)
            .sum::<usize>();
        assert_eq!(flagged, output.collisions);
        assert!(output.collisions > 0);
    }

    #[test]
    fn test_palette_reversal_per_run() {
        let config = TileGridConfig { columns: 2, rows: 2, palette: PaletteName::Shadowplay, ..TileGridConfig::default() };
        let forward = PaletteName::Shadowplay.colors().to_vec();
        let mut backward = forward.clone();
        backward.reverse();

        let mut reversed_runs = 0;
        for seed in 0..200 {
            let output = generate(&config, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
            if output.reversed {
                reversed_runs += 1;
                assert_eq!(output.palette, backward);
            } else {
                assert_eq!(output.palette, forward);
            }
        }
        // Fair coin: 200 runs stay well inside these bounds
        assert!((60..=140).contains(&reversed_runs), "reversed {} of 200", reversed_runs);
    }

    #[test]
    fn test_composition_layout() {
        let config = TileGridConfig { columns: 2, rows: 2, scale: 10.0, padding: Some(2.0), ..TileGridConfig::default() };
        let output = generate(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let composition = output.composition();
        assert_eq!(composition.nodes.len(), 4);
        let Node::Group(first) = &composition.nodes[0] else {
            panic!("expected tile group");
        };
        assert_eq!(first.id.as_deref(), Some("tile_1x1"));
        assert_eq!(
            first.children[0].shape,
            Shape::Rect { x: 0.0, y: 0.0, width: 20.0, height: 20.0 }
        );
        match &first.children[1].shape {
            Shape::Rect { x, width, .. } => assert_eq!((*x, *width), (2.0, 6.0)),
            Shape::Circle { cx, r, .. } => assert_eq!((*cx, *r), (5.0, 3.0)),
            other => panic!("unexpected accent {:?}", other),
        }
        let Node::Group(last) = &composition.nodes[3] else {
            panic!("expected tile group");
        };
        assert_eq!(last.id.as_deref(), Some("tile_2x2"));
        assert_eq!(
            last.children[0].shape,
            Shape::Rect { x: 10.0, y: 10.0, width: 10.0, height: 10.0 }
        );
    }
}
