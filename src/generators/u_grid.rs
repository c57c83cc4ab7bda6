//! Grid of squared-off "U" shapes
//!
//! Each cell of an evenly spaced grid holds one U, turned to face one of
//! the four compass directions, with a random positional jitter and a
//! random notch variation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::random::uniform;
use crate::core::types::Point;
use crate::render::colors::{BLACK, WHITE};
use crate::render::markup::num;
use crate::render::{Composition, Primitive, Shape, Style, ViewBox};

/// Depth factor applied to the variation before it shapes the notch
const VARIATION_FACTOR: f64 = 0.18;

/// Facing of a U segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Axis of a relative path move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn command(self) -> char {
        match self {
            Axis::Horizontal => 'h',
            Axis::Vertical => 'v',
        }
    }

    fn offset(self, amount: f64) -> Point {
        match self {
            Axis::Horizontal => Point::new(amount, 0.0),
            Axis::Vertical => Point::new(0.0, amount),
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Uniformly pick a direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// (first move axis, second move axis, sign). The first axis carries the
    /// base cuts, the second the notch depth.
    pub fn axes(self) -> (Axis, Axis, f64) {
        match self {
            Direction::North => (Axis::Horizontal, Axis::Vertical, 1.0),
            Direction::East => (Axis::Vertical, Axis::Horizontal, 1.0),
            Direction::West => (Axis::Vertical, Axis::Horizontal, -1.0),
            Direction::South => (Axis::Horizontal, Axis::Vertical, -1.0),
        }
    }
}

/// One U shape centred on `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct USegment {
    pub center: Point,
    pub scale: f64,
    pub direction: Direction,
    pub variation: f64,
}

impl USegment {
    pub fn new(center: Point, scale: f64, direction: Direction, variation: f64) -> Self {
        Self { center, scale, direction, variation }
    }

    /// Effective notch shift, `0.18 * min(variation, 1)`
    pub fn notch_shift(&self) -> f64 {
        VARIATION_FACTOR * self.variation.min(1.0)
    }

    /// Starting corner of the outline
    pub fn start(&self) -> Point {
        let (_, _, sign) = self.direction.axes();
        let m = sign * self.scale;
        self.center - Point::new(0.5 * m, 0.5 * m)
    }

    /// The seven relative moves after the start corner
    pub fn moves(&self) -> [(Axis, f64); 7] {
        let (first, second, sign) = self.direction.axes();
        let m = sign * self.scale;
        let v = self.notch_shift();
        [
            (first, (0.2 + v) * m),
            (second, 0.8 * m),
            (first, (0.6 - v) * m),
            (second, -0.8 * m),
            (first, 0.2 * m),
            (second, 1.0 * m),
            (first, -1.0 * m),
        ]
    }

    /// Absolute outline vertices, start corner first; the path closes back
    /// to the first vertex
    pub fn vertices(&self) -> Vec<Point> {
        let mut at = self.start();
        let mut points = vec![at];
        for (axis, amount) in self.moves() {
            at = at + axis.offset(amount);
            points.push(at);
        }
        points
    }

    /// Closed relative path description
    pub fn path_data(&self) -> String {
        let start = self.start();
        let mut d = format!("M{} {}", num(start.x), num(start.y));
        for (axis, amount) in self.moves() {
            d.push(axis.command());
            d.push_str(&num(amount));
        }
        d.push('Z');
        d
    }
}

/// Configuration for the U grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UGridConfig {
    pub columns: usize,
    pub rows: usize,
    /// Base scale of the grid elements
    pub scale: f64,
    /// Non-random gap between grid elements
    pub gap: f64,
    /// Upper limit of the notch variation
    pub shape_variation: f64,
    /// Upper limit of the horizontal/vertical jitter
    pub offset_jiggle: f64,
    /// Extra spacing around the grid
    pub frame: f64,
    /// Emit one path per element instead of a single merged path
    pub separate_paths: bool,
    /// Swap background and foreground colours
    pub negative: bool,
}

impl Default for UGridConfig {
    fn default() -> Self {
        Self {
            columns: 11,
            rows: 11,
            scale: 10.0,
            gap: 5.0,
            shape_variation: 1.0,
            offset_jiggle: 2.0,
            frame: 20.0,
            separate_paths: false,
            negative: false,
        }
    }
}

impl GeneratorConfig for UGridConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let values = [
            ("scale", self.scale),
            ("gap", self.gap),
            ("shape_variation", self.shape_variation),
            ("offset_jiggle", self.offset_jiggle),
            ("frame", self.frame),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be a finite number", name));
        }
        Ok(())
    }
}

/// Result of one U grid generation pass
#[derive(Debug, Clone, Serialize)]
pub struct UGridOutput {
    pub segments: Vec<USegment>,
    pub view_box: ViewBox,
    pub separate_paths: bool,
    pub negative: bool,
}

/// Place `columns x rows` U segments. Cells are visited column by column;
/// each draws x jitter, y jitter, direction and variation in that order.
pub fn generate<R: Rng + ?Sized>(config: &UGridConfig, rng: &mut R) -> Result<UGridOutput> {
    let pitch = config.scale + config.gap;
    let jiggle = config.offset_jiggle;
    let mut segments = Vec::with_capacity(config.columns * config.rows);

    for x in 0..config.columns {
        for y in 0..config.rows {
            let cx = x as f64 * pitch + pitch / 2.0 + config.frame + uniform(rng, -jiggle, jiggle);
            let cy = y as f64 * pitch + pitch / 2.0 + config.frame + uniform(rng, -jiggle, jiggle);
            let direction = Direction::random(rng);
            let variation = uniform(rng, 0.0, config.shape_variation);
            segments.push(USegment::new(Point::new(cx, cy), config.scale, direction, variation));
        }
    }

    let width = (pitch * config.columns as f64 + config.frame * 2.0).trunc();
    let height = (pitch * config.rows as f64 + config.frame * 2.0).trunc();
    tracing::debug!("Placed {} U segments in a {}x{} box", segments.len(), width, height);

    Ok(UGridOutput {
        segments,
        view_box: ViewBox::sized(width, height),
        separate_paths: config.separate_paths,
        negative: config.negative,
    })
}

impl UGridOutput {
    pub fn composition(&self) -> Composition {
        let (background, foreground) = if self.negative { (BLACK, WHITE) } else { (WHITE, BLACK) };
        let mut composition = Composition::new("A Grid of Us", self.view_box);
        composition.push_background(background);

        let style = Style::fill(foreground).with_stroke_width(0.0);
        if self.separate_paths {
            let children = self
                .segments
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    Primitive::new(Shape::Path { d: s.path_data() }, Style::default())
                        .with_id(format!("element-{}", i))
                })
                .collect();
            composition.push_group(Some("grid-of-us".into()), style, children);
        } else {
            let d: String = self.segments.iter().map(USegment::path_data).collect();
            composition.push(Primitive::new(Shape::Path { d }, style).with_id("grid-of-us"));
        }
        composition
    }
}
