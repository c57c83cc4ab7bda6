//! Concentric arcs arranged into a disc
//!
//! Arcs are stacked at increasing radii, each with a random start angle and
//! a random sweep. The sweep always leaves enough of the circle open that
//! the round stroke caps at both ends of an arc never touch.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GeneratorConfig;
use crate::core::error::{GenError, Result};
use crate::core::random::{randrange, uniform};
use crate::core::types::Point;
use crate::render::colors::Rgb;
use crate::render::markup::num;
use crate::render::{Composition, LineCap, Paint, Primitive, Shape, Style, ViewBox};

/// Proportional border around the disc: the view box half-extent is the
/// disc radius scaled by `256 / (256 - 37.35)`
const BORDER_BASE: f64 = 256.0;
const BORDER_INSET: f64 = 37.35;

/// Which boundary circles to draw around the arcs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutlineMode {
    Both,
    Inside,
    Outside,
    None,
}

impl OutlineMode {
    pub fn inside(self) -> bool {
        matches!(self, OutlineMode::Both | OutlineMode::Inside)
    }

    pub fn outside(self) -> bool {
        matches!(self, OutlineMode::Both | OutlineMode::Outside)
    }
}

/// Circular arc; angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    pub offset: f64,
    pub sweep: f64,
}

impl ArcSegment {
    /// Fails with `GenError::InvalidArc` unless `|sweep| < 360`
    pub fn new(center: Point, radius: f64, offset: f64, sweep: f64) -> Result<Self> {
        if !sweep.is_finite() || sweep.abs() >= 360.0 {
            return Err(GenError::InvalidArc(sweep));
        }
        Ok(Self { center, radius, offset, sweep })
    }

    /// Start and end angles in radians
    fn angles(&self) -> (f64, f64) {
        let ts = (self.offset - 180.0) * PI / -180.0;
        let td = (self.offset + self.sweep - 180.0) * PI / -180.0;
        (ts, td)
    }

    pub fn endpoints(&self) -> (Point, Point) {
        let (ts, td) = self.angles();
        (
            self.center.on_circle(self.radius, ts),
            self.center.on_circle(self.radius, td),
        )
    }

    pub fn is_large(&self) -> bool {
        let (ts, td) = self.angles();
        (ts - td).abs() > PI
    }

    /// Elliptical-arc path description; empty for a zero sweep
    pub fn path_data(&self) -> String {
        if self.sweep == 0.0 {
            return String::new();
        }
        let (start, end) = self.endpoints();
        let r = num(self.radius);
        format!(
            "M{} {}A{} {} 0 {} 1 {} {}",
            num(start.x),
            num(start.y),
            r,
            r,
            u8::from(self.is_large()),
            num(end.x),
            num(end.y)
        )
    }
}

/// Smallest angular gap (degrees) that keeps the round caps of an arc of
/// `radius` drawn with `stroke` from overlapping: the angle subtending a
/// chord of half the stroke width, by the law of cosines.
pub fn min_cap_gap(radius: f64, stroke: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    let r2 = radius * radius;
    let half = stroke / 2.0;
    let cos = ((2.0 * r2 - half * half) / (2.0 * r2)).clamp(-1.0, 1.0);
    2.0 * cos.acos().to_degrees()
}

/// Configuration for the arc disc
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcDiscConfig {
    /// Number of concentric arcs
    pub circles: usize,
    pub stroke_width: f64,
    /// Distance between strokes; defaults to the stroke width
    pub gap: Option<f64>,
    /// Inner disc radius; defaults to the stroke width
    pub inner_radius: Option<f64>,
    pub hoffset: f64,
    pub voffset: f64,
    /// SVG colour specification of the strokes
    pub colour: String,
    pub background_colour: Option<String>,
    pub outline_mode: OutlineMode,
    /// Treat the values above as limits and draw random ones
    pub randomise: bool,
}

impl Default for ArcDiscConfig {
    fn default() -> Self {
        Self {
            circles: 21,
            stroke_width: 6.0,
            gap: None,
            inner_radius: None,
            hoffset: 0.0,
            voffset: 0.0,
            colour: "black".to_string(),
            background_colour: None,
            outline_mode: OutlineMode::Both,
            randomise: false,
        }
    }
}

impl GeneratorConfig for ArcDiscConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if !self.stroke_width.is_finite() {
            return Err("stroke_width must be a finite number".into());
        }
        if self.gap.map_or(false, |g| !g.is_finite()) {
            return Err("gap must be a finite number".into());
        }
        if self.inner_radius.map_or(false, |r| !r.is_finite() || r < 0.0) {
            return Err("inner_radius must be a finite, non-negative number".into());
        }
        if self.colour.trim().is_empty() {
            return Err("colour must not be empty".into());
        }
        Ok(())
    }
}

/// Effective disc parameters after defaults and randomisation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscParams {
    pub circles: usize,
    pub stroke: f64,
    pub gap: f64,
    pub inner_radius: f64,
    pub center: Point,
    pub colour: Paint,
}

impl DiscParams {
    pub fn resolve<R: Rng + ?Sized>(config: &ArcDiscConfig, rng: &mut R) -> Self {
        let stroke = if config.stroke_width != 0.0 { config.stroke_width.abs() } else { 1.0 };
        let mut params = Self {
            circles: config.circles,
            stroke,
            gap: config.gap.unwrap_or(stroke),
            inner_radius: config.inner_radius.unwrap_or(stroke),
            center: Point::new(config.hoffset, config.voffset),
            colour: Paint::Named(config.colour.clone()),
        };

        if config.randomise {
            params.circles = randrange(rng, params.circles);
            params.stroke = uniform(rng, 0.0, params.stroke);
            if params.stroke == 0.0 {
                params.stroke = 1.0;
            }
            params.gap = uniform(rng, 0.0, params.gap);
            params.inner_radius = uniform(rng, 0.0, params.inner_radius);
            let (x, y) = (params.center.x, params.center.y);
            params.center.x = if x != 0.0 { uniform(rng, -x, x) } else { 0.0 };
            params.center.y = if y != 0.0 { uniform(rng, -y, y) } else { 0.0 };
            params.colour = Paint::Rgb(Rgb::random(rng));
            tracing::debug!("Randomised disc parameters: {:?}", params);
        }
        params
    }
}

/// Result of one arc disc generation pass
#[derive(Debug, Clone, Serialize)]
pub struct ArcDiscOutput {
    pub params: DiscParams,
    pub arcs: Vec<ArcSegment>,
    /// Radii of the outline circles, inner first
    pub outlines: Vec<f64>,
    /// Radius of the outermost drawn element
    pub extent: f64,
    pub view_box: ViewBox,
    pub background: Option<Paint>,
}

pub fn generate<R: Rng + ?Sized>(config: &ArcDiscConfig, rng: &mut R) -> Result<ArcDiscOutput> {
    let params = DiscParams::resolve(config, rng);
    let step = params.gap + params.stroke;
    let mode = config.outline_mode;

    let mut radius = params.inner_radius.max(params.stroke);
    let mut extent = radius;
    let mut outlines = Vec::new();
    let mut arcs = Vec::with_capacity(params.circles);

    if mode.inside() {
        outlines.push(radius);
        radius += step;
    }

    for _ in 0..params.circles {
        let theta = min_cap_gap(radius, params.stroke);
        let offset = uniform(rng, 0.0, 359.0);
        let sweep = uniform(rng, 0.0, 359.0 - theta);
        arcs.push(ArcSegment::new(params.center, radius, offset, sweep)?);
        extent = radius;
        radius += step;
    }

    if mode.outside() {
        outlines.push(radius);
        extent = radius;
    } else if !arcs.is_empty() || mode.inside() {
        // Nothing drawn at the advanced radius
        extent = radius - step;
    }

    let half = (extent + params.stroke / 2.0) * BORDER_BASE / (BORDER_BASE - BORDER_INSET);
    tracing::debug!("Placed {} arcs and {} outlines, extent {}", arcs.len(), outlines.len(), extent);

    Ok(ArcDiscOutput {
        params,
        arcs,
        outlines,
        extent,
        view_box: ViewBox::centered(half),
        background: config.background_colour.clone().map(Paint::Named),
    })
}

impl ArcDiscOutput {
    pub fn composition(&self) -> Composition {
        let mut composition = Composition::new("A Disc of Arcs", self.view_box);
        if let Some(background) = &self.background {
            composition.push_background(background.clone());
        }

        let colour = self.params.colour.clone();
        let stroke = self.params.stroke;
        let d = self
            .arcs
            .iter()
            .map(ArcSegment::path_data)
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !d.is_empty() {
            composition.push(
                Primitive::new(
                    Shape::Path { d },
                    Style::stroke(colour.clone(), stroke)
                        .with_line_cap(LineCap::Round)
                        .with_fill(Paint::None),
                )
                .with_id("arcs"),
            );
        }

        for (i, r) in self.outlines.iter().enumerate() {
            composition.push(
                Primitive::new(
                    Shape::Circle { cx: self.params.center.x, cy: self.params.center.y, r: *r },
                    Style::stroke(colour.clone(), stroke).with_fill(Paint::None),
                )
                .with_id(format!("outline-{}", i + 1)),
            );
        }
        composition
    }
}
