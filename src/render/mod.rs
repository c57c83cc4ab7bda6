//! Drawing primitives and the composition handed to the renderer
//!
//! Generators never produce markup themselves. They build a `Composition`:
//! an ordered list of styled shapes (optionally grouped), which `markup`
//! serializes and `export` rasterizes.

pub mod colors;
pub mod export;
pub mod markup;

use serde::Serialize;

pub use colors::Rgb;

/// Visible area of a composition in user units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Box anchored at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Square box of half-extent `half` centred on the origin
    pub fn centered(half: f64) -> Self {
        Self::new(-half, -half, half * 2.0, half * 2.0)
    }
}

/// Fill or stroke paint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Rgb(Rgb),
    /// Any SVG colour specification given by the user (`black`, `#123`, ...)
    Named(String),
    None,
}

impl Paint {
    pub fn to_attribute(&self) -> String {
        match self {
            Paint::Rgb(rgb) => rgb.to_hex(),
            Paint::Named(name) => name.clone(),
            Paint::None => "none".to_string(),
        }
    }
}

impl From<Rgb> for Paint {
    fn from(rgb: Rgb) -> Self {
        Paint::Rgb(rgb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Presentation attributes; unset fields are inherited or left to defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_cap: Option<LineCap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_join: Option<LineJoin>,
}

impl Style {
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            ..Self::default()
        }
    }

    pub fn stroke(paint: impl Into<Paint>, width: f64) -> Self {
        Self {
            stroke: Some(paint.into()),
            stroke_width: Some(width),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = Some(paint.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = Some(cap);
        self
    }

    pub fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = Some(join);
        self
    }
}

/// Geometry of a single primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Path in the SVG path mini-language
    Path { d: String },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

/// Styled drawable unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub shape: Shape,
    pub style: Style,
}

impl Primitive {
    pub fn new(shape: Shape, style: Style) -> Self {
        Self { id: None, shape, style }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Group of primitives sharing inherited style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub style: Style,
    pub children: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Primitive(Primitive),
    Group(Group),
}

/// Everything the renderer needs to emit one artwork
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    pub title: String,
    pub view_box: ViewBox,
    pub nodes: Vec<Node>,
}

impl Composition {
    pub fn new(title: impl Into<String>, view_box: ViewBox) -> Self {
        Self {
            title: title.into(),
            view_box,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.nodes.push(Node::Primitive(primitive));
    }

    pub fn push_group(&mut self, id: Option<String>, style: Style, children: Vec<Primitive>) {
        self.nodes.push(Node::Group(Group { id, style, children }));
    }

    /// Full-size background rectangle
    pub fn push_background(&mut self, paint: impl Into<Paint>) {
        let vb = self.view_box;
        self.push(
            Primitive::new(
                Shape::Rect { x: vb.x, y: vb.y, width: vb.width, height: vb.height },
                Style::fill(paint),
            )
            .with_id("background"),
        );
    }

    /// All primitives in document order, flattening groups
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.nodes.iter().flat_map(|node| match node {
            Node::Primitive(p) => std::slice::from_ref(p).iter(),
            Node::Group(g) => g.children.iter(),
        })
    }
}
