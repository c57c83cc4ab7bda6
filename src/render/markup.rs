//! SVG serialization of a `Composition`

use ::svg::node::element::{Circle, Element, Group, Line, Path, Rectangle};
use ::svg::node::Text as TextNode;
use ::svg::{Document, Node};

use crate::render::{Composition, Node as CompositionNode, Primitive, Shape, Style, ViewBox};

/// Shortest stable textual form of a coordinate: rounded to 10 decimals,
/// integers without a fraction, never `-0`.
pub fn num(value: f64) -> String {
    let rounded = (value * 1e10).round() / 1e10;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

fn view_box_attribute(vb: &ViewBox) -> String {
    format!("{} {} {} {}", num(vb.x), num(vb.y), num(vb.width), num(vb.height))
}

fn apply_style<N: Node>(node: &mut N, style: &Style) {
    if let Some(fill) = &style.fill {
        node.assign("fill", fill.to_attribute());
    }
    if let Some(stroke) = &style.stroke {
        node.assign("stroke", stroke.to_attribute());
    }
    if let Some(width) = style.stroke_width {
        node.assign("stroke-width", num(width));
    }
    if let Some(cap) = style.line_cap {
        node.assign("stroke-linecap", cap.as_str());
    }
    if let Some(join) = style.line_join {
        node.assign("stroke-linejoin", join.as_str());
    }
}

fn decorate<N: Node>(mut node: N, id: Option<&String>, style: &Style) -> Box<dyn Node> {
    if let Some(id) = id {
        node.assign("id", id.clone());
    }
    apply_style(&mut node, style);
    node.into()
}

fn primitive_node(primitive: &Primitive) -> Box<dyn Node> {
    let id = primitive.id.as_ref();
    let style = &primitive.style;
    match &primitive.shape {
        Shape::Path { d } => decorate(Path::new().set("d", d.clone()), id, style),
        Shape::Line { x1, y1, x2, y2 } => decorate(
            Line::new()
                .set("x1", num(*x1))
                .set("y1", num(*y1))
                .set("x2", num(*x2))
                .set("y2", num(*y2)),
            id,
            style,
        ),
        Shape::Circle { cx, cy, r } => decorate(
            Circle::new()
                .set("cx", num(*cx))
                .set("cy", num(*cy))
                .set("r", num(*r)),
            id,
            style,
        ),
        Shape::Rect { x, y, width, height } => decorate(
            Rectangle::new()
                .set("x", num(*x))
                .set("y", num(*y))
                .set("width", num(*width))
                .set("height", num(*height)),
            id,
            style,
        ),
    }
}

/// Build the SVG document tree
pub fn document(composition: &Composition) -> Document {
    let mut document = Document::new()
        .set("width", "100%")
        .set("height", "100%")
        .set("viewBox", view_box_attribute(&composition.view_box));

    let mut title = Element::new("title");
    title.append(TextNode::new(composition.title.clone()));
    document.append(title);

    for node in &composition.nodes {
        match node {
            CompositionNode::Primitive(p) => document.append(primitive_node(p)),
            CompositionNode::Group(g) => {
                let mut group = Group::new();
                for child in &g.children {
                    group.append(primitive_node(child));
                }
                document.append(decorate(group, g.id.as_ref(), &g.style));
            }
        }
    }

    document
}

/// Serialize a composition to SVG markup
pub fn to_svg(composition: &Composition) -> String {
    document(composition).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors::{BLACK, WHITE};
    use crate::render::LineCap;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(5.0), "5");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(0.1 + 0.2), "0.3");
        assert_eq!(num(-2.5), "-2.5");
        assert_eq!(num(1e-12), "0");
    }

    #[test]
    fn test_document_contains_view_box_and_title() {
        let composition = Composition::new("An Artwork", ViewBox::sized(250.0, 120.0));
        let markup = to_svg(&composition);
        assert!(markup.contains("viewBox=\"0 0 250 120\""));
        assert!(markup.contains("<title>"));
        assert!(markup.contains("An Artwork"));
    }

    #[test]
    fn test_primitive_attributes() {
        let mut composition = Composition::new("t", ViewBox::sized(10.0, 10.0));
        composition.push_background(WHITE);
        composition.push(
            Primitive::new(
                Shape::Path { d: "M0 0h1v1Z".into() },
                Style::stroke(BLACK, 2.0).with_line_cap(LineCap::Round),
            )
            .with_id("p"),
        );
        let markup = to_svg(&composition);
        assert!(markup.contains("fill=\"#ffffff\""));
        assert!(markup.contains("d=\"M0 0h1v1Z\""));
        assert!(markup.contains("stroke=\"#000000\""));
        assert!(markup.contains("stroke-width=\"2\""));
        assert!(markup.contains("stroke-linecap=\"round\""));
        assert!(markup.contains("id=\"p\""));
    }

    #[test]
    fn test_groups_nest_children() {
        let mut composition = Composition::new("t", ViewBox::sized(10.0, 10.0));
        composition.push_group(
            Some("tile_1x1".into()),
            Style::default(),
            vec![Primitive::new(
                Shape::Circle { cx: 1.0, cy: 2.0, r: 3.0 },
                Style::fill(BLACK),
            )],
        );
        let markup = to_svg(&composition);
        let group_at = markup.find("<g").unwrap();
        let circle_at = markup.find("<circle").unwrap();
        assert!(group_at < circle_at);
        assert!(markup.contains("id=\"tile_1x1\""));
        assert!(markup.contains("r=\"3\""));
    }
}
