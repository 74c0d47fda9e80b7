// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node types of the scene tree.

use kurbo::{Point, Rect};
use peniko::Color;

use crate::text::{FontWeight, clamp_lines};

bitflags::bitflags! {
    /// Group flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Group is drawn.
        const VISIBLE  = 0b0000_0001;
        /// Group participates in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Outline of a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line color.
    pub color: Color,
    /// Line width.
    pub width: f64,
    /// Dash and gap lengths, for a dashed outline.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    /// A solid outline.
    #[must_use]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Make the outline dashed.
    #[must_use]
    pub const fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }
}

/// A container of child nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// Identifier reported by hit testing and written to SVG.
    pub id: Option<String>,
    /// Visibility and picking.
    pub flags: NodeFlags,
    /// Pick area; also the clip rectangle when `clip` is set.
    pub bounds: Rect,
    /// Clip children to `bounds`.
    pub clip: bool,
    /// Children in paint order.
    pub children: Vec<Node>,
}

impl Group {
    /// A visible, non-pickable group covering `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: None,
            flags: NodeFlags::default(),
            bounds,
            clip: false,
            children: Vec::new(),
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Make the group pickable.
    #[must_use]
    pub fn pickable(mut self) -> Self {
        self.flags |= NodeFlags::PICKABLE;
        self
    }

    /// Clip children to the bounds.
    #[must_use]
    pub fn clipped(mut self) -> Self {
        self.clip = true;
        self
    }

    /// Append a child.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Append a child, builder style.
    #[must_use]
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }
}

/// A filled and/or stroked rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    /// Bounds.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
    /// Fill color.
    pub fill: Option<Color>,
    /// Outline.
    pub stroke: Option<Stroke>,
}

impl RectNode {
    /// A filled rectangle.
    #[must_use]
    pub fn filled(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            radius: 0.0,
            fill: Some(fill),
            stroke: None,
        }
    }

    /// Round the corners.
    #[must_use]
    pub fn rounded(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Add an outline.
    #[must_use]
    pub fn stroked(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// A filled and/or stroked circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill color.
    pub fill: Option<Color>,
    /// Outline.
    pub stroke: Option<Stroke>,
}

/// Horizontal text anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// `origin.x` is the left edge.
    #[default]
    Start,
    /// `origin.x` is the center.
    Middle,
    /// `origin.x` is the right edge.
    End,
}

/// Font settings of a text node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    /// Distance between baselines.
    pub line_height: f64,
    /// Weight.
    pub weight: FontWeight,
    /// Fill color.
    pub color: Color,
    /// Anchor.
    pub align: TextAlign,
}

impl TextStyle {
    /// Regular, start-aligned text with a line height of 1.4 × size.
    #[must_use]
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            line_height: (size * 1.4).round(),
            weight: FontWeight::Normal,
            color,
            align: TextAlign::Start,
        }
    }

    /// Set the weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the line height.
    #[must_use]
    pub const fn line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the anchor.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// One or more lines of text.
///
/// `origin` is the anchor point of the top of the first line box; baselines
/// are derived from the style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Top anchor of the first line.
    pub origin: Point,
    /// Lines, already wrapped and clamped.
    pub lines: Vec<String>,
    /// Font settings.
    pub style: TextStyle,
}

impl TextNode {
    /// A single unwrapped line.
    #[must_use]
    pub fn line(origin: Point, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            origin,
            lines: vec![text.into()],
            style,
        }
    }

    /// Wrap `text` to `max_width` and keep at most `max_lines` lines.
    #[must_use]
    pub fn clamped(
        origin: Point,
        text: &str,
        style: TextStyle,
        max_width: f64,
        max_lines: usize,
    ) -> Self {
        Self {
            origin,
            lines: clamp_lines(text, style.size, style.weight, max_width, max_lines),
            style,
        }
    }

    /// Baseline of line `index`.
    #[must_use]
    pub fn baseline(&self, index: usize) -> f64 {
        // Center the glyphs in the line box; 0.35em approximates half the cap height.
        self.origin.y
            + self.style.line_height * (index as f64 + 0.5)
            + self.style.size * 0.35
    }

    /// All lines joined by a space.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

/// How an image is framed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ImageShape {
    /// Rectangular.
    #[default]
    Rect,
    /// Clipped to the inscribed circle.
    Circle,
}

/// A raster or vector image by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageNode {
    /// Bounds.
    pub rect: Rect,
    /// Source, or `None` to show the placeholder.
    pub href: Option<String>,
    /// Shown when `href` is missing or fails to load.
    pub placeholder: String,
    /// Frame shape.
    pub shape: ImageShape,
    /// Accessible description.
    pub alt: String,
}

impl ImageNode {
    /// The reference to load: `href` if set and non-empty, else the placeholder.
    #[must_use]
    pub fn source(&self) -> &str {
        match &self.href {
            Some(href) if !href.trim().is_empty() => href,
            _ => &self.placeholder,
        }
    }
}

/// A node of the scene tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Container.
    Group(Group),
    /// Rectangle.
    Rect(RectNode),
    /// Circle.
    Circle(CircleNode),
    /// Text.
    Text(TextNode),
    /// Image.
    Image(ImageNode),
}

impl Node {
    /// Visit this node and its descendants in paint order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        f(self);
        if let Self::Group(group) = self {
            for child in &group.children {
                child.visit(f);
            }
        }
    }
}

impl From<Group> for Node {
    fn from(v: Group) -> Self {
        Self::Group(v)
    }
}

impl From<RectNode> for Node {
    fn from(v: RectNode) -> Self {
        Self::Rect(v)
    }
}

impl From<CircleNode> for Node {
    fn from(v: CircleNode) -> Self {
        Self::Circle(v)
    }
}

impl From<TextNode> for Node {
    fn from(v: TextNode) -> Self {
        Self::Text(v)
    }
}

impl From<ImageNode> for Node {
    fn from(v: ImageNode) -> Self {
        Self::Image(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_source_falls_back_to_placeholder() {
        let mut image = ImageNode {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            href: None,
            placeholder: "/placeholder.svg".into(),
            shape: ImageShape::Circle,
            alt: "x".into(),
        };
        assert_eq!(image.source(), "/placeholder.svg");
        image.href = Some("  ".into());
        assert_eq!(image.source(), "/placeholder.svg");
        image.href = Some("https://img/x.png".into());
        assert_eq!(image.source(), "https://img/x.png");
    }

    #[test]
    fn visit_walks_in_paint_order() {
        let tree: Node = Group::new(Rect::ZERO)
            .with(RectNode::filled(Rect::ZERO, Color::WHITE))
            .with(Group::new(Rect::ZERO).with(TextNode::line(
                Point::ZERO,
                "hi",
                TextStyle::new(12.0, Color::BLACK),
            )))
            .into();
        let mut kinds = Vec::new();
        tree.visit(&mut |n| {
            kinds.push(match n {
                Node::Group(_) => 'g',
                Node::Rect(_) => 'r',
                Node::Circle(_) => 'c',
                Node::Text(_) => 't',
                Node::Image(_) => 'i',
            });
        });
        assert_eq!(kinds, ['g', 'r', 'g', 't']);
    }
}
