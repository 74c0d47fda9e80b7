// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_svg --heading-base-level=0

//! SVG export for Ecomap scenes.
//!
//! [`to_svg`] writes a standalone SVG document for a [`Scene`]. Output is
//! deterministic: the same scene always produces the same bytes, clip ids are
//! numbered in paint order, and numbers are printed with at most three
//! decimals.
//!
//! - Text content and attribute values are XML-escaped.
//! - Clipping groups and circular images get a `<clipPath>` in `<defs>`.
//! - Images carry an `onerror` handler that swaps in the placeholder, so a
//!   browser shows the placeholder for links that fail to load.
//! - Invisible groups are omitted.
//!
//! ```rust
//! use ecomap_scene::{Group, RectNode, Scene};
//! use kurbo::Rect;
//! use peniko::Color;
//!
//! let mut scene = Scene::new(100.0, 80.0, Color::from_rgba8(10, 15, 28, 255));
//! scene.push(Group::new(Rect::ZERO).with_id("a&b").with(RectNode::filled(
//!     Rect::new(10.0, 20.0, 30.0, 40.0),
//!     Color::from_rgba8(255, 0, 0, 255),
//! )));
//!
//! let svg = ecomap_svg::to_svg(&scene);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("id=\"a&amp;b\""));
//! assert!(svg.contains("<rect x=\"10\" y=\"20\" width=\"20\" height=\"20\" fill=\"#ff0000\"/>"));
//! ```

use core::fmt::Write as _;

use ecomap_scene::{
    CircleNode, Group, ImageNode, ImageShape, Node, NodeFlags, RectNode, Scene, Stroke, TextAlign,
    TextNode,
};
use kurbo::Rect;
use peniko::Color;

/// Font stack written on the root group.
pub const FONT_FAMILY: &str = "Inter, ui-sans-serif, system-ui, sans-serif";

/// Export `scene` as an SVG document.
#[must_use]
pub fn to_svg(scene: &Scene) -> String {
    let mut writer = SvgWriter::default();
    for node in &scene.root {
        writer.node(node);
    }

    let (w, h) = (fmt_num(scene.width), fmt_num(scene.height));
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    if !writer.defs.is_empty() {
        svg.push_str("<defs>");
        svg.push_str(&writer.defs);
        svg.push_str("</defs>\n");
    }
    svg.push_str("<rect width=\"100%\" height=\"100%\"");
    write_paint(&mut svg, "fill", scene.background);
    svg.push_str("/>\n");
    let _ = write!(svg, "<g font-family=\"{}\">", escape(FONT_FAMILY));
    svg.push_str(&writer.body);
    svg.push_str("</g>\n</svg>\n");
    svg
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    body: String,
    clip_counter: u64,
}

impl SvgWriter {
    fn next_clip_id(&mut self) -> String {
        self.clip_counter += 1;
        format!("clip{}", self.clip_counter)
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Group(group) => self.group(group),
            Node::Rect(rect) => self.rect(rect),
            Node::Circle(circle) => self.circle(circle),
            Node::Text(text) => self.text(text),
            Node::Image(image) => self.image(image),
        }
        if !matches!(node, Node::Group(_)) {
            self.body.push('\n');
        }
    }

    fn group(&mut self, group: &Group) {
        if !group.flags.contains(NodeFlags::VISIBLE) {
            return;
        }
        let mut attrs = String::new();
        if let Some(id) = &group.id {
            let _ = write!(attrs, " id=\"{}\"", escape(id));
        }
        if group.flags.contains(NodeFlags::PICKABLE) {
            attrs.push_str(" data-pickable=\"true\" cursor=\"pointer\"");
        }
        if group.clip {
            let clip_id = self.next_clip_id();
            let _ = write!(
                self.defs,
                "<clipPath id=\"{clip_id}\" clipPathUnits=\"userSpaceOnUse\">"
            );
            write_rect(&mut self.defs, group.bounds, 0.0);
            self.defs.push_str("/></clipPath>");
            let _ = write!(attrs, " clip-path=\"url(#{clip_id})\"");
        }
        let _ = writeln!(self.body, "<g{attrs}>");
        for child in &group.children {
            self.node(child);
        }
        self.body.push_str("</g>\n");
    }

    fn rect(&mut self, node: &RectNode) {
        write_rect(&mut self.body, node.rect, node.radius);
        write_fill(&mut self.body, node.fill);
        write_stroke(&mut self.body, node.stroke.as_ref());
        self.body.push_str("/>");
    }

    fn circle(&mut self, node: &CircleNode) {
        let _ = write!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            fmt_num(node.center.x),
            fmt_num(node.center.y),
            fmt_num(node.radius)
        );
        write_fill(&mut self.body, node.fill);
        write_stroke(&mut self.body, node.stroke.as_ref());
        self.body.push_str("/>");
    }

    fn text(&mut self, node: &TextNode) {
        if node.lines.is_empty() {
            return;
        }
        let style = &node.style;
        let anchor = match style.align {
            TextAlign::Start => "start",
            TextAlign::Middle => "middle",
            TextAlign::End => "end",
        };
        let x = fmt_num(node.origin.x);
        let _ = write!(
            self.body,
            "<text x=\"{x}\" y=\"{}\" font-size=\"{}\" font-weight=\"{}\" text-anchor=\"{anchor}\"",
            fmt_num(node.baseline(0)),
            fmt_num(style.size),
            style.weight.css(),
        );
        write_paint(&mut self.body, "fill", style.color);
        self.body.push('>');
        if let [line] = node.lines.as_slice() {
            self.body.push_str(&escape(line));
        } else {
            for (i, line) in node.lines.iter().enumerate() {
                let _ = write!(
                    self.body,
                    "<tspan x=\"{x}\" y=\"{}\">{}</tspan>",
                    fmt_num(node.baseline(i)),
                    escape(line)
                );
            }
        }
        self.body.push_str("</text>");
    }

    fn image(&mut self, node: &ImageNode) {
        let r = node.rect;
        let mut attrs = String::new();
        if node.shape == ImageShape::Circle {
            let clip_id = self.next_clip_id();
            let c = r.center();
            let _ = write!(
                self.defs,
                "<clipPath id=\"{clip_id}\" clipPathUnits=\"userSpaceOnUse\">\
                 <circle cx=\"{}\" cy=\"{}\" r=\"{}\"/></clipPath>",
                fmt_num(c.x),
                fmt_num(c.y),
                fmt_num(r.width().min(r.height()) / 2.0)
            );
            let _ = write!(attrs, " clip-path=\"url(#{clip_id})\"");
        }
        // The attribute value is XML-decoded before the handler runs, so the
        // placeholder must also be a valid single-quoted script string.
        let placeholder = escape(&script_string(&node.placeholder));
        let _ = write!(
            self.body,
            "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\" \
             preserveAspectRatio=\"xMidYMid slice\"{attrs} \
             onerror=\"this.onerror=null;this.setAttribute('href','{placeholder}')\">\
             <title>{}</title></image>",
            fmt_num(r.x0),
            fmt_num(r.y0),
            fmt_num(r.width()),
            fmt_num(r.height()),
            escape(node.source()),
            escape(&node.alt),
        );
    }
}

fn write_rect(out: &mut String, rect: Rect, radius: f64) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        fmt_num(rect.x0),
        fmt_num(rect.y0),
        fmt_num(rect.width()),
        fmt_num(rect.height()),
    );
    if radius > 0.0 {
        let _ = write!(out, " rx=\"{}\"", fmt_num(radius));
    }
}

fn write_fill(out: &mut String, fill: Option<Color>) {
    match fill {
        Some(color) => write_paint(out, "fill", color),
        None => out.push_str(" fill=\"none\""),
    }
}

fn write_stroke(out: &mut String, stroke: Option<&Stroke>) {
    let Some(stroke) = stroke else {
        return;
    };
    write_paint(out, "stroke", stroke.color);
    let _ = write!(out, " stroke-width=\"{}\"", fmt_num(stroke.width));
    if let Some((dash, gap)) = stroke.dash {
        let _ = write!(
            out,
            " stroke-dasharray=\"{} {}\"",
            fmt_num(dash),
            fmt_num(gap)
        );
    }
}

fn write_paint(out: &mut String, attr: &str, color: Color) {
    let (hex, alpha) = color_to_svg(color);
    let _ = write!(out, " {attr}=\"{hex}\"");
    if alpha < 1.0 {
        let _ = write!(out, " {attr}-opacity=\"{}\"", fmt_num(alpha));
    }
}

fn color_to_svg(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let a = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let rounded = v.round();
    if (rounded - v).abs() < 1e-6 {
        // -0 prints as "0".
        return format!("{}", rounded + 0.0);
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Escape `s` for the inside of a single-quoted script string literal.
fn script_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Escape `s` for use in XML text and double-quoted attributes.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Control characters other than tab and newline are invalid in XML 1.0.
            c if c.is_control() && c != '\t' && c != '\n' => {}
            c => out.push(c),
        }
    }
    out
}
