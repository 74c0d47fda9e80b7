// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_scene --heading-base-level=0

//! Ecomap Scene: a small declarative tree of visual nodes.
//!
//! Views build a [`Scene`] out of groups, rectangles, circles, text, and
//! images. A scene is plain data: it can be inspected in tests, exported (see
//! `ecomap_svg`), and hit tested to route pointer input back to the group that
//! was clicked.
//!
//! - [`Group`] carries an optional id, [`NodeFlags`], pick bounds, and an
//!   optional clip.
//! - [`TextNode`] holds pre-wrapped lines; [`TextNode::clamped`] wraps and
//!   ellipsizes using the approximate metrics in [`text`].
//!
//! ## Hit testing
//!
//! [`Scene::hit_test`] returns the id of the topmost visible, pickable group
//! whose bounds contain the point. Later siblings are on top of earlier ones
//! and children are on top of their parent. Invisible groups hide their whole
//! subtree, and a clipping group only passes points inside its bounds on to
//! its children.
//!
//! ```rust
//! use ecomap_scene::{Group, RectNode, Scene};
//! use kurbo::{Point, Rect};
//! use peniko::Color;
//!
//! let card = Rect::new(10.0, 10.0, 110.0, 60.0);
//! let mut scene = Scene::new(200.0, 100.0, Color::BLACK);
//! scene.push(
//!     Group::new(card)
//!         .with_id("wallets")
//!         .pickable()
//!         .with(RectNode::filled(card, Color::WHITE)),
//! );
//!
//! assert_eq!(scene.hit_test(Point::new(50.0, 30.0)), Some("wallets"));
//! assert_eq!(scene.hit_test(Point::new(150.0, 30.0)), None);
//! ```

mod node;
pub mod text;

use kurbo::{Point, Rect};
use peniko::Color;

pub use node::{
    CircleNode, Group, ImageNode, ImageShape, Node, NodeFlags, RectNode, Stroke, TextAlign,
    TextNode, TextStyle,
};
pub use text::FontWeight;

/// A drawable page.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// Page background.
    pub background: Color,
    /// Top-level nodes in paint order.
    pub root: Vec<Node>,
}

impl Scene {
    /// An empty page.
    #[must_use]
    pub fn new(width: f64, height: f64, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            root: Vec::new(),
        }
    }

    /// Page bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Append a top-level node.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.root.push(node.into());
    }

    /// Id of the topmost visible, pickable group containing `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&str> {
        hit_nodes(&self.root, point)
    }

    /// Visit every node in paint order.
    pub fn visit<'a>(&'a self, mut f: impl FnMut(&'a Node)) {
        for node in &self.root {
            node.visit(&mut f);
        }
    }

    /// The group with the given id, if any.
    #[must_use]
    pub fn find_group(&self, id: &str) -> Option<&Group> {
        let mut found = None;
        self.visit(|node| {
            if found.is_none()
                && let Node::Group(group) = node
                && group.id.as_deref() == Some(id)
            {
                found = Some(group);
            }
        });
        found
    }

    /// Ids of all pickable groups, in paint order.
    #[must_use]
    pub fn pickable_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.visit(|node| {
            if let Node::Group(group) = node
                && group.flags.contains(NodeFlags::PICKABLE)
                && let Some(id) = group.id.as_deref()
            {
                ids.push(id);
            }
        });
        ids
    }

    /// Text of every text node, one entry per node, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.visit(|node| {
            if let Node::Text(text) = node {
                out.push(text.text());
            }
        });
        out
    }
}

fn hit_nodes(nodes: &[Node], point: Point) -> Option<&str> {
    nodes.iter().rev().find_map(|node| match node {
        Node::Group(group) => hit_group(group, point),
        _ => None,
    })
}

fn hit_group(group: &Group, point: Point) -> Option<&str> {
    if !group.flags.contains(NodeFlags::VISIBLE) {
        return None;
    }
    let inside = group.bounds.contains(point);
    if group.clip && !inside {
        return None;
    }
    if let Some(id) = hit_nodes(&group.children, point) {
        return Some(id);
    }
    if inside && group.flags.contains(NodeFlags::PICKABLE) {
        return group.id.as_deref();
    }
    None
}
