// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The share preview scene.

use ecomap_layout::share::{PanelLayout, ShareItem, ShareLayout};
use ecomap_scene::{
    CircleNode, FontWeight, Group, ImageNode, ImageShape, RectNode, Scene, Stroke, TextAlign,
    TextNode, TextStyle,
};
use kurbo::Point;

use crate::theme::Theme;

/// Build the share preview with the default theme.
#[must_use]
pub fn share_scene(layout: &ShareLayout) -> Scene {
    share_scene_with(layout, &Theme::default())
}

/// Build the share preview.
///
/// Every panel is a clipping group with id `panel:<key>`, so overflowing
/// labels never bleed into neighbors.
#[must_use]
pub fn share_scene_with(layout: &ShareLayout, theme: &Theme) -> Scene {
    let mut scene = Scene::new(layout.size.width, layout.size.height, theme.share_background);

    let heading = TextStyle::new(36.0, theme.text)
        .weight(FontWeight::Bold)
        .line_height(40.0);
    scene.push(
        Group::new(layout.title_band)
            .with_id("title")
            .with(TextNode::line(Point::new(32.0, 20.0), layout.title.clone(), heading)),
    );

    for panel in &layout.panels {
        scene.push(panel_group(panel, theme));
    }
    scene
}

fn panel_group(panel: &PanelLayout, theme: &Theme) -> Group {
    let title = TextStyle::new(20.0, theme.panel_title)
        .weight(FontWeight::SemiBold)
        .line_height(panel.title_rect.height());

    let mut group = Group::new(panel.rect)
        .with_id(format!("panel:{}", panel.key))
        .clipped()
        .with(
            RectNode::filled(panel.rect, theme.panel)
                .rounded(12.0)
                .stroked(Stroke::solid(theme.panel_border, 1.0)),
        )
        .with(TextNode::clamped(
            panel.title_rect.origin(),
            &panel.title,
            title,
            panel.title_rect.width(),
            1,
        ));

    for item in &panel.items {
        item_nodes(&mut group, item, theme);
    }
    group
}

fn item_nodes(group: &mut Group, item: &ShareItem, theme: &Theme) {
    let name = TextStyle::new(14.0, theme.text)
        .weight(FontWeight::Medium)
        .line_height(item.name.height())
        .align(TextAlign::Middle);
    let tagline = TextStyle::new(12.0, theme.muted_text)
        .line_height(16.0)
        .align(TextAlign::Middle);

    group.push(CircleNode {
        center: item.avatar.center(),
        radius: item.avatar.width() / 2.0,
        fill: Some(theme.avatar_background),
        stroke: None,
    });
    group.push(ImageNode {
        rect: item.avatar,
        href: item.project.image.clone(),
        placeholder: theme.placeholder.clone(),
        shape: ImageShape::Circle,
        alt: item.project.name.clone(),
    });
    group.push(TextNode::clamped(
        Point::new(item.name.center().x, item.name.y0),
        &item.project.name,
        name,
        item.name.width(),
        1,
    ));
    if let (Some(rect), Some(text)) = (item.tagline, item.project.tagline.as_deref()) {
        let lines = (rect.height() / tagline.line_height).floor().max(1.0) as usize;
        group.push(TextNode::clamped(
            Point::new(rect.center().x, rect.y0),
            text,
            tagline,
            rect.width(),
            lines,
        ));
    }
}
