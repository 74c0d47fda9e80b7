// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full project grid of the selected category.

use ecomap_catalog::{Category, Project};
use kurbo::{Point, Rect};

use crate::grid::AutoFill;

/// Geometry of the detail grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DetailConfig {
    /// Space between the card area and the detail section.
    pub top_margin: f64,
    /// Height of the section heading.
    pub heading_height: f64,
    /// Space below the heading.
    pub heading_margin: f64,
    /// Minimum column width of the auto-fill grid.
    pub min_column_width: f64,
    /// Gap between items, both axes.
    pub gap: f64,
    /// Inner padding of an item.
    pub item_padding: f64,
    /// Icon edge length.
    pub icon_size: f64,
    /// Space between the icon and the name.
    pub icon_gap: f64,
    /// Line height of the project name.
    pub name_line_height: f64,
    /// Line height of the tagline.
    pub tagline_line_height: f64,
    /// Maximum tagline lines.
    pub tagline_lines: usize,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            top_margin: 48.0,
            heading_height: 32.0,
            heading_margin: 24.0,
            min_column_width: 160.0,
            gap: 24.0,
            item_padding: 16.0,
            icon_size: 64.0,
            icon_gap: 12.0,
            name_line_height: 24.0,
            tagline_line_height: 20.0,
            tagline_lines: 2,
        }
    }
}

impl DetailConfig {
    fn item_height(&self) -> f64 {
        self.item_padding * 2.0
            + self.icon_size
            + self.icon_gap
            + self.name_line_height
            + self.tagline_line_height * self.tagline_lines as f64
    }
}

/// One project tile.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailItem {
    /// The project shown.
    pub project: Project,
    /// Tile bounds.
    pub rect: Rect,
    /// Icon square.
    pub icon: Rect,
    /// Name line.
    pub name: Rect,
    /// Tagline box, present only when the project has a tagline.
    pub tagline: Option<Rect>,
}

/// The laid-out detail section.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailLayout {
    /// Key of the category shown.
    pub key: String,
    /// Title of the category shown.
    pub title: String,
    /// Heading line.
    pub heading: Rect,
    /// Number of grid columns.
    pub columns: usize,
    /// One tile per project, in category order.
    pub items: Vec<DetailItem>,
    /// Whole section, heading included.
    pub bounds: Rect,
}

/// Lay out every project of `category` starting at `origin`, `width` wide.
///
/// The list is not capped: the section grows downwards as needed.
#[must_use]
pub fn layout_detail(
    key: &str,
    category: &Category,
    origin: Point,
    width: f64,
    config: &DetailConfig,
) -> DetailLayout {
    let top = origin.y + config.top_margin;
    let heading = Rect::new(origin.x, top, origin.x + width, top + config.heading_height);
    let grid_top = heading.y1 + config.heading_margin;

    let grid = AutoFill::new(width, config.min_column_width, config.gap);
    let item_height = config.item_height();

    let items: Vec<DetailItem> = category
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let (row, col) = (i / grid.columns, i % grid.columns);
            let x = origin.x + grid.x(col);
            let y = grid_top + row as f64 * (item_height + config.gap);
            let rect = Rect::new(x, y, x + grid.track, y + item_height);

            let icon_x = rect.center().x - config.icon_size / 2.0;
            let icon_y = y + config.item_padding;
            let icon = Rect::new(
                icon_x,
                icon_y,
                icon_x + config.icon_size,
                icon_y + config.icon_size,
            );

            let text_x0 = x + config.item_padding;
            let text_x1 = rect.x1 - config.item_padding;
            let name_y = icon.y1 + config.icon_gap;
            let name = Rect::new(text_x0, name_y, text_x1, name_y + config.name_line_height);
            let tagline = project.tagline.as_ref().map(|_| {
                Rect::new(
                    text_x0,
                    name.y1,
                    text_x1,
                    name.y1 + config.tagline_line_height * config.tagline_lines as f64,
                )
            });

            DetailItem {
                project: project.clone(),
                rect,
                icon,
                name,
                tagline,
            }
        })
        .collect();

    let bottom = items.last().map_or(heading.y1, |item| item.rect.y1);
    DetailLayout {
        key: key.to_owned(),
        title: category.title.clone(),
        heading,
        columns: grid.columns,
        items,
        bounds: Rect::new(origin.x, origin.y, origin.x + width, bottom),
    }
}
