// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed-size share preview: one treemap panel per visible category.
//!
//! Panel sizes come from [`ecomap_treemap`] with a weight of `projects + bias`
//! per category. Inside each panel, as many project icons as fit are packed
//! into an auto-fill grid; the rest are counted in
//! [`PanelLayout::hidden_count`] and not drawn.

use ecomap_catalog::{CategorizedProjects, ColorToken, Project, VisibilitySelection};
use ecomap_treemap::Treemap;
use kurbo::{Rect, Size};

use crate::grid::AutoFill;

/// Default heading of the share preview.
pub const DEFAULT_TITLE: &str = "NEAR Protocol Ecosystem Map";

/// Geometry of the share preview canvas and its panels.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareConfig {
    /// Heading drawn in the title band.
    pub title: String,
    /// Canvas size.
    pub size: Size,
    /// Height of the title band.
    pub title_height: f64,
    /// Margin around the treemap area.
    pub margin: f64,
    /// Treemap padding, inner and outer.
    pub treemap_padding: f64,
    /// Added to each category's project count to form its weight.
    pub weight_bias: f64,
    /// Smallest icon edge length.
    pub icon_min: f64,
    /// Largest icon edge length.
    pub icon_max: f64,
    /// Panel padding, also the icon grid gap used when sizing.
    pub panel_padding: f64,
    /// Horizontal room reserved per icon for its label.
    pub label_width_reserve: f64,
    /// Vertical room reserved per icon for its label.
    pub label_height_reserve: f64,
    /// Vertical room reserved for the panel title.
    pub header_reserve: f64,
    /// Gap between icon grid items.
    pub grid_gap: f64,
    /// Line height of the panel title.
    pub panel_title_height: f64,
    /// Space below the panel title.
    pub panel_title_margin: f64,
    /// Line height of project names.
    pub name_line_height: f64,
    /// Space between a name and its tagline.
    pub tagline_gap: f64,
    /// Line height of taglines.
    pub tagline_line_height: f64,
    /// Maximum tagline lines.
    pub tagline_lines: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            size: Size::new(3840.0, 2160.0),
            title_height: 80.0,
            margin: 20.0,
            treemap_padding: 32.0,
            weight_bias: 2.0,
            icon_min: 64.0,
            icon_max: 88.0,
            panel_padding: 16.0,
            label_width_reserve: 32.0,
            label_height_reserve: 24.0,
            header_reserve: 64.0,
            grid_gap: 16.0,
            panel_title_height: 28.0,
            panel_title_margin: 16.0,
            name_line_height: 20.0,
            tagline_gap: 4.0,
            tagline_line_height: 16.0,
            tagline_lines: 2,
        }
    }
}

impl ShareConfig {
    /// The area handed to the treemap, in canvas coordinates.
    #[must_use]
    pub fn usable_area(&self) -> Rect {
        let top = self.title_height + self.margin;
        Rect::new(
            self.margin,
            top,
            (self.size.width - self.margin).max(self.margin),
            (self.size.height - self.margin).max(top),
        )
    }
}

/// One project in a panel's icon grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareItem {
    /// The project shown.
    pub project: Project,
    /// Grid cell.
    pub rect: Rect,
    /// Square bounds of the circular avatar.
    pub avatar: Rect,
    /// Name line.
    pub name: Rect,
    /// Tagline box, present only when the project has a tagline.
    pub tagline: Option<Rect>,
}

/// One category panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    /// Category key.
    pub key: String,
    /// Category title.
    pub title: String,
    /// Category color token.
    pub color: ColorToken,
    /// Panel bounds in canvas coordinates.
    pub rect: Rect,
    /// Panel title line.
    pub title_rect: Rect,
    /// Icon edge length, between the configured minimum and maximum.
    pub icon_size: f64,
    /// Columns that fit at the minimum icon size.
    pub max_columns: usize,
    /// Rows that fit at the minimum icon size.
    pub max_rows: usize,
    /// Columns of the rendered auto-fill grid.
    pub grid_columns: usize,
    /// Projects drawn, in category order.
    pub items: Vec<ShareItem>,
    /// Projects that did not fit.
    pub hidden_count: usize,
}

impl PanelLayout {
    /// Capacity of the panel: `max_columns * max_rows`.
    #[must_use]
    pub fn max_projects(&self) -> usize {
        self.max_columns * self.max_rows
    }
}

/// The whole share preview.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareLayout {
    /// Heading text.
    pub title: String,
    /// Canvas size.
    pub size: Size,
    /// Title band at the top of the canvas.
    pub title_band: Rect,
    /// Area the panels were partitioned from.
    pub usable: Rect,
    /// Keys of the rendered categories, in panel order.
    pub keys: Vec<String>,
    /// One panel per rendered category.
    pub panels: Vec<PanelLayout>,
}

impl ShareLayout {
    /// Total number of projects left out across all panels.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.panels.iter().map(|p| p.hidden_count).sum()
    }
}

/// Keys of categories that are both visible and present, sorted by title.
///
/// Titles compare case-insensitively; equal titles keep insertion order.
#[must_use]
pub fn visible_keys(
    categories: &CategorizedProjects,
    visibility: &VisibilitySelection,
) -> Vec<String> {
    let mut keyed: Vec<(String, usize, &str)> = categories
        .iter()
        .enumerate()
        .filter(|(_, (key, _))| visibility.is_visible(key))
        .map(|(pos, (key, cat))| (cat.title.to_lowercase(), pos, key))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
    keyed.into_iter().map(|(_, _, key)| key.to_owned()).collect()
}

/// Lay out the share preview for the visible categories.
#[must_use]
pub fn layout_share_preview(
    categories: &CategorizedProjects,
    visibility: &VisibilitySelection,
    config: &ShareConfig,
) -> ShareLayout {
    let keys = visible_keys(categories, visibility);
    layout_keys(categories, keys, config)
}

fn layout_keys(
    categories: &CategorizedProjects,
    keys: Vec<String>,
    config: &ShareConfig,
) -> ShareLayout {
    let usable = config.usable_area();
    let title_band = Rect::new(0.0, 0.0, config.size.width, config.title_height);

    let chosen: Vec<(&str, &ecomap_catalog::Category)> = keys
        .iter()
        .filter_map(|key| categories.get(key).map(|cat| (key.as_str(), cat)))
        .collect();
    let weights: Vec<f64> = chosen
        .iter()
        .map(|(_, cat)| cat.len() as f64 + config.weight_bias)
        .collect();

    // Partition in local coordinates so rounding matches a zero-origin layout,
    // then move the cells onto the canvas.
    let local = Rect::from_origin_size((0.0, 0.0), usable.size());
    let cells = Treemap::new()
        .padding(config.treemap_padding)
        .round(true)
        .partition(&weights, local);

    let panels: Vec<PanelLayout> = chosen
        .iter()
        .zip(cells)
        .map(|((key, category), cell)| {
            let rect = cell + usable.origin().to_vec2();
            layout_panel(key, category, rect, config)
        })
        .collect();

    for panel in panels.iter().filter(|p| p.hidden_count > 0) {
        tracing::debug!(
            key = %panel.key,
            shown = panel.items.len(),
            hidden = panel.hidden_count,
            "share panel truncated"
        );
    }

    ShareLayout {
        title: config.title.clone(),
        size: config.size,
        title_band,
        usable,
        keys,
        panels,
    }
}

fn layout_panel(
    key: &str,
    category: &ecomap_catalog::Category,
    rect: Rect,
    config: &ShareConfig,
) -> PanelLayout {
    let pad = config.panel_padding;
    let (w, h) = (rect.width(), rect.height());

    let max_columns = floor_count(
        (w - pad * 2.0) / (config.icon_min + pad + config.label_width_reserve),
    );
    let max_rows = floor_count(
        (h - pad * 2.0 - config.header_reserve)
            / (config.icon_min + pad + config.label_height_reserve),
    );
    let max_projects = max_columns * max_rows;

    let title_rect = Rect::new(
        rect.x0 + pad,
        rect.y0 + pad,
        (rect.x1 - pad).max(rect.x0 + pad),
        rect.y0 + pad + config.panel_title_height,
    );

    let icon_size = if max_projects == 0 {
        config.icon_min
    } else {
        let (c, r) = (max_columns as f64, max_rows as f64);
        let by_width = ((w - pad * (c + 1.0)) / c).floor() - config.label_width_reserve;
        let by_height = ((h - pad * (r + 1.0) - config.header_reserve) / r).floor()
            - config.label_height_reserve;
        by_width.min(by_height).min(config.icon_max).max(config.icon_min)
    };

    let grid_x0 = rect.x0 + pad;
    let grid_y0 = title_rect.y1 + config.panel_title_margin;
    let grid_height = (rect.y1 - pad - grid_y0).max(0.0);
    let grid = AutoFill::new(
        w - pad * 2.0,
        icon_size + config.label_width_reserve,
        config.grid_gap,
    );

    let shown = category.len().min(max_projects);
    let rows = shown.div_ceil(grid.columns);
    let item_height = grid_item_height(icon_size, rows, grid_height, config);

    let items: Vec<ShareItem> = category
        .projects
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, project)| {
            let (row, col) = (i / grid.columns, i % grid.columns);
            let x = grid_x0 + grid.x(col);
            let y = grid_y0 + row as f64 * (item_height + config.grid_gap);
            let cell = Rect::new(x, y, x + grid.track, y + item_height);
            let ax = cell.center().x - icon_size / 2.0;
            let avatar = Rect::new(ax, y, ax + icon_size, y + icon_size);
            let name = Rect::new(x, avatar.y1, cell.x1, avatar.y1 + config.name_line_height);
            let ty = name.y1 + config.tagline_gap;
            let lines = floor_count((cell.y1 - ty) / config.tagline_line_height)
                .min(config.tagline_lines);
            let tagline = project
                .tagline
                .as_ref()
                .filter(|_| lines > 0)
                .map(|_| Rect::new(x, ty, cell.x1, ty + config.tagline_line_height * lines as f64));
            ShareItem {
                project: project.clone(),
                rect: cell,
                avatar,
                name,
                tagline,
            }
        })
        .collect();

    PanelLayout {
        key: key.to_owned(),
        title: category.title.clone(),
        color: category.color.clone(),
        rect,
        title_rect,
        icon_size,
        max_columns,
        max_rows,
        grid_columns: grid.columns,
        hidden_count: category.len() - items.len(),
        items,
    }
}

/// Height of one grid item when `rows` rows share `available` height.
///
/// Items get room for the name and every tagline line when that fits, and
/// shrink toward `icon + label_height_reserve` otherwise. As long as
/// `header_reserve` covers the panel title and its margin, the icon size
/// chosen for the panel lets `max_rows` compact rows fit.
fn grid_item_height(
    icon_size: f64,
    rows: usize,
    available: f64,
    config: &ShareConfig,
) -> f64 {
    let compact = icon_size + config.label_height_reserve;
    let full = icon_size
        + config.name_line_height
        + config.tagline_gap
        + config.tagline_line_height * config.tagline_lines as f64;
    if rows == 0 {
        return full;
    }
    let fits = (available + config.grid_gap) / rows as f64 - config.grid_gap;
    full.min(fits).max(compact)
}

fn floor_count(v: f64) -> usize {
    if v.is_finite() && v > 0.0 {
        v.floor() as usize
    } else {
        0
    }
}

/// Cached share preview that is rebuilt only when the set of shown categories changes.
#[derive(Clone, Debug, Default)]
pub struct SharePreview {
    config: ShareConfig,
    layout: Option<ShareLayout>,
    rebuilds: u64,
}

impl SharePreview {
    /// Create an empty preview; the first [`update`](Self::update) builds it.
    #[must_use]
    pub fn new(config: ShareConfig) -> Self {
        Self {
            config,
            layout: None,
            rebuilds: 0,
        }
    }

    /// Recompute the shown keys and rebuild the layout if they changed.
    ///
    /// Returns `true` when a rebuild happened. A rebuild replaces every panel.
    pub fn update(
        &mut self,
        categories: &CategorizedProjects,
        visibility: &VisibilitySelection,
    ) -> bool {
        let keys = visible_keys(categories, visibility);
        if let Some(layout) = &self.layout
            && layout.keys == keys
        {
            return false;
        }
        self.layout = Some(layout_keys(categories, keys, &self.config));
        self.rebuilds += 1;
        true
    }

    /// The current layout, if any update has run.
    #[must_use]
    pub fn layout(&self) -> Option<&ShareLayout> {
        self.layout.as_ref()
    }

    /// Number of rebuilds so far.
    #[must_use]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ShareConfig {
        &self.config
    }
}
