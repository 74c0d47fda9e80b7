// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category cards in a responsive masonry of columns.

use ecomap_catalog::{CategorizedProjects, ColorToken, Project};
use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// One step of the breakpoint table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Breakpoint {
    /// Largest viewport width this step applies to.
    pub max_width: f64,
    /// Column count at or below `max_width`.
    pub columns: usize,
}

/// Viewport width to column count.
///
/// The smallest breakpoint whose `max_width` is at least the viewport width
/// wins; wider viewports get `default_columns`.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    steps: Vec<Breakpoint>,
    default_columns: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(5, [(500.0, 1), (700.0, 2), (1100.0, 3), (1400.0, 4)])
    }
}

impl Breakpoints {
    /// Build a table from `(max_width, columns)` pairs in any order.
    ///
    /// Column counts of zero are raised to one.
    #[must_use]
    pub fn new(default_columns: usize, steps: impl IntoIterator<Item = (f64, usize)>) -> Self {
        let mut steps: Vec<Breakpoint> = steps
            .into_iter()
            .map(|(max_width, columns)| Breakpoint {
                max_width,
                columns: columns.max(1),
            })
            .collect();
        steps.sort_by(|a, b| a.max_width.total_cmp(&b.max_width));
        Self {
            steps,
            default_columns: default_columns.max(1),
        }
    }

    /// Column count for a viewport `width`.
    #[must_use]
    pub fn columns_for(&self, width: f64) -> usize {
        self.steps
            .iter()
            .find(|step| width <= step.max_width)
            .map_or(self.default_columns, |step| step.columns)
    }

    /// The steps, narrowest first.
    #[must_use]
    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }
}

/// How cards are distributed over columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Packing {
    /// Card `i` goes to column `i % columns`.
    #[default]
    RoundRobin,
    /// Each card goes to the currently shortest column (leftmost on ties).
    ShortestColumn,
}

/// Geometry of the index page and its cards.
#[derive(Clone, Debug, PartialEq)]
pub struct MasonryConfig {
    /// Viewport width to column count.
    pub breakpoints: Breakpoints,
    /// Column assignment strategy.
    pub packing: Packing,
    /// Maximum width of the content column, excluding page padding.
    pub max_content_width: f64,
    /// Padding around the page content.
    pub page_padding: f64,
    /// Height of the page heading.
    pub heading_height: f64,
    /// Space between the heading and the first card.
    pub heading_margin: f64,
    /// Horizontal gap between columns.
    pub gutter: f64,
    /// Vertical gap between cards in a column.
    pub card_gap: f64,
    /// Inner padding of a card.
    pub card_padding: f64,
    /// Height of the card title line.
    pub card_title_height: f64,
    /// Space below the card title.
    pub card_title_margin: f64,
    /// Number of project icons previewed on a card.
    pub preview_count: usize,
    /// Columns of the preview grid.
    pub preview_columns: usize,
    /// Gap between preview items.
    pub preview_gap: f64,
    /// Inner padding of a preview item.
    pub preview_padding: f64,
    /// Preview icon edge length.
    pub icon_size: f64,
    /// Space between a preview icon and its label.
    pub label_gap: f64,
    /// Line height of preview labels.
    pub label_line_height: f64,
    /// Maximum lines of a preview label.
    pub label_lines: usize,
    /// Minimum height of a preview item.
    pub preview_min_height: f64,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            packing: Packing::RoundRobin,
            max_content_width: 1800.0,
            page_padding: 32.0,
            heading_height: 40.0,
            heading_margin: 32.0,
            gutter: 24.0,
            card_gap: 24.0,
            card_padding: 24.0,
            card_title_height: 32.0,
            card_title_margin: 16.0,
            preview_count: 4,
            preview_columns: 2,
            preview_gap: 16.0,
            preview_padding: 8.0,
            icon_size: 48.0,
            label_gap: 8.0,
            label_line_height: 20.0,
            label_lines: 2,
            preview_min_height: 100.0,
        }
    }
}

impl MasonryConfig {
    fn preview_item_height(&self) -> f64 {
        let natural = self.preview_padding * 2.0
            + self.icon_size
            + self.label_gap
            + self.label_line_height * self.label_lines as f64;
        natural.max(self.preview_min_height)
    }
}

/// A previewed project on a card.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewIcon {
    /// The project shown.
    pub project: Project,
    /// Whole preview cell.
    pub cell: Rect,
    /// Icon square, centered horizontally in the cell.
    pub icon: Rect,
    /// Label box below the icon.
    pub label: Rect,
}

/// One positioned category card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    /// Category key, used as the card's pick id.
    pub key: String,
    /// Category title.
    pub title: String,
    /// Category color token.
    pub color: ColorToken,
    /// Column the card was placed in.
    pub column: usize,
    /// Card bounds in page coordinates.
    pub rect: Rect,
    /// Title line.
    pub title_rect: Rect,
    /// The first few projects of the category.
    pub preview: SmallVec<[PreviewIcon; 4]>,
}

/// Positioned cards and page frame.
#[derive(Clone, Debug, PartialEq)]
pub struct MasonryLayout {
    /// Viewport width the layout was computed for.
    pub viewport_width: f64,
    /// Card area: the content column below the heading, down to the tallest column.
    pub content: Rect,
    /// Page heading line.
    pub heading: Rect,
    /// Number of columns.
    pub columns: usize,
    /// Width of each column.
    pub column_width: f64,
    /// Cards in category order.
    pub cards: Vec<CardLayout>,
    /// Bottom of the tallest column plus page padding.
    pub height: f64,
}

impl MasonryLayout {
    /// The card at `point`, if any.
    #[must_use]
    pub fn card_at(&self, point: Point) -> Option<&CardLayout> {
        self.cards.iter().find(|c| c.rect.contains(point))
    }
}

/// Lay the categories out as cards for a viewport `width`.
///
/// Categories keep their insertion order; empty categories still get a card.
#[must_use]
pub fn layout_cards(
    categories: &CategorizedProjects,
    width: f64,
    config: &MasonryConfig,
) -> MasonryLayout {
    let pad = config.page_padding;
    let outer = width.max(0.0).min(config.max_content_width + 2.0 * pad);
    let x0 = ((width.max(0.0) - outer) / 2.0).max(0.0) + pad;
    let content_width = (outer - 2.0 * pad).max(0.0);

    let heading = Rect::new(x0, pad, x0 + content_width, pad + config.heading_height);
    let top = heading.y1 + config.heading_margin;

    let columns = config.breakpoints.columns_for(width);
    let column_width =
        ((content_width - config.gutter * (columns - 1) as f64) / columns as f64).max(0.0);

    let mut bottoms = vec![top; columns];
    let mut filled = vec![false; columns];
    let mut cards = Vec::with_capacity(categories.len());

    for (i, (key, category)) in categories.iter().enumerate() {
        let column = match config.packing {
            Packing::RoundRobin => i % columns,
            Packing::ShortestColumn => shortest(&bottoms),
        };
        let x = x0 + column as f64 * (column_width + config.gutter);
        let y = if filled[column] {
            bottoms[column] + config.card_gap
        } else {
            bottoms[column]
        };

        let card = layout_card(key, category, Point::new(x, y), column_width, config, column);
        bottoms[column] = card.rect.y1;
        filled[column] = true;
        cards.push(card);
    }

    let tallest = bottoms.iter().copied().fold(top, f64::max);
    MasonryLayout {
        viewport_width: width,
        content: Rect::new(x0, top, x0 + content_width, tallest),
        heading,
        columns,
        column_width,
        cards,
        height: tallest + pad,
    }
}

fn shortest(bottoms: &[f64]) -> usize {
    let mut best = 0;
    for (i, b) in bottoms.iter().enumerate() {
        if *b < bottoms[best] {
            best = i;
        }
    }
    best
}

fn layout_card(
    key: &str,
    category: &ecomap_catalog::Category,
    origin: Point,
    width: f64,
    config: &MasonryConfig,
    column: usize,
) -> CardLayout {
    let pad = config.card_padding;
    let inner_x0 = origin.x + pad;
    let inner_width = (width - 2.0 * pad).max(0.0);
    let title_rect = Rect::new(
        inner_x0,
        origin.y + pad,
        inner_x0 + inner_width,
        origin.y + pad + config.card_title_height,
    );

    let cols = config.preview_columns.max(1);
    let cell_width =
        ((inner_width - config.preview_gap * (cols - 1) as f64) / cols as f64).max(0.0);
    let cell_height = config.preview_item_height();
    let grid_top = title_rect.y1 + config.card_title_margin;

    let preview: SmallVec<[PreviewIcon; 4]> = category
        .projects
        .iter()
        .take(config.preview_count)
        .enumerate()
        .map(|(i, project)| {
            let (row, col) = (i / cols, i % cols);
            let cx = inner_x0 + col as f64 * (cell_width + config.preview_gap);
            let cy = grid_top + row as f64 * (cell_height + config.preview_gap);
            let cell = Rect::new(cx, cy, cx + cell_width, cy + cell_height);
            let icon_x = cell.center().x - config.icon_size / 2.0;
            let icon_y = cy + config.preview_padding;
            let icon = Rect::new(
                icon_x,
                icon_y,
                icon_x + config.icon_size,
                icon_y + config.icon_size,
            );
            let label_y = icon.y1 + config.label_gap;
            let label = Rect::new(
                cx + config.preview_padding,
                label_y,
                cell.x1 - config.preview_padding,
                label_y + config.label_line_height * config.label_lines as f64,
            );
            PreviewIcon {
                project: project.clone(),
                cell,
                icon,
                label,
            }
        })
        .collect();

    let rows = preview.len().div_ceil(cols);
    let grid_height = if rows == 0 {
        0.0
    } else {
        config.card_title_margin
            + rows as f64 * cell_height
            + (rows - 1) as f64 * config.preview_gap
    };
    let height = pad + config.card_title_height + grid_height + pad;

    CardLayout {
        key: key.to_owned(),
        title: category.title.clone(),
        color: category.color.clone(),
        column,
        rect: Rect::new(origin.x, origin.y, origin.x + width, origin.y + height),
        title_rect,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecomap_catalog::Category;

    fn cats(sizes: &[usize]) -> CategorizedProjects {
        sizes
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let projects = (0..*n).map(|j| Project::new(format!("p{i}-{j}")));
                (format!("c{i}"), Category::new(format!("C{i}"), "blue").with_projects(projects))
            })
            .collect()
    }

    #[test]
    fn breakpoint_table_matches_masonry_semantics() {
        let bp = Breakpoints::default();
        assert_eq!(bp.columns_for(320.0), 1);
        assert_eq!(bp.columns_for(500.0), 1);
        assert_eq!(bp.columns_for(501.0), 2);
        assert_eq!(bp.columns_for(700.0), 2);
        assert_eq!(bp.columns_for(1024.0), 3);
        assert_eq!(bp.columns_for(1100.0), 3);
        assert_eq!(bp.columns_for(1280.0), 4);
        assert_eq!(bp.columns_for(1400.0), 4);
        assert_eq!(bp.columns_for(1920.0), 5);
    }

    #[test]
    fn round_robin_assigns_columns_by_index() {
        let layout = layout_cards(&cats(&[1, 4, 0, 2, 3, 1, 0]), 1280.0, &MasonryConfig::default());
        assert_eq!(layout.columns, 4);
        let columns: Vec<usize> = layout.cards.iter().map(|c| c.column).collect();
        assert_eq!(columns, [0, 1, 2, 3, 0, 1, 2]);
        // Card 4 sits below card 0 with the configured gap.
        assert_eq!(layout.cards[4].rect.y0, layout.cards[0].rect.y1 + 24.0);
    }

    #[test]
    fn shortest_column_fills_gaps() {
        let config = MasonryConfig {
            packing: Packing::ShortestColumn,
            ..MasonryConfig::default()
        };
        // 600 px wide: two columns. The tall first card pushes the next two
        // cards into the right column.
        let layout = layout_cards(&cats(&[4, 0, 0]), 600.0, &config);
        let columns: Vec<usize> = layout.cards.iter().map(|c| c.column).collect();
        assert_eq!(columns, [0, 1, 1]);
    }

    #[test]
    fn cards_preview_at_most_four_icons() {
        let layout = layout_cards(&cats(&[9, 3, 0]), 1920.0, &MasonryConfig::default());
        let counts: Vec<usize> = layout.cards.iter().map(|c| c.preview.len()).collect();
        assert_eq!(counts, [4, 3, 0]);
        assert_eq!(layout.cards[0].preview[3].project.name, "p0-3");
        // Three or four previews both take two rows.
        assert!(layout.cards[0].rect.height() > layout.cards[2].rect.height());
        assert_eq!(layout.cards[1].rect.height(), layout.cards[0].rect.height());
    }

    #[test]
    fn content_is_centered_and_capped() {
        let layout = layout_cards(&cats(&[1]), 2400.0, &MasonryConfig::default());
        assert_eq!(layout.content.width(), 1800.0);
        assert_eq!(layout.content.x0, 300.0);
        assert_eq!(layout.heading.y0, 32.0);
        assert_eq!(layout.cards[0].rect.y0, 32.0 + 40.0 + 32.0);
    }

    #[test]
    fn card_at_finds_the_card_under_a_point() {
        let layout = layout_cards(&cats(&[2, 2]), 1280.0, &MasonryConfig::default());
        let second = &layout.cards[1];
        assert_eq!(layout.card_at(second.rect.center()).map(|c| c.key.as_str()), Some("c1"));
        assert!(layout.card_at(Point::new(1.0, 1.0)).is_none());
    }
}
