// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The index page: loading, error, or category cards with an optional detail grid.

use ecomap_catalog::CategorizedProjects;
use ecomap_layout::detail::{DetailLayout, layout_detail};
use ecomap_layout::masonry::{CardLayout, layout_cards};
use ecomap_layout::{DetailConfig, MasonryConfig};
use ecomap_scene::{
    CircleNode, FontWeight, Group, ImageNode, ImageShape, Node, RectNode, Scene, Stroke,
    TextAlign, TextNode, TextStyle,
};
use kurbo::{Point, Rect};

use crate::theme::Theme;

/// Heading of the error page.
pub const ERROR_TITLE: &str = "Error Loading Projects";
/// Body of the error page.
pub const ERROR_MESSAGE: &str = "Please try again later";

/// Prefix of card group ids; the rest of the id is the category key.
pub const CARD_ID_PREFIX: &str = "card:";

/// What the page shows.
#[derive(Copy, Clone, Debug)]
pub enum IndexState<'a> {
    /// The catalog request is in flight.
    Loading,
    /// The catalog request failed.
    Error,
    /// Categories are available.
    Ready {
        /// All categories, in card order.
        categories: &'a CategorizedProjects,
        /// Key of the selected category, if any.
        selected: Option<&'a str>,
    },
}

/// A transient notification drawn over the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Short heading.
    pub title: String,
    /// Message.
    pub description: String,
}

/// Everything the index page depends on.
#[derive(Copy, Clone, Debug)]
pub struct IndexModel<'a> {
    /// Page heading.
    pub title: &'a str,
    /// Viewport size.
    pub viewport: kurbo::Size,
    /// Page state.
    pub state: IndexState<'a>,
    /// Active notifications, oldest first.
    pub toasts: &'a [Toast],
}

/// Configuration of the index page.
#[derive(Clone, Debug, Default)]
pub struct IndexView {
    /// Card layout.
    pub masonry: MasonryConfig,
    /// Detail grid layout.
    pub detail: DetailConfig,
    /// Colors.
    pub theme: Theme,
}

/// Group id of the card for `key`.
#[must_use]
pub fn card_id(key: &str) -> String {
    format!("{CARD_ID_PREFIX}{key}")
}

/// Category key of a card group id.
#[must_use]
pub fn card_key(id: &str) -> Option<&str> {
    id.strip_prefix(CARD_ID_PREFIX)
}

/// Build the index page with the default configuration.
#[must_use]
pub fn index_scene(model: &IndexModel<'_>) -> Scene {
    IndexView::default().scene(model)
}

impl IndexView {
    /// Build the index page.
    #[must_use]
    pub fn scene(&self, model: &IndexModel<'_>) -> Scene {
        let size = model.viewport;
        let mut scene = match model.state {
            IndexState::Loading => self.loading(size.width, size.height),
            IndexState::Error => self.error(size.width, size.height),
            IndexState::Ready {
                categories,
                selected,
            } => self.ready(model.title, size.width, size.height, categories, selected),
        };
        self.toasts(&mut scene, model.toasts, size.width);
        scene
    }

    fn loading(&self, width: f64, height: f64) -> Scene {
        let mut scene = Scene::new(width, height, self.theme.page_background);
        let radius = 64.0;
        let quarter = core::f64::consts::PI * radius / 2.0;
        scene.push(
            Group::new(scene.bounds()).with_id("loading").with(CircleNode {
                center: Point::new(width / 2.0, height / 2.0),
                radius,
                fill: None,
                stroke: Some(Stroke::solid(self.theme.text, 2.0).dashed(quarter, quarter)),
            }),
        );
        scene
    }

    fn error(&self, width: f64, height: f64) -> Scene {
        let mut scene = Scene::new(width, height, self.theme.page_background);
        let cx = width / 2.0;
        let top = height / 2.0 - 38.0;
        let heading = TextStyle::new(24.0, self.theme.text)
            .weight(FontWeight::Bold)
            .line_height(32.0)
            .align(TextAlign::Middle);
        let body = TextStyle::new(16.0, self.theme.error_text)
            .line_height(24.0)
            .align(TextAlign::Middle);
        scene.push(
            Group::new(scene.bounds())
                .with_id("error")
                .with(TextNode::line(Point::new(cx, top), ERROR_TITLE, heading))
                .with(TextNode::line(Point::new(cx, top + 48.0), ERROR_MESSAGE, body)),
        );
        scene
    }

    fn ready(
        &self,
        title: &str,
        width: f64,
        height: f64,
        categories: &CategorizedProjects,
        selected: Option<&str>,
    ) -> Scene {
        let masonry = layout_cards(categories, width, &self.masonry);
        let detail = selected.and_then(|key| {
            categories.get(key).map(|category| {
                layout_detail(
                    key,
                    category,
                    Point::new(masonry.content.x0, masonry.content.y1),
                    masonry.content.width(),
                    &self.detail,
                )
            })
        });

        let bottom = detail
            .as_ref()
            .map_or(masonry.height, |d| d.bounds.y1 + self.masonry.page_padding);
        let mut scene = Scene::new(width, bottom.max(height), self.theme.page_background);

        let heading = TextStyle::new(36.0, self.theme.text)
            .weight(FontWeight::Bold)
            .line_height(masonry.heading.height())
            .align(TextAlign::Middle);
        scene.push(TextNode::line(
            Point::new(masonry.heading.center().x, masonry.heading.y0),
            title,
            heading,
        ));

        let mut cards = Group::new(masonry.content).with_id("cards");
        for card in &masonry.cards {
            cards.push(self.card(card));
        }
        scene.push(cards);

        if let Some(detail) = &detail {
            scene.push(self.detail(detail));
        }
        scene
    }

    fn card(&self, card: &CardLayout) -> Group {
        let label = TextStyle::new(14.0, self.theme.text)
            .line_height(self.masonry.label_line_height)
            .align(TextAlign::Middle);
        let title = TextStyle::new(24.0, self.theme.text)
            .weight(FontWeight::Bold)
            .line_height(card.title_rect.height());

        let mut group = Group::new(card.rect)
            .with_id(card_id(&card.key))
            .pickable()
            .with(RectNode::filled(card.rect, self.theme.color_for(&card.color)).rounded(8.0))
            .with(TextNode::clamped(
                card.title_rect.origin(),
                &card.title,
                title,
                card.title_rect.width(),
                1,
            ));

        for icon in &card.preview {
            let c = icon.icon.center();
            group.push(CircleNode {
                center: c,
                radius: icon.icon.width() / 2.0,
                fill: Some(self.theme.icon_backdrop),
                stroke: None,
            });
            group.push(self.image(
                icon.icon.inset(-4.0),
                icon.project.image.as_deref(),
                &icon.project.name,
            ));
            group.push(TextNode::clamped(
                Point::new(icon.label.center().x, icon.label.y0),
                &icon.project.name,
                label,
                icon.label.width(),
                self.masonry.label_lines,
            ));
        }
        group
    }

    fn detail(&self, detail: &DetailLayout) -> Group {
        let heading = TextStyle::new(28.0, self.theme.text)
            .weight(FontWeight::Bold)
            .line_height(detail.heading.height());
        let name = TextStyle::new(16.0, self.theme.text)
            .weight(FontWeight::SemiBold)
            .line_height(self.detail.name_line_height)
            .align(TextAlign::Middle);
        let tagline = TextStyle::new(14.0, self.theme.muted_text)
            .line_height(self.detail.tagline_line_height)
            .align(TextAlign::Middle);

        let mut group = Group::new(detail.bounds)
            .with_id(format!("detail:{}", detail.key))
            .with(TextNode::line(detail.heading.origin(), detail.title.clone(), heading));

        for item in &detail.items {
            let mut tile = Group::new(item.rect)
                .clipped()
                .with(RectNode::filled(item.rect, self.theme.tile).rounded(8.0))
                .with(self.image(item.icon, item.project.image.as_deref(), &item.project.name))
                .with(TextNode::clamped(
                    Point::new(item.name.center().x, item.name.y0),
                    &item.project.name,
                    name,
                    item.name.width(),
                    1,
                ));
            if let (Some(rect), Some(text)) = (item.tagline, item.project.tagline.as_deref()) {
                tile.push(TextNode::clamped(
                    Point::new(rect.center().x, rect.y0),
                    text,
                    tagline,
                    rect.width(),
                    self.detail.tagline_lines,
                ));
            }
            group.push(tile);
        }
        group
    }

    fn image(&self, rect: Rect, href: Option<&str>, alt: &str) -> Node {
        ImageNode {
            rect,
            href: href.map(str::to_owned),
            placeholder: self.theme.placeholder.clone(),
            shape: ImageShape::Circle,
            alt: alt.to_owned(),
        }
        .into()
    }

    fn toasts(&self, scene: &mut Scene, toasts: &[Toast], width: f64) {
        const WIDTH: f64 = 360.0;
        const HEIGHT: f64 = 92.0;
        const MARGIN: f64 = 16.0;
        let title = TextStyle::new(14.0, self.theme.text)
            .weight(FontWeight::SemiBold)
            .line_height(20.0);
        let body = TextStyle::new(14.0, self.theme.text).line_height(20.0);

        let x0 = (width - MARGIN - WIDTH).max(0.0);
        for (i, toast) in toasts.iter().enumerate() {
            let y0 = MARGIN + i as f64 * (HEIGHT + 8.0);
            let rect = Rect::new(x0, y0, x0 + WIDTH, y0 + HEIGHT);
            scene.push(
                Group::new(rect)
                    .with_id(format!("toast:{i}"))
                    .with(RectNode::filled(rect, self.theme.toast).rounded(6.0))
                    .with(TextNode::line(
                        Point::new(rect.x0 + 16.0, rect.y0 + 12.0),
                        toast.title.clone(),
                        title,
                    ))
                    .with(TextNode::clamped(
                        Point::new(rect.x0 + 16.0, rect.y0 + 32.0),
                        &toast.description,
                        body,
                        WIDTH - 32.0,
                        2,
                    )),
            );
        }
    }
}
