// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Application state: one catalog load, the categorized result, the selected
//! category, and pending notifications.

use std::time::Instant;

use ecomap_catalog::{
    Categorization, CatalogSchema, CategorizedProjects, RawProjectsResponse, VisibilitySelection,
    categorize,
};
use ecomap_fetch::{CatalogSource, LoadState, Loader};
use ecomap_layout::{ShareConfig, ShareLayout, layout_share_preview};
use ecomap_scene::Scene;
use ecomap_view::{IndexModel, IndexState, IndexView, Toast, card_key};
use kurbo::{Point, Size};

use crate::selection::Selection;
use crate::toast::Toasts;

/// Message shown when a selected category cannot be displayed.
pub const SELECTION_FAILED: &str = "Failed to load category details. Please try again.";

/// Settings of an [`App`].
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Page heading.
    pub title: String,
    /// Viewport of the index page.
    pub viewport: Size,
    /// How records become categories.
    pub schema: CatalogSchema,
    /// Index page layout and colors.
    pub view: IndexView,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: ecomap_layout::share::DEFAULT_TITLE.to_owned(),
            viewport: Size::new(1280.0, 900.0),
            schema: CatalogSchema::default(),
            view: IndexView::default(),
        }
    }
}

/// The application state machine.
///
/// The catalog is fetched once. While the fetch is in flight the index page
/// shows a spinner; a failure shows the error page for good, with no retry.
/// Once categories are available, clicking a card selects its category and the
/// detail grid follows the selection.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    loader: Loader,
    categorization: Option<Categorization>,
    selection: Selection<String>,
    toasts: Toasts,
}

impl App {
    /// An idle app.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            loader: Loader::new(),
            categorization: None,
            selection: Selection::new(),
            toasts: Toasts::default(),
        }
    }

    /// Start loading the catalog from `source`.
    pub fn start<S>(&mut self, source: S)
    where
        S: CatalogSource + Send + 'static,
    {
        self.loader.start(source);
    }

    /// Pick up a finished load without blocking. Returns `true` on change.
    pub fn poll(&mut self) -> bool {
        let changed = self.loader.poll();
        if changed {
            self.loaded();
        }
        changed
    }

    /// Wait for the load to finish. Returns `true` on change.
    pub fn block(&mut self) -> bool {
        let changed = self.loader.block();
        if changed {
            self.loaded();
        }
        changed
    }

    fn loaded(&mut self) {
        if let LoadState::Success(raw) = self.loader.state() {
            let categorization = categorize(raw, &self.config.schema);
            tracing::info!(
                categories = categorization.projects.len(),
                projects = categorization.projects.total_projects(),
                skipped = categorization.skipped.len(),
                unmatched = categorization.unmatched,
                "catalog categorized"
            );
            self.categorization = Some(categorization);
        }
    }

    /// The load state.
    #[must_use]
    pub fn load_state(&self) -> &LoadState<RawProjectsResponse> {
        self.loader.state()
    }

    /// The full categorizer output, once loaded.
    #[must_use]
    pub fn categorization(&self) -> Option<&Categorization> {
        self.categorization.as_ref()
    }

    /// Categories, once loaded.
    #[must_use]
    pub fn categories(&self) -> Option<&CategorizedProjects> {
        self.categorization.as_ref().map(|c| &c.projects)
    }

    /// Swap in a transformed copy of the categories, such as one with
    /// unreachable images removed.
    pub fn replace_categories(&mut self, projects: CategorizedProjects) {
        if let Some(categorization) = &mut self.categorization {
            categorization.projects = projects;
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Select the category `key`.
    ///
    /// The selection is set even when `key` is unknown; in that case a
    /// warning is logged, a toast is queued, and the detail grid stays empty.
    pub fn select(&mut self, key: &str, now: Instant) {
        let known = self.categories().is_some_and(|c| c.contains_key(key));
        if !known {
            tracing::warn!(key, "selected category is not in the catalog");
            self.toasts.push(
                Toast {
                    title: "Error".to_owned(),
                    description: SELECTION_FAILED.to_owned(),
                },
                now,
            );
        }
        self.selection.select(key.to_owned());
    }

    /// The selected category key.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selection.get().map(String::as_str)
    }

    /// Selection revision, bumped on every change of the selected key.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection.revision()
    }

    /// Handle a click on the index page at `point`.
    ///
    /// Returns the key of the category whose card was hit, if any.
    pub fn click(&mut self, point: Point, now: Instant) -> Option<String> {
        let scene = self.index_scene();
        let key = scene.hit_test(point).and_then(card_key)?.to_owned();
        tracing::debug!(key = %key, x = point.x, y = point.y, "card clicked");
        self.select(&key, now);
        Some(key)
    }

    /// Expire old toasts.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }

    /// Active toasts.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        self.toasts.active()
    }

    /// The index page for the current state.
    #[must_use]
    pub fn index_scene(&self) -> Scene {
        let state = match (self.loader.state(), self.categories()) {
            (LoadState::Error(_), _) => IndexState::Error,
            (_, Some(categories)) => IndexState::Ready {
                categories,
                selected: self.selected(),
            },
            _ => IndexState::Loading,
        };
        self.config.view.scene(&IndexModel {
            title: &self.config.title,
            viewport: self.config.viewport,
            state,
            toasts: self.toasts.active(),
        })
    }

    /// The share preview of the visible categories.
    ///
    /// Before the catalog is loaded, or when it failed, the preview is empty.
    #[must_use]
    pub fn share_layout(
        &self,
        visibility: &VisibilitySelection,
        config: &ShareConfig,
    ) -> ShareLayout {
        let empty = CategorizedProjects::new();
        let categories = self.categories().unwrap_or(&empty);
        layout_share_preview(categories, visibility, config)
    }
}
