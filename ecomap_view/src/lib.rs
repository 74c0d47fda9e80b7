// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_view --heading-base-level=0

//! Ecomap View: turn layouts into scenes.
//!
//! - [`index_scene`] draws the index page for a loading, error, or ready
//!   state, plus any active [`Toast`]s.
//! - [`share_scene`] draws a [`ShareLayout`](ecomap_layout::ShareLayout).
//! - [`Theme`] holds the page colors and resolves category color tokens.
//!
//! Cards are pickable groups whose id is [`card_id`] of the category key, so a
//! pointer position can be mapped back to a category with
//! [`Scene::hit_test`](ecomap_scene::Scene::hit_test) and [`card_key`].
//!
//! ```rust
//! use ecomap_catalog::{CategorizedProjects, Category, Project};
//! use ecomap_view::{IndexModel, IndexState, card_key, index_scene};
//! use kurbo::Size;
//!
//! let cats: CategorizedProjects = [(
//!     "defi",
//!     Category::new("DeFi", "emerald").with_projects([Project::new("Ref Finance")]),
//! )]
//! .into_iter()
//! .collect();
//! let scene = index_scene(&IndexModel {
//!     title: "Ecosystem",
//!     viewport: Size::new(1280.0, 800.0),
//!     state: IndexState::Ready { categories: &cats, selected: None },
//!     toasts: &[],
//! });
//!
//! let card = scene.find_group("card:defi").unwrap();
//! let hit = scene.hit_test(card.bounds.center()).and_then(card_key);
//! assert_eq!(hit, Some("defi"));
//! ```

mod index;
mod share;
mod theme;

pub use index::{
    CARD_ID_PREFIX, ERROR_MESSAGE, ERROR_TITLE, IndexModel, IndexState, IndexView, Toast, card_id,
    card_key, index_scene,
};
pub use share::{share_scene, share_scene_with};
pub use theme::{DEFAULT_PLACEHOLDER, Theme};
