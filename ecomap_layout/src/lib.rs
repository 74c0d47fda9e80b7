// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_layout --heading-base-level=0

//! Ecomap Layout: geometry for the views of an ecosystem map.
//!
//! Three layouts, all pure functions of categorized data plus a config whose
//! `Default` holds the fixed page constants:
//!
//! - [`masonry`]: the index page, one card per category in responsive columns.
//! - [`detail`]: the full project grid of the selected category.
//! - [`share`]: the fixed-size share preview, a treemap of visible categories
//!   with an icon grid in each panel.
//!
//! Layouts only compute rectangles. Turning them into something drawable is
//! the job of the view layer.
//!
//! ```rust
//! use ecomap_catalog::{CategorizedProjects, Category, Project, VisibilitySelection};
//! use ecomap_layout::share::{ShareConfig, layout_share_preview};
//!
//! let cats: CategorizedProjects = [(
//!     "wallets",
//!     Category::new("Wallets", "blue").with_projects([Project::new("Meteor")]),
//! )]
//! .into_iter()
//! .collect();
//! let visible = VisibilitySelection::all_visible(&cats);
//!
//! let layout = layout_share_preview(&cats, &visible, &ShareConfig::default());
//! assert_eq!(layout.panels.len(), 1);
//! assert_eq!(layout.panels[0].items[0].project.name, "Meteor");
//! ```

mod grid;

pub mod detail;
pub mod masonry;
pub mod share;

pub use detail::{DetailConfig, DetailLayout, layout_detail};
pub use masonry::{Breakpoints, MasonryConfig, MasonryLayout, Packing, layout_cards};
pub use share::{ShareConfig, ShareLayout, SharePreview, layout_share_preview};
