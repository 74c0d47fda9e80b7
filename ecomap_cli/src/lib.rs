// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_cli --heading-base-level=0

//! Ecomap CLI: the application shell behind the `ecomap` binary.
//!
//! [`App`] ties the pieces together: it starts one catalog load, categorizes
//! the result, tracks the selected category, and builds the index page scene
//! for whatever state it is in. Pointer input goes through [`App::click`],
//! which hit tests the current page and selects the card under the pointer.
//!
//! ```rust
//! use std::time::Instant;
//!
//! use ecomap_catalog::RawProjectsResponse;
//! use ecomap_cli::{App, AppConfig};
//! use ecomap_fetch::{CatalogSource, FetchError};
//!
//! struct Inline;
//! impl CatalogSource for Inline {
//!     fn describe(&self) -> String {
//!         "inline".into()
//!     }
//!     fn fetch(&self) -> Result<RawProjectsResponse, FetchError> {
//!         Ok(RawProjectsResponse::from_json_str(
//!             r#"[{"profile": {"name": "Meteor", "tags": {"wallet": "Wallet"}}}]"#,
//!         )?)
//!     }
//! }
//!
//! let mut app = App::new(AppConfig::default());
//! app.start(Inline);
//! app.block();
//! app.select("wallets", Instant::now());
//! assert_eq!(app.selected(), Some("wallets"));
//! assert!(app.toasts().is_empty());
//! ```

mod app;
pub mod cli;
mod selection;
mod toast;

pub use app::{App, AppConfig, SELECTION_FAILED};
pub use selection::Selection;
pub use toast::Toasts;
