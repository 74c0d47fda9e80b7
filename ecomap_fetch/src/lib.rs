// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_fetch --heading-base-level=0

//! Ecomap Fetch: getting a catalog response without blocking the caller.
//!
//! - [`CatalogSource`] abstracts where the catalog comes from. [`HttpSource`]
//!   issues one GET (non-success statuses are errors), [`FileSource`] reads a
//!   JSON file, and [`source_for`] picks one from a user-supplied location.
//! - [`Loader`] runs a source on a worker thread and reports
//!   [`LoadState`]: `Idle`, `Loading`, `Success`, or `Error`. There are no
//!   retries and no cancellation.
//! - [`ImageProbe`] optionally checks image URLs so broken images can be
//!   replaced by a placeholder before rendering.

mod images;
mod loader;
mod source;

pub use images::{ImageProbe, resolve_images};
pub use loader::{LoadState, Loader};
pub use source::{CatalogSource, DEFAULT_ENDPOINT, FetchError, FileSource, HttpSource, source_for};
