// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use ecomap_catalog::{CategorizedProjects, VisibilitySelection};
use ecomap_fetch::DEFAULT_ENDPOINT;
use ecomap_layout::share::DEFAULT_TITLE;

/// Render an ecosystem map of a project catalog to SVG.
#[derive(Debug, Parser)]
#[command(name = "ecomap", version, about)]
pub struct Cli {
    /// Catalog endpoint URL, or a path to a JSON file with the same content.
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub source: String,

    /// TOML file describing record fields and category rules.
    #[arg(long, global = true)]
    pub schema: Option<PathBuf>,

    /// Page heading.
    #[arg(long, global = true, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Request every project image once and use the placeholder for failures.
    #[arg(long, global = true)]
    pub check_images: bool,

    /// Exit with an error status when the catalog cannot be loaded.
    ///
    /// The error page is still written.
    #[arg(long, global = true)]
    pub fail_on_error: bool,

    /// More logging; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// What to render.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the index page: category cards and, with `--select`, a detail grid.
    Index {
        /// Viewport width, which picks the number of card columns.
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        /// Viewport height; the page grows past it as needed.
        #[arg(long, default_value_t = 900.0)]
        height: f64,
        /// Category key to select.
        #[arg(long)]
        select: Option<String>,
        /// Output file.
        #[arg(short, long, default_value = "index.svg")]
        output: PathBuf,
    },
    /// Render the 3840×2160 share preview.
    Share {
        /// Only show these category keys (comma separated or repeated).
        #[arg(long, value_delimiter = ',')]
        show: Vec<String>,
        /// Hide these category keys.
        #[arg(long, value_delimiter = ',')]
        hide: Vec<String>,
        /// Start from every category visible, even when `--show` is given.
        #[arg(long)]
        all: bool,
        /// Output file.
        #[arg(short, long, default_value = "share.svg")]
        output: PathBuf,
    },
    /// List categories and their project counts.
    Categories,
}

/// Build the share visibility mask from `--show`, `--hide`, and `--all`.
///
/// Without `--show` (or with `--all`) every category starts visible. Listed
/// `--show` keys are turned on, then `--hide` keys are turned off.
#[must_use]
pub fn visibility_from(
    categories: &CategorizedProjects,
    show: &[String],
    hide: &[String],
    all: bool,
) -> VisibilitySelection {
    let mut visibility = if all || show.is_empty() {
        VisibilitySelection::all_visible(categories)
    } else {
        VisibilitySelection::new()
    };
    for key in show {
        if !categories.contains_key(key) {
            tracing::warn!(key = %key, "--show names an unknown category");
        }
        visibility.show(key.clone());
    }
    for key in hide {
        visibility.hide(key.clone());
    }
    visibility
}

/// Log filter for a `-v` count.
#[must_use]
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
