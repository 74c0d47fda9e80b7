// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `ecomap`: render an ecosystem map of a project catalog to SVG.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use ecomap_catalog::{CatalogSchema, CategorizedProjects};
use ecomap_cli::cli::{Cli, Command, default_filter, visibility_from};
use ecomap_cli::{App, AppConfig};
use ecomap_fetch::{ImageProbe, LoadState, source_for};
use ecomap_layout::ShareConfig;
use ecomap_scene::Scene;
use kurbo::Size;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let schema = match &cli.schema {
        Some(path) => CatalogSchema::load(path)
            .with_context(|| format!("loading catalog schema {}", path.display()))?,
        None => CatalogSchema::default(),
    };

    let viewport = match &cli.command {
        Command::Index { width, height, .. } => Size::new(*width, *height),
        _ => AppConfig::default().viewport,
    };
    let mut app = App::new(AppConfig {
        title: cli.title.clone(),
        viewport,
        schema,
        ..AppConfig::default()
    });
    app.start(source_for(&cli.source));
    app.block();

    if cli.check_images
        && let Some(categories) = app.categories()
    {
        let mut probe = ImageProbe::new(Duration::from_secs(10));
        let resolved = probe.resolve(categories);
        app.replace_categories(resolved);
    }

    let failure = match app.load_state() {
        LoadState::Error(err) => Some(err.to_string()),
        _ => None,
    };

    match &cli.command {
        Command::Index { select, output, .. } => {
            if let Some(key) = select {
                app.select(key, Instant::now());
            }
            write_scene(&app.index_scene(), output)?;
        }
        Command::Share {
            show,
            hide,
            all,
            output,
        } => {
            let config = ShareConfig {
                title: cli.title.clone(),
                ..ShareConfig::default()
            };
            let empty = CategorizedProjects::new();
            let categories = app.categories().unwrap_or(&empty);
            let visibility = visibility_from(categories, show, hide, *all);
            let layout = app.share_layout(&visibility, &config);
            if layout.hidden_count() > 0 {
                tracing::info!(
                    hidden = layout.hidden_count(),
                    "some projects did not fit in their panels"
                );
            }
            write_scene(&ecomap_view::share_scene(&layout), output)?;
        }
        Command::Categories => {
            if let Some(err) = &failure {
                bail!("catalog could not be loaded: {err}");
            }
            print_categories(&app);
        }
    }

    if cli.fail_on_error
        && let Some(err) = failure
    {
        bail!("catalog could not be loaded: {err}");
    }
    Ok(())
}

fn write_scene(scene: &Scene, path: &Path) -> Result<()> {
    let svg = ecomap_svg::to_svg(scene);
    fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote scene");
    Ok(())
}

fn print_categories(app: &App) {
    let Some(categorization) = app.categorization() else {
        return;
    };
    let width = categorization
        .projects
        .keys()
        .map(str::len)
        .max()
        .unwrap_or(0);
    for (key, category) in categorization.projects.iter() {
        println!("{key:<width$}  {:>4}  {}", category.len(), category.title);
    }
    println!(
        "{} projects, {} skipped, {} unmatched",
        categorization.projects.total_projects(),
        categorization.skipped.len(),
        categorization.unmatched
    );
}
