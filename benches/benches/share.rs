// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ecomap_catalog::{CategorizedProjects, Category, Project, VisibilitySelection};
use ecomap_layout::{ShareConfig, layout_share_preview};
use ecomap_view::share_scene;

fn catalog(categories: usize, per_category: usize) -> CategorizedProjects {
    (0..categories)
        .map(|c| {
            let projects = (0..per_category * (c % 3 + 1)).map(|p| {
                Project::new(format!("Project {c}-{p}"))
                    .with_image(format!("https://img.example/{c}/{p}.png"))
                    .with_tagline("Building on NEAR with a tagline long enough to wrap")
            });
            (
                format!("cat-{c}"),
                Category::new(format!("Category {c}"), "blue").with_projects(projects),
            )
        })
        .collect()
}

fn bench_share(c: &mut Criterion) {
    let config = ShareConfig::default();
    let mut group = c.benchmark_group("share");
    for (cats, per) in [(4usize, 10usize), (12, 40), (24, 120)] {
        let categories = catalog(cats, per);
        let visibility = VisibilitySelection::all_visible(&categories);
        let id = format!("{cats}x{per}");

        group.bench_function(BenchmarkId::new("layout", &id), |b| {
            b.iter(|| black_box(layout_share_preview(&categories, &visibility, &config)));
        });

        let layout = layout_share_preview(&categories, &visibility, &config);
        group.bench_function(BenchmarkId::new("scene", &id), |b| {
            b.iter(|| black_box(share_scene(&layout)));
        });

        let scene = share_scene(&layout);
        group.bench_function(BenchmarkId::new("svg", &id), |b| {
            b.iter(|| black_box(ecomap_svg::to_svg(&scene)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_share);
criterion_main!(benches);
