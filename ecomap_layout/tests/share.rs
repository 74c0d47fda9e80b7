// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Share preview layout over small hand-built catalogs.

use ecomap_catalog::{CategorizedProjects, Category, Project, VisibilitySelection};
use ecomap_layout::share::{ShareConfig, SharePreview, layout_share_preview};
use kurbo::Rect;

fn category(title: &str, n: usize) -> Category {
    Category::new(title, "blue").with_projects(
        (0..n).map(|i| Project::new(format!("{title} {i}")).with_tagline("tagline")),
    )
}

fn catalog() -> CategorizedProjects {
    [
        ("wallets", category("Wallets", 5)),
        ("defi", category("DeFi", 8)),
        ("ai", category("AI", 3)),
        ("nft", category("NFT", 2)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn renders_exactly_visible_existing_categories_by_title() {
    let cats = catalog();
    let visibility: VisibilitySelection = [
        ("wallets", true),
        ("defi", true),
        ("ai", false),
        ("ghost", true),
    ]
    .into_iter()
    .collect();

    let layout = layout_share_preview(&cats, &visibility, &ShareConfig::default());
    assert_eq!(layout.keys, ["defi", "wallets"]);
    let titles: Vec<&str> = layout.panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["DeFi", "Wallets"]);
}

#[test]
fn empty_data_is_title_band_only() {
    let cats = CategorizedProjects::new();
    let layout = layout_share_preview(&cats, &VisibilitySelection::new(), &ShareConfig::default());
    assert!(layout.panels.is_empty());
    assert!(layout.keys.is_empty());
    assert_eq!(layout.title_band, Rect::new(0.0, 0.0, 3840.0, 80.0));
    assert_eq!(layout.title, "NEAR Protocol Ecosystem Map");
}

#[test]
fn single_wallets_category_spans_the_usable_area() {
    let cats: CategorizedProjects = [("wallets", category("Wallets", 10))].into_iter().collect();
    let layout = layout_share_preview(
        &cats,
        &VisibilitySelection::all_visible(&cats),
        &ShareConfig::default(),
    );

    assert_eq!(layout.usable, Rect::new(20.0, 100.0, 3820.0, 2140.0));
    assert_eq!(layout.panels.len(), 1);
    let panel = &layout.panels[0];
    // Usable area minus the treemap's outer padding.
    assert_eq!(panel.rect, Rect::new(52.0, 132.0, 3788.0, 2108.0));
    assert_eq!(panel.max_columns, 33);
    assert_eq!(panel.max_rows, 18);
    assert_eq!(panel.items.len(), 10.min(panel.max_projects()));
    assert_eq!(panel.hidden_count, 0);
    assert_eq!(panel.icon_size, 64.0);
    assert_eq!(panel.grid_columns, 33);
}

#[test]
fn overfull_panels_truncate_to_capacity() {
    let cats: CategorizedProjects = [("big", category("Big", 1000))].into_iter().collect();
    let layout = layout_share_preview(
        &cats,
        &VisibilitySelection::all_visible(&cats),
        &ShareConfig::default(),
    );
    let panel = &layout.panels[0];
    assert!(panel.max_projects() < 1000);
    assert_eq!(panel.items.len(), panel.max_projects());
    assert_eq!(panel.hidden_count, 1000 - panel.max_projects());
    assert_eq!(layout.hidden_count(), panel.hidden_count);
    // First projects are kept, in order.
    assert_eq!(panel.items[0].project.name, "Big 0");
    let last = format!("Big {}", panel.max_projects() - 1);
    assert_eq!(panel.items.last().unwrap().project.name, last);
    assert_items_inside(panel);
}

fn assert_items_inside(panel: &ecomap_layout::share::PanelLayout) {
    for item in &panel.items {
        let r = item.rect;
        assert!(
            r.x0 >= panel.rect.x0 && r.x1 <= panel.rect.x1,
            "{} spills sideways out of {:?}: {r:?}",
            item.project.name,
            panel.rect
        );
        assert!(
            r.y0 >= panel.title_rect.y1 && r.y1 <= panel.rect.y1,
            "{} spills below {:?}: {r:?}",
            item.project.name,
            panel.rect
        );
        assert!(item.avatar.y1 <= r.y1 && item.name.y1 <= r.y1);
        if let Some(tagline) = item.tagline {
            assert!(tagline.y1 <= r.y1);
        }
    }
}

#[test]
fn full_panels_keep_every_item_inside() {
    let cats: CategorizedProjects = [
        ("a", category("A", 72)),
        ("b", category("B", 450)),
        ("c", category("C", 18)),
    ]
    .into_iter()
    .collect();
    let layout = layout_share_preview(
        &cats,
        &VisibilitySelection::all_visible(&cats),
        &ShareConfig::default(),
    );
    assert_eq!(layout.panels.len(), 3);
    for panel in &layout.panels {
        let total = cats.get(&panel.key).unwrap().len();
        assert_eq!(panel.items.len(), total.min(panel.max_projects()));
        assert_items_inside(panel);
    }
}

#[test]
fn panels_stay_inside_the_usable_area_without_overlap() {
    let cats = catalog();
    let layout = layout_share_preview(
        &cats,
        &VisibilitySelection::all_visible(&cats),
        &ShareConfig::default(),
    );
    assert_eq!(layout.panels.len(), 4);
    for (i, a) in layout.panels.iter().enumerate() {
        let r = a.rect;
        assert!(r.x0 >= layout.usable.x0 && r.y0 >= layout.usable.y0);
        assert!(r.x1 <= layout.usable.x1 && r.y1 <= layout.usable.y1);
        for b in &layout.panels[i + 1..] {
            let overlap = r.intersect(b.rect);
            assert!(overlap.width() <= 0.0 || overlap.height() <= 0.0);
        }
        for item in &a.items {
            assert_eq!(item.avatar.width(), a.icon_size);
            assert!(item.tagline.is_some());
        }
        assert_items_inside(a);
    }
}

#[test]
fn preview_rebuilds_only_when_shown_keys_change() {
    let cats = catalog();
    let mut visibility = VisibilitySelection::all_visible(&cats);
    let mut preview = SharePreview::new(ShareConfig::default());
    assert!(preview.layout().is_none());

    assert!(preview.update(&cats, &visibility));
    assert!(!preview.update(&cats, &visibility));
    // Toggling an unknown key does not change what is shown.
    visibility.show("ghost");
    assert!(!preview.update(&cats, &visibility));
    assert_eq!(preview.rebuilds(), 1);

    visibility.hide("ai");
    assert!(preview.update(&cats, &visibility));
    let layout = preview.layout().unwrap();
    assert_eq!(layout.keys, ["defi", "nft", "wallets"]);
    assert_eq!(layout.panels.len(), 3);
    assert_eq!(preview.rebuilds(), 2);
}
