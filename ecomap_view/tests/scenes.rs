// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page scenes for each state, checked through the scene queries and SVG output.

use ecomap_catalog::{CategorizedProjects, Category, Project, VisibilitySelection};
use ecomap_layout::{ShareConfig, layout_share_preview};
use ecomap_scene::{Node, Scene};
use ecomap_view::{
    ERROR_MESSAGE, ERROR_TITLE, IndexModel, IndexState, Toast, card_key, index_scene, share_scene,
};
use kurbo::Size;

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn catalog() -> CategorizedProjects {
    [
        (
            "wallets",
            Category::new("Wallets", "blue").with_projects([
                Project::new("Meteor").with_image("https://img/meteor.png"),
                Project::new("HERE"),
            ]),
        ),
        (
            "defi",
            Category::new("DeFi", "emerald").with_projects(
                (0..6).map(|i| Project::new(format!("Dex {i}")).with_tagline("Swap & earn")),
            ),
        ),
    ]
    .into_iter()
    .collect()
}

fn ready<'a>(cats: &'a CategorizedProjects, selected: Option<&'a str>) -> IndexModel<'a> {
    IndexModel {
        title: "NEAR Protocol Ecosystem Map",
        viewport: VIEWPORT,
        state: IndexState::Ready {
            categories: cats,
            selected,
        },
        toasts: &[],
    }
}

fn count_images(scene: &Scene) -> usize {
    let mut n = 0;
    scene.visit(|node| {
        if matches!(node, Node::Image(_)) {
            n += 1;
        }
    });
    n
}

#[test]
fn error_page_has_message_and_no_cards() {
    let scene = index_scene(&IndexModel {
        title: "Map",
        viewport: VIEWPORT,
        state: IndexState::Error,
        toasts: &[],
    });
    assert_eq!(scene.texts(), [ERROR_TITLE, ERROR_MESSAGE]);
    assert!(scene.pickable_ids().is_empty());
}

#[test]
fn loading_page_is_a_spinner() {
    let scene = index_scene(&IndexModel {
        title: "Map",
        viewport: VIEWPORT,
        state: IndexState::Loading,
        toasts: &[],
    });
    assert!(scene.find_group("loading").is_some());
    assert!(scene.texts().is_empty());
    assert!(scene.pickable_ids().is_empty());
}

#[test]
fn ready_page_has_one_card_per_category() {
    let cats = catalog();
    let scene = index_scene(&ready(&cats, None));
    let keys: Vec<&str> = scene.pickable_ids().into_iter().filter_map(card_key).collect();
    assert_eq!(keys, ["wallets", "defi"]);
    // Cards preview at most four projects each.
    assert_eq!(count_images(&scene), 2 + 4);
    assert!(scene.texts().contains(&"NEAR Protocol Ecosystem Map".to_owned()));
}

#[test]
fn selected_category_shows_its_full_list() {
    let cats = catalog();
    let scene = index_scene(&ready(&cats, Some("defi")));
    let detail = scene.find_group("detail:defi").expect("detail section");
    assert_eq!(detail.children.len(), 1 + 6);
    assert!(scene.find_group("detail:wallets").is_none());
    assert!(scene.height >= detail.bounds.y1);
}

#[test]
fn unknown_selection_renders_no_detail() {
    let cats = catalog();
    let scene = index_scene(&ready(&cats, Some("ghost")));
    let mut details = 0;
    scene.visit(|node| {
        if let Node::Group(g) = node
            && g.id.as_deref().is_some_and(|id| id.starts_with("detail:"))
        {
            details += 1;
        }
    });
    assert_eq!(details, 0);
}

#[test]
fn toasts_are_drawn_on_top() {
    let cats = catalog();
    let toasts = [Toast {
        title: "Error".into(),
        description: "Failed to load category details. Please try again.".into(),
    }];
    let scene = index_scene(&IndexModel {
        toasts: &toasts,
        ..ready(&cats, None)
    });
    let last = scene.root.last().expect("nodes");
    assert!(matches!(last, Node::Group(g) if g.id.as_deref() == Some("toast:0")));
}

#[test]
fn share_scene_draws_panels_and_placeholders() {
    let cats = catalog();
    let layout = layout_share_preview(
        &cats,
        &VisibilitySelection::all_visible(&cats),
        &ShareConfig::default(),
    );
    let scene = share_scene(&layout);
    assert_eq!((scene.width, scene.height), (3840.0, 2160.0));
    assert!(scene.find_group("panel:defi").is_some());
    assert!(scene.find_group("panel:wallets").is_some());
    assert_eq!(count_images(&scene), 8);

    let svg = ecomap_svg::to_svg(&scene);
    assert!(svg.contains("fill=\"#0a0f1c\""));
    assert!(svg.contains("stroke=\"#1d4ed8\""));
    assert!(svg.contains("href=\"https://img/meteor.png\""));
    assert!(svg.contains("href=\"/placeholder.svg\""));
    assert!(svg.contains("Swap &amp; earn"));
}

#[test]
fn empty_share_scene_is_title_only() {
    let cats = CategorizedProjects::new();
    let layout = layout_share_preview(&cats, &VisibilitySelection::new(), &ShareConfig::default());
    let scene = share_scene(&layout);
    assert_eq!(scene.texts(), ["NEAR Protocol Ecosystem Map"]);
    assert_eq!(count_images(&scene), 0);
}
