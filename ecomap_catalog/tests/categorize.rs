// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorizer behavior against a catalog fixture.

use ecomap_catalog::{CatalogSchema, CategoryRule, RawProjectsResponse, categorize};

const FIXTURE: &str = include_str!("data/catalog.json");

fn fixture() -> RawProjectsResponse {
    RawProjectsResponse::from_json_str(FIXTURE).unwrap()
}

#[test]
fn project_counts_sum_to_valid_records() {
    let raw = fixture();
    let out = categorize(&raw, &CatalogSchema::default());

    // One record has no name.
    assert_eq!(out.skipped.len(), 1);
    assert_eq!(out.skipped[0].id, "broken");

    let valid = raw.len() - out.skipped.len();
    assert_eq!(out.projects.total_projects(), valid);
    assert_eq!(out.unmatched, 0);
}

#[test]
fn categorization_is_deterministic_and_idempotent() {
    let raw = fixture();
    let schema = CatalogSchema::default();
    let first = categorize(&raw, &schema);
    let second = categorize(&raw, &schema);
    assert_eq!(first, second);

    let keys_a: Vec<_> = first.projects.keys().collect();
    let keys_b: Vec<_> = second.projects.keys().collect();
    assert_eq!(keys_a, keys_b);
}

#[test]
fn per_category_order_follows_source_order() {
    let out = categorize(&fixture(), &CatalogSchema::default());

    let wallets: Vec<_> = out
        .projects
        .get("wallets")
        .unwrap()
        .projects
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(wallets, ["Meteor Wallet", "HERE Wallet"]);

    let defi: Vec<_> = out
        .projects
        .get("defi")
        .unwrap()
        .projects
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(defi, ["Ref Finance", "Burrow"]);
}

#[test]
fn first_rule_wins_for_multi_tagged_projects() {
    let out = categorize(&fixture(), &CatalogSchema::default());
    let infra = out.projects.get("infrastructure").unwrap();
    assert!(infra.projects.iter().any(|p| p.name == "Aurora"));
    let bridges = out.projects.get("bridges").unwrap();
    assert!(bridges.projects.iter().all(|p| p.name != "Aurora"));
}

#[test]
fn fallback_collects_unmatched_projects() {
    let out = categorize(&fixture(), &CatalogSchema::default());
    let other = out.projects.get("other").unwrap();
    assert_eq!(other.projects.len(), 1);
    assert_eq!(other.projects[0].name, "Mystery Project");
    // The fallback is declared last.
    assert_eq!(out.projects.keys().last(), Some("other"));
}

#[test]
fn empty_image_urls_become_none() {
    let out = categorize(&fixture(), &CatalogSchema::default());
    let here = out
        .projects
        .get("wallets")
        .unwrap()
        .projects
        .iter()
        .find(|p| p.name == "HERE Wallet")
        .unwrap();
    assert_eq!(here.image, None);
}

#[test]
fn schema_file_replaces_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.toml");
    std::fs::write(
        &path,
        r#"
        [[categories]]
        key = "money"
        title = "Money"
        color = "green"
        tags = ["wallet", "wallets", "defi", "dex", "lending"]
        "#,
    )
    .unwrap();

    let schema = CatalogSchema::load(&path).unwrap();
    assert_eq!(
        schema.categories,
        [CategoryRule::new(
            "money",
            "Money",
            "green",
            ["wallet", "wallets", "defi", "dex", "lending"]
        )]
    );

    let out = categorize(&fixture(), &schema);
    assert_eq!(out.projects.len(), 1);
    assert_eq!(out.projects.get("money").unwrap().projects.len(), 4);
    assert_eq!(out.unmatched, 7);
}

#[test]
fn missing_schema_file_reports_path() {
    let err = CatalogSchema::load("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}
