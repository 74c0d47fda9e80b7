// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_catalog --heading-base-level=0

//! Ecomap Catalog: the data model of an ecosystem map and the categorizer that builds it.
//!
//! A catalog service returns a list of project records. This crate keeps those
//! records opaque ([`RawProjectsResponse`]) until a [`CatalogSchema`] reads them:
//! the schema says where the name, image, tagline, and tags live inside a
//! record, and which tags select which category. [`categorize`] then produces
//! [`CategorizedProjects`], an insertion-ordered map from category key to
//! [`Category`].
//!
//! ```rust
//! use ecomap_catalog::{CatalogSchema, RawProjectsResponse, categorize};
//!
//! let body = r#"{
//!     "meteor": { "profile": { "name": "Meteor Wallet", "tags": { "wallet": "Wallet" } } },
//!     "ref": { "profile": { "name": "Ref Finance", "tags": { "defi": "DeFi" } } }
//! }"#;
//! let raw = RawProjectsResponse::from_json_str(body).unwrap();
//! let out = categorize(&raw, &CatalogSchema::default());
//!
//! assert_eq!(out.projects.get("wallets").unwrap().projects[0].name, "Meteor Wallet");
//! assert_eq!(out.projects.total_projects(), 2);
//! ```
//!
//! [`VisibilitySelection`] is the per-category on/off mask used by the share preview.

mod categorize;
mod model;
mod raw;
mod schema;
mod visibility;

pub use categorize::{Categorization, SkippedRecord, categorize};
pub use model::{CategorizedProjects, Category, ColorToken, Project};
pub use raw::{RawProjectsResponse, RawRecord, ResponseError};
pub use schema::{CatalogSchema, CategoryRule, FallbackCategory, FieldMap, SchemaError};
pub use visibility::VisibilitySelection;
