// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a raw response into [`CategorizedProjects`].

use serde_json::Value;

use crate::raw::json_type_name;
use crate::{CatalogSchema, CategorizedProjects, Category, Project, RawProjectsResponse};

/// A record the categorizer could not turn into a project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Source id of the record (object key or array index).
    pub id: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Output of [`categorize`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Categorization {
    /// Projects grouped by category, in schema declaration order.
    pub projects: CategorizedProjects,
    /// Malformed records, in source order.
    pub skipped: Vec<SkippedRecord>,
    /// Valid records that matched no rule while the schema has no fallback.
    pub unmatched: usize,
}

/// Group raw records into categories according to `schema`.
///
/// This is a pure function: the same input always yields the same grouping
/// and the same per-category order.
///
/// - Every declared category is present in the output, even when empty, so
///   card order does not depend on the data.
/// - A record is assigned to the first rule it matches; records that match no
///   rule go to the fallback category, or are counted in
///   [`Categorization::unmatched`] when there is none.
/// - Malformed records (not an object, or no string name) are skipped and
///   reported in [`Categorization::skipped`]; they never abort the run.
pub fn categorize(raw: &RawProjectsResponse, schema: &CatalogSchema) -> Categorization {
    let mut projects = CategorizedProjects::new();
    for rule in &schema.categories {
        projects.insert(
            rule.key.clone(),
            Category::new(rule.title.clone(), rule.color.clone()),
        );
    }
    if let Some(fallback) = &schema.fallback {
        projects.insert(
            fallback.key.clone(),
            Category::new(fallback.title.clone(), fallback.color.clone()),
        );
    }

    let mut skipped = Vec::new();
    let mut unmatched = 0;

    for record in raw.records() {
        let (project, tags) = match read_record(&record.value, schema) {
            Ok(parts) => parts,
            Err(reason) => {
                tracing::warn!(id = %record.id, %reason, "skipping malformed catalog record");
                skipped.push(SkippedRecord {
                    id: record.id.clone(),
                    reason,
                });
                continue;
            }
        };

        let key = match schema.rule_for(tags.iter().map(String::as_str)) {
            Some(idx) => schema.categories[idx].key.as_str(),
            None => match &schema.fallback {
                Some(fallback) => fallback.key.as_str(),
                None => {
                    tracing::trace!(id = %record.id, "record matched no category");
                    unmatched += 1;
                    continue;
                }
            },
        };

        if let Some(category) = projects.get_mut(key) {
            category.projects.push(project);
        }
    }

    tracing::debug!(
        records = raw.len(),
        categories = projects.len(),
        projects = projects.total_projects(),
        skipped = skipped.len(),
        unmatched,
        "categorized catalog"
    );

    Categorization {
        projects,
        skipped,
        unmatched,
    }
}

fn read_record(value: &Value, schema: &CatalogSchema) -> Result<(Project, Vec<String>), String> {
    if !value.is_object() {
        return Err(format!("expected an object, found {}", json_type_name(value)));
    }
    let fields = &schema.fields;

    let name = match lookup(value, &fields.name) {
        Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_owned(),
        Some(Value::String(_)) => return Err("empty name".into()),
        Some(other) => {
            return Err(format!(
                "name at `{}` is {}, expected a string",
                fields.name,
                json_type_name(other)
            ));
        }
        None => return Err(format!("missing name at `{}`", fields.name)),
    };

    let project = Project {
        name,
        image: optional_string(value, &fields.image),
        tagline: optional_string(value, &fields.tagline),
    };

    let tags = match lookup(value, &fields.tags) {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|t| t.as_str().map(str::to_owned))
            .collect(),
        Some(Value::String(tag)) => vec![tag.clone()],
        _ => Vec::new(),
    };

    Ok((project, tags))
}

fn lookup<'a>(value: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return None;
    }
    value.pointer(pointer).filter(|v| !v.is_null())
}

fn optional_string(value: &Value, pointer: &str) -> Option<String> {
    lookup(value, pointer)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, tags: &[&str]) -> Value {
        let tags: serde_json::Map<String, Value> = tags
            .iter()
            .map(|t| ((*t).to_owned(), Value::String((*t).to_uppercase())))
            .collect();
        json!({
            "slug": name.to_lowercase(),
            "profile": {
                "name": name,
                "tagline": format!("{name} tagline"),
                "image": { "url": format!("https://img.example/{name}.png") },
                "tags": tags,
            }
        })
    }

    #[test]
    fn reads_default_near_shape() {
        let raw = RawProjectsResponse::from_value(json!({
            "meteor": record("Meteor", &["wallet"]),
            "ref": record("Ref Finance", &["dex", "defi"]),
        }))
        .unwrap();
        let out = categorize(&raw, &CatalogSchema::default());

        let wallets = out.projects.get("wallets").unwrap();
        assert_eq!(wallets.projects.len(), 1);
        assert_eq!(wallets.projects[0].name, "Meteor");
        assert_eq!(
            wallets.projects[0].image.as_deref(),
            Some("https://img.example/Meteor.png")
        );
        assert_eq!(out.projects.get("defi").unwrap().projects[0].name, "Ref Finance");
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let raw = RawProjectsResponse::from_value(json!([
            record("Good", &["wallet"]),
            "just a string",
            { "profile": { "tags": { "wallet": "Wallet" } } },
            { "profile": { "name": 12 } },
        ]))
        .unwrap();
        let out = categorize(&raw, &CatalogSchema::default());

        assert_eq!(out.projects.total_projects(), 1);
        let ids: Vec<_> = out.skipped.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn unmatched_without_fallback_is_counted() {
        let mut schema = CatalogSchema::default();
        schema.fallback = None;
        let raw = RawProjectsResponse::from_value(json!([
            record("A", &["wallet"]),
            record("B", &["something-else"]),
        ]))
        .unwrap();
        let out = categorize(&raw, &schema);
        assert_eq!(out.projects.total_projects(), 1);
        assert_eq!(out.unmatched, 1);
    }

    #[test]
    fn missing_optional_fields_become_none() {
        let raw = RawProjectsResponse::from_value(json!([
            { "profile": { "name": "Bare", "image": { "url": "  " }, "tags": ["ai"] } },
        ]))
        .unwrap();
        let out = categorize(&raw, &CatalogSchema::default());
        let ai = out.projects.get("ai").unwrap();
        assert_eq!(ai.projects, [Project::new("Bare")]);
    }
}
