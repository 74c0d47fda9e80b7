// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pluggable catalog contract: where fields live in a record and how tags map to categories.

use std::path::Path;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::ColorToken;

/// Errors produced while loading or validating a [`CatalogSchema`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("failed to read catalog schema {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The schema is not valid TOML for this structure.
    #[error("invalid catalog schema: {0}")]
    Toml(#[from] toml::de::Error),
    /// Two categories share a key.
    #[error("duplicate category key `{0}` in catalog schema")]
    DuplicateKey(String),
    /// A field pointer is not a JSON pointer.
    #[error("field `{field}` must be a JSON pointer starting with '/', got `{pointer}`")]
    Pointer {
        /// Which field mapping is wrong.
        field: &'static str,
        /// The offending pointer.
        pointer: String,
    },
}

/// JSON pointers locating project fields inside a raw record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMap {
    /// Pointer to the project name (string, required).
    pub name: String,
    /// Pointer to the image URL or path (string, optional).
    pub image: String,
    /// Pointer to the tagline (string, optional).
    pub tagline: String,
    /// Pointer to the tags: an object whose keys are tag ids, or an array of strings.
    pub tags: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            name: "/profile/name".into(),
            image: "/profile/image/url".into(),
            tagline: "/profile/tagline".into(),
            tags: "/profile/tags".into(),
        }
    }
}

/// A category declared by the schema, and the tags that select it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Stable category key.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Styling token for the card background.
    pub color: ColorToken,
    /// Tags selecting this category. Empty means "the key itself".
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CategoryRule {
    /// Create a rule.
    pub fn new<I, S>(key: &str, title: &str, color: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            title: title.into(),
            color: ColorToken::new(color),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `tag` selects this rule.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        if self.tags.is_empty() {
            return self.key.eq_ignore_ascii_case(tag);
        }
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// The catch-all category for projects that match no rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackCategory {
    /// Stable category key.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Styling token.
    pub color: ColorToken,
}

/// How raw records become categorized projects.
///
/// The default schema reads the NEAR catalog shape
/// (`/profile/name`, `/profile/image/url`, `/profile/tagline`, `/profile/tags`)
/// and maps its tag vocabulary into a fixed set of categories. Load a TOML file
/// with [`CatalogSchema::load`] to point the map at a different catalog.
///
/// ```toml
/// [fields]
/// name = "/title"
/// tags = "/labels"
///
/// [[categories]]
/// key = "wallets"
/// title = "Wallets"
/// color = "blue"
/// tags = ["wallet", "wallets"]
///
/// [fallback]
/// key = "other"
/// title = "Other"
/// color = "slate"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSchema {
    /// Field pointers.
    #[serde(default)]
    pub fields: FieldMap,
    /// Category rules in declaration order. The first matching rule wins.
    #[serde(default)]
    pub categories: Vec<CategoryRule>,
    /// Optional catch-all category.
    #[serde(default)]
    pub fallback: Option<FallbackCategory>,
}

impl CatalogSchema {
    /// Parse and validate a schema from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SchemaError> {
        let schema: Self = toml::from_str(text)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Read, parse, and validate a schema file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let schema = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            categories = schema.categories.len(),
            "loaded catalog schema"
        );
        Ok(schema)
    }

    /// Check pointers and key uniqueness.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (field, pointer) in [
            ("name", &self.fields.name),
            ("image", &self.fields.image),
            ("tagline", &self.fields.tagline),
            ("tags", &self.fields.tags),
        ] {
            if !pointer.is_empty() && !pointer.starts_with('/') {
                return Err(SchemaError::Pointer {
                    field,
                    pointer: pointer.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        let keys = self
            .categories
            .iter()
            .map(|r| r.key.as_str())
            .chain(self.fallback.as_ref().map(|f| f.key.as_str()));
        for key in keys {
            if !seen.insert(key) {
                return Err(SchemaError::DuplicateKey(key.to_owned()));
            }
        }
        Ok(())
    }

    /// Index of the first rule matching any of `tags`.
    ///
    /// Rule order decides, not tag order: a project tagged `["nft", "defi"]`
    /// lands in whichever of those categories is declared first.
    #[must_use]
    pub fn rule_for<'a, I>(&self, tags: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let tags = tags.into_iter();
        self.categories
            .iter()
            .position(|rule| tags.clone().any(|t| rule.matches(t)))
    }
}

impl Default for CatalogSchema {
    fn default() -> Self {
        Self {
            fields: FieldMap::default(),
            categories: vec![
                CategoryRule::new("wallets", "Wallets", "blue", ["wallet", "wallets"]),
                CategoryRule::new(
                    "defi",
                    "DeFi",
                    "emerald",
                    ["defi", "dex", "lending", "staking", "liquid-staking", "yield"],
                ),
                CategoryRule::new(
                    "ai",
                    "AI",
                    "violet",
                    ["ai", "ai-agents", "artificial-intelligence"],
                ),
                CategoryRule::new("gaming", "Gaming", "rose", ["gaming", "games", "gamefi"]),
                CategoryRule::new(
                    "nft",
                    "NFTs",
                    "amber",
                    ["nft", "nfts", "collectibles", "marketplace"],
                ),
                CategoryRule::new("social", "Social", "sky", ["social", "community", "creator"]),
                CategoryRule::new("dao", "DAOs", "indigo", ["dao", "daos", "governance"]),
                CategoryRule::new(
                    "infrastructure",
                    "Infrastructure",
                    "slate",
                    ["infrastructure", "rpc", "oracle", "storage", "data-availability"],
                ),
                CategoryRule::new(
                    "dev-tools",
                    "Developer Tools",
                    "cyan",
                    ["developer-tools", "dev-tools", "sdk", "tooling", "explorer"],
                ),
                CategoryRule::new(
                    "bridges",
                    "Bridges",
                    "orange",
                    ["bridge", "bridges", "chain-abstraction", "interoperability"],
                ),
                CategoryRule::new(
                    "payments",
                    "Payments",
                    "teal",
                    ["payments", "stablecoin", "rwa"],
                ),
                CategoryRule::new(
                    "exchanges",
                    "Exchanges",
                    "yellow",
                    ["exchange", "cex", "on-ramp"],
                ),
            ],
            fallback: Some(FallbackCategory {
                key: "other".into(),
                title: "Other".into(),
                color: ColorToken::new("gray"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_is_valid() {
        CatalogSchema::default().validate().unwrap();
    }

    #[test]
    fn first_declared_rule_wins() {
        let schema = CatalogSchema::default();
        let nft_then_defi = schema.rule_for(["nft", "defi"]).unwrap();
        assert_eq!(schema.categories[nft_then_defi].key, "defi");
        assert_eq!(schema.rule_for(["unknown-tag"]), None);
    }

    #[test]
    fn empty_tag_list_matches_key_case_insensitively() {
        let rule = CategoryRule::new("Wallets", "Wallets", "blue", Vec::<String>::new());
        assert!(rule.matches("wallets"));
        assert!(!rule.matches("wallet"));
    }

    #[test]
    fn toml_overrides_fields_and_rules() {
        let schema = CatalogSchema::from_toml_str(
            r#"
            [fields]
            name = "/title"
            tags = "/labels"

            [[categories]]
            key = "wallets"
            title = "Wallets"
            color = "blue"
            tags = ["wallet"]
            "#,
        )
        .unwrap();
        assert_eq!(schema.fields.name, "/title");
        assert_eq!(schema.fields.image, FieldMap::default().image);
        assert_eq!(schema.categories.len(), 1);
        assert!(schema.fallback.is_none());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = CatalogSchema::from_toml_str(
            r#"
            [[categories]]
            key = "a"
            title = "A"
            color = "blue"

            [fallback]
            key = "a"
            title = "Other"
            color = "gray"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateKey(k) if k == "a"));
    }

    #[test]
    fn bad_pointer_is_rejected() {
        let err = CatalogSchema::from_toml_str("[fields]\nname = \"profile.name\"\n").unwrap_err();
        assert!(matches!(err, SchemaError::Pointer { field: "name", .. }));
    }
}
