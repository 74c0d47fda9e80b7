// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorized project data: projects, categories, and the ordered category map.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// A single project entry as shown on cards, detail grids, and the share preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name. Unique within a category by convention; not enforced.
    pub name: String,
    /// Image URL or relative path. `None` when the catalog has no usable image.
    pub image: Option<String>,
    /// Optional short tagline.
    pub tagline: Option<String>,
}

impl Project {
    /// Create a project with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            tagline: None,
        }
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the tagline.
    #[must_use]
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }
}

/// A styling token naming a palette entry, such as `"blue"` or `"emerald"`.
///
/// Tokens are resolved to concrete colors by the view layer; this crate never
/// interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub String);

impl ColorToken {
    /// Create a token from any string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// A named group of projects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Human-readable title, e.g. "Wallets".
    pub title: String,
    /// Background styling token.
    pub color: ColorToken,
    /// Projects in source order. Not de-duplicated.
    pub projects: Vec<Project>,
}

impl Category {
    /// Create an empty category.
    pub fn new(title: impl Into<String>, color: impl Into<ColorToken>) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
            projects: Vec::new(),
        }
    }

    /// Append projects, keeping their order.
    #[must_use]
    pub fn with_projects(mut self, projects: impl IntoIterator<Item = Project>) -> Self {
        self.projects.extend(projects);
        self
    }

    /// Number of projects in this category.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the category has no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Insertion-ordered mapping from category key to [`Category`].
///
/// Keys are stable identifiers, distinct from titles. Iteration follows
/// insertion order, which is the order the catalog schema declares categories.
/// Values are built once per successful fetch and treated as immutable
/// afterwards; there is no removal API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorizedProjects {
    entries: Vec<(String, Category)>,
    index: HashMap<String, usize>,
}

impl CategorizedProjects {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category, replacing any existing category with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, category: Category) {
        let key = key.into();
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1 = category;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, category));
    }

    /// Look up a category by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Category> {
        self.index.get(key).map(|&idx| &mut self.entries[idx].1)
    }

    /// Returns `true` if `key` names a category.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate `(key, category)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Category)> + '_ {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Position of `key` in insertion order.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of project counts over all categories.
    #[must_use]
    pub fn total_projects(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, Category)> for CategorizedProjects {
    fn from_iter<I: IntoIterator<Item = (K, Category)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (key, category) in iter {
            out.insert(key, category);
        }
        out
    }
}
