// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-category visibility flags for the share preview.

use hashbrown::HashMap;

use crate::CategorizedProjects;

/// Mapping from category key to a visibility flag.
///
/// Keys are free-form: a key that is marked visible but does not name a
/// category in the current [`CategorizedProjects`] is simply ignored by
/// consumers. Keys that were never set read as hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySelection {
    flags: HashMap<String, bool>,
}

impl VisibilitySelection {
    /// An empty selection; every category is hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every category of `categories` visible.
    #[must_use]
    pub fn all_visible(categories: &CategorizedProjects) -> Self {
        categories.keys().map(|k| (k, true)).collect()
    }

    /// Set the flag for `key`.
    pub fn set(&mut self, key: impl Into<String>, visible: bool) {
        self.flags.insert(key.into(), visible);
    }

    /// Mark `key` visible.
    pub fn show(&mut self, key: impl Into<String>) {
        self.set(key, true);
    }

    /// Mark `key` hidden.
    pub fn hide(&mut self, key: impl Into<String>) {
        self.set(key, false);
    }

    /// Flip the flag for `key`, returning the new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.is_visible(key);
        self.set(key, next);
        next
    }

    /// Returns `true` if `key` is marked visible.
    #[must_use]
    pub fn is_visible(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Iterate keys currently marked visible, in unspecified order.
    pub fn visible_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.flags
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for VisibilitySelection {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (key, visible) in iter {
            out.set(key, visible);
        }
        out
    }
}
