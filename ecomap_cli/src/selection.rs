// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-valued selection with a change counter.

/// The currently selected key, if any, plus a revision.
///
/// Selecting a key replaces the previous one. The revision bumps only when the
/// selected key actually changes, so observers can compare revisions instead
/// of keys.
///
/// ```rust
/// use ecomap_cli::Selection;
///
/// let mut selection = Selection::new();
/// selection.select("wallets".to_owned());
/// selection.select("defi".to_owned());
/// assert_eq!(selection.get().map(String::as_str), Some("defi"));
/// assert_eq!(selection.revision(), 2);
///
/// // Selecting the same key again is a no-op.
/// selection.select("defi".to_owned());
/// assert_eq!(selection.revision(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    current: Option<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// The selected key.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns the current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselect.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.current.as_ref() == Some(key)
    }

    /// Replace the selection with `key`.
    pub fn select(&mut self, key: T) {
        if self.contains(&key) {
            return;
        }
        self.current = Some(key);
        self.bump_revision();
    }
}
