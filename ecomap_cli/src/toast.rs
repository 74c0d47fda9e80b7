// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient notifications with a time to live.

use std::time::{Duration, Instant};

use ecomap_view::Toast;

/// Queue of active toasts.
///
/// Each toast expires `ttl` after it was pushed. At most `limit` toasts are
/// kept; pushing beyond that drops the oldest.
#[derive(Clone, Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    expires: Vec<Instant>,
    ttl: Duration,
    limit: usize,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), 1)
    }
}

impl Toasts {
    /// An empty queue.
    #[must_use]
    pub fn new(ttl: Duration, limit: usize) -> Self {
        Self {
            items: Vec::new(),
            expires: Vec::new(),
            ttl,
            limit: limit.max(1),
        }
    }

    /// Show `toast` from `now` on.
    pub fn push(&mut self, toast: Toast, now: Instant) {
        if self.items.len() == self.limit {
            self.items.remove(0);
            self.expires.remove(0);
        }
        self.items.push(toast);
        self.expires.push(now + self.ttl);
    }

    /// Drop toasts that expired by `now`.
    pub fn prune(&mut self, now: Instant) {
        let mut i = 0;
        while i < self.items.len() {
            if self.expires[i] <= now {
                self.items.remove(i);
                self.expires.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn active(&self) -> &[Toast] {
        &self.items
    }

    /// Returns `true` if no toast is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(n: u32) -> Toast {
        Toast {
            title: format!("t{n}"),
            description: String::new(),
        }
    }

    #[test]
    fn toasts_expire() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(2), 3);
        toasts.push(toast(0), t0);
        toasts.push(toast(1), t0 + Duration::from_secs(1));
        toasts.prune(t0 + Duration::from_secs(2));
        assert_eq!(toasts.active(), [toast(1)]);
        toasts.prune(t0 + Duration::from_secs(3));
        assert!(toasts.is_empty());
    }

    #[test]
    fn limit_drops_the_oldest() {
        let now = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push(toast(0), now);
        toasts.push(toast(1), now);
        assert_eq!(toasts.active(), [toast(1)]);
    }
}
