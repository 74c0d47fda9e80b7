// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ecomap_treemap --heading-base-level=0

//! Ecomap Treemap: partition a rectangle into cells with areas proportional to weights.
//!
//! This is a single-level treemap: a flat list of weights goes in, one
//! [`Rect`] per weight comes out, in input order. The padding model and the
//! squarified tiling follow the behavior of the d3 treemap layout, so maps
//! produced with the same weights, size, and padding line up with it.
//!
//! - Outer padding separates cells from the edge of the bounds.
//! - Inner padding separates adjacent cells.
//! - With rounding enabled every coordinate is snapped to an integer.
//!
//! ## Guarantees
//!
//! - Cells never overlap and always lie inside the bounds.
//! - Before padding and rounding, cell areas are exactly proportional to the
//!   weights and the cells tile the padded bounds.
//! - Zero (and negative) weights produce empty cells.
//!
//! ## Example
//!
//! ```rust
//! use ecomap_treemap::Treemap;
//! use kurbo::Rect;
//!
//! let cells = Treemap::new()
//!     .padding(32.0)
//!     .round(true)
//!     .partition(&[12.0], Rect::new(0.0, 0.0, 3800.0, 2020.0));
//!
//! // A lone cell fills the bounds minus the outer padding.
//! assert_eq!(cells, [Rect::new(32.0, 32.0, 3768.0, 1988.0)]);
//! ```

mod tiling;

use kurbo::Rect;

pub use tiling::{GOLDEN_RATIO, Tiling};

/// Treemap configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Treemap {
    /// Tiling strategy.
    pub tiling: Tiling,
    /// Gap between adjacent cells.
    pub padding_inner: f64,
    /// Gap between cells and the edge of the bounds.
    pub padding_outer: f64,
    /// Snap output coordinates to integers.
    pub round: bool,
}

impl Default for Treemap {
    fn default() -> Self {
        Self::new()
    }
}

impl Treemap {
    /// Squarified tiling, no padding, no rounding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiling: Tiling::Squarify {
                ratio: GOLDEN_RATIO,
            },
            padding_inner: 0.0,
            padding_outer: 0.0,
            round: false,
        }
    }

    /// Set the tiling strategy.
    #[must_use]
    pub const fn tiling(mut self, tiling: Tiling) -> Self {
        self.tiling = tiling;
        self
    }

    /// Set inner and outer padding together.
    #[must_use]
    pub const fn padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self.padding_outer = padding;
        self
    }

    /// Set only the gap between adjacent cells.
    #[must_use]
    pub const fn padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self
    }

    /// Set only the gap at the edge of the bounds.
    #[must_use]
    pub const fn padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding;
        self
    }

    /// Enable or disable integer rounding.
    #[must_use]
    pub const fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Partition `bounds` into one cell per weight, in input order.
    ///
    /// Negative and non-finite weights are treated as zero.
    #[must_use]
    pub fn partition(&self, weights: &[f64], bounds: Rect) -> Vec<Rect> {
        if weights.is_empty() {
            return Vec::new();
        }
        let weights: Vec<f64> = weights
            .iter()
            .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
            .collect();
        let total: f64 = weights.iter().sum();

        // Each cell is later shrunk by half the inner gap on every side, so the
        // tiled area is grown by the same amount to keep the outer gap exact.
        let half = self.padding_inner / 2.0;
        let inset = self.padding_outer - half;
        let area = shrink(bounds.abs(), inset);

        let mut cells = vec![Rect::new(area.x0, area.y0, area.x0, area.y0); weights.len()];
        if total > 0.0 {
            self.tiling.tile(&weights, total, area, &mut cells);
        }

        for cell in &mut cells {
            *cell = shrink(*cell, half);
            if self.round {
                *cell = Rect::new(
                    cell.x0.round(),
                    cell.y0.round(),
                    cell.x1.round(),
                    cell.y1.round(),
                );
            }
        }
        cells
    }
}

/// Partition `bounds` with squarified tiling, equal inner and outer `padding`,
/// and integer rounding.
#[must_use]
pub fn partition(weights: &[f64], bounds: Rect, padding: f64) -> Vec<Rect> {
    Treemap::new()
        .padding(padding)
        .round(true)
        .partition(weights, bounds)
}

/// Inset `rect` by `amount` on every side, collapsing to the center line
/// along any axis that would invert.
fn shrink(rect: Rect, amount: f64) -> Rect {
    let (mut x0, mut y0, mut x1, mut y1) = (
        rect.x0 + amount,
        rect.y0 + amount,
        rect.x1 - amount,
        rect.y1 - amount,
    );
    if x1 < x0 {
        x0 = (x0 + x1) / 2.0;
        x1 = x0;
    }
    if y1 < y0 {
        y0 = (y0 + y1) / 2.0;
        y1 = y0;
    }
    Rect::new(x0, y0, x1, y1)
}
