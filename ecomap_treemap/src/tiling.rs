// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiling strategies: how one box is cut into weighted children.

use kurbo::Rect;

/// The golden ratio, the aspect ratio squarified tiling aims for by default.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// How a box is divided among its children.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tiling {
    /// Squarified rows aiming for the given aspect ratio (must be at least 1).
    Squarify {
        /// Target aspect ratio of the produced cells.
        ratio: f64,
    },
    /// Stack children vertically: full width, heights proportional to weight.
    Slice,
    /// Place children side by side: full height, widths proportional to weight.
    Dice,
    /// Alternate by depth, starting with [`Tiling::Dice`] at the top level.
    ///
    /// The partitioner is single-level, so this behaves like `Dice`.
    SliceDice,
}

impl Default for Tiling {
    fn default() -> Self {
        Self::Squarify {
            ratio: GOLDEN_RATIO,
        }
    }
}

impl Tiling {
    /// Fill `out` (one slot per weight) with cells of `bounds`.
    pub(crate) fn tile(self, weights: &[f64], total: f64, bounds: Rect, out: &mut [Rect]) {
        match self {
            Self::Squarify { ratio } => squarify(ratio.max(1.0), weights, total, bounds, out),
            Self::Slice => slice(weights, 0..weights.len(), total, bounds, out),
            Self::Dice | Self::SliceDice => dice(weights, 0..weights.len(), total, bounds, out),
        }
    }
}

/// Lay `range` out top to bottom inside `bounds`.
fn slice(
    weights: &[f64],
    range: core::ops::Range<usize>,
    total: f64,
    bounds: Rect,
    out: &mut [Rect],
) {
    let k = if total > 0.0 { bounds.height() / total } else { 0.0 };
    let mut y = bounds.y0;
    for i in range {
        let y1 = y + weights[i] * k;
        out[i] = Rect::new(bounds.x0, y, bounds.x1, y1);
        y = y1;
    }
}

/// Lay `range` out left to right inside `bounds`.
fn dice(
    weights: &[f64],
    range: core::ops::Range<usize>,
    total: f64,
    bounds: Rect,
    out: &mut [Rect],
) {
    let k = if total > 0.0 { bounds.width() / total } else { 0.0 };
    let mut x = bounds.x0;
    for i in range {
        let x1 = x + weights[i] * k;
        out[i] = Rect::new(x, bounds.y0, x1, bounds.y1);
        x = x1;
    }
}

/// Squarified treemap (Bruls, Huizing, van Wijk), row by row.
///
/// Rows are grown greedily while the worst aspect ratio in the row does not
/// get worse. Each finished row takes a strip along the shorter side of the
/// remaining box. Children keep their input order.
fn squarify(ratio: f64, weights: &[f64], total: f64, bounds: Rect, out: &mut [Rect]) {
    let n = weights.len();
    let (mut x0, mut y0, mut x1, mut y1) = (bounds.x0, bounds.y0, bounds.x1, bounds.y1);
    let mut remaining = total;
    let mut i0 = 0;
    let mut i1 = 0;

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Find the next non-empty child.
        let mut sum = 0.0;
        while i1 < n {
            sum = weights[i1];
            i1 += 1;
            if sum > 0.0 {
                break;
            }
        }
        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = (dy / dx).max(dx / dy) / (remaining * ratio);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        // Keep adding children while the aspect ratio holds or improves.
        while i1 < n {
            let value = weights[i1];
            let candidate = sum + value;
            let lo = min_value.min(value);
            let hi = max_value.max(value);
            beta = candidate * candidate * alpha;
            let new_ratio = (hi / beta).max(beta / lo);
            if new_ratio > min_ratio {
                break;
            }
            sum = candidate;
            min_value = lo;
            max_value = hi;
            min_ratio = new_ratio;
            i1 += 1;
        }

        if dx < dy {
            // Horizontal row across the top.
            let row_y1 = if remaining > 0.0 { y0 + dy * sum / remaining } else { y1 };
            dice(weights, i0..i1, sum, Rect::new(x0, y0, x1, row_y1), out);
            y0 = row_y1;
        } else {
            // Vertical column on the left.
            let col_x1 = if remaining > 0.0 { x0 + dx * sum / remaining } else { x1 };
            slice(weights, i0..i1, sum, Rect::new(x0, y0, col_x1, y1), out);
            x0 = col_x1;
        }
        remaining -= sum;
        i0 = i1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_splits_widths_by_weight() {
        let mut out = [Rect::ZERO; 3];
        dice(&[1.0, 2.0, 1.0], 0..3, 4.0, Rect::new(0.0, 0.0, 400.0, 10.0), &mut out);
        assert_eq!(out[0], Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(out[1], Rect::new(100.0, 0.0, 300.0, 10.0));
        assert_eq!(out[2], Rect::new(300.0, 0.0, 400.0, 10.0));
    }

    #[test]
    fn squarify_equal_weights_in_a_square_makes_quadrants() {
        let mut out = [Rect::ZERO; 4];
        squarify(1.0, &[1.0; 4], 4.0, Rect::new(0.0, 0.0, 100.0, 100.0), &mut out);
        for r in out {
            assert!((r.area() - 2500.0).abs() < 1e-6, "{r:?}");
            assert!((r.width() - r.height()).abs() < 1e-6, "{r:?}");
        }
    }

    #[test]
    fn squarify_skips_leading_zero_weights() {
        let mut out = [Rect::ZERO; 3];
        squarify(GOLDEN_RATIO, &[0.0, 3.0, 1.0], 4.0, Rect::new(0.0, 0.0, 40.0, 10.0), &mut out);
        assert_eq!(out[0].area(), 0.0);
        assert!((out[1].area() - 300.0).abs() < 1e-6);
        assert!((out[2].area() - 100.0).abs() < 1e-6);
    }
}
