// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Column tracks of a `repeat(auto-fill, minmax(min, 1fr))` grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct AutoFill {
    pub(crate) columns: usize,
    pub(crate) track: f64,
    pub(crate) gap: f64,
}

impl AutoFill {
    /// As many `min`-wide tracks as fit in `available`, then stretched to fill it.
    ///
    /// There is always at least one track, and tracks never shrink below `min`.
    pub(crate) fn new(available: f64, min: f64, gap: f64) -> Self {
        let available = available.max(0.0);
        let per = (min + gap).max(f64::EPSILON);
        let columns = (((available + gap) / per).floor() as usize).max(1);
        let track = ((available - gap * (columns - 1) as f64) / columns as f64).max(min);
        Self {
            columns,
            track,
            gap,
        }
    }

    /// Left edge of `column`, relative to the grid origin.
    pub(crate) fn x(&self, column: usize) -> f64 {
        column as f64 * (self.track + self.gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_stretch_to_fill() {
        let g = AutoFill::new(700.0, 160.0, 24.0);
        assert_eq!(g.columns, 3);
        assert!((g.track * 3.0 + 48.0 - 700.0).abs() < 1e-9);
        assert!((g.x(2) - 2.0 * (g.track + 24.0)).abs() < 1e-9);
    }

    #[test]
    fn narrow_grids_keep_one_min_track() {
        let g = AutoFill::new(50.0, 160.0, 24.0);
        assert_eq!(g.columns, 1);
        assert_eq!(g.track, 160.0);
    }

    #[test]
    fn exact_fit_counts_every_track() {
        // 2 * 100 + 1 * 16 = 216.
        assert_eq!(AutoFill::new(216.0, 100.0, 16.0).columns, 2);
        assert_eq!(AutoFill::new(215.0, 100.0, 16.0).columns, 1);
    }
}
