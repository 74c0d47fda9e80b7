// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric invariants of the partitioner over a spread of generated inputs.

use ecomap_treemap::{Tiling, Treemap, partition};
use kurbo::Rect;

/// Small deterministic generator so the inputs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn weight_sets() -> Vec<Vec<f64>> {
    let mut rng = Lcg(0x5eed);
    let mut sets = vec![vec![1.0], vec![5.0, 5.0], vec![100.0, 1.0, 1.0, 1.0]];
    for n in [3, 7, 12, 25] {
        sets.push((0..n).map(|_| 2.0 + (rng.next_f64() * 40.0).floor()).collect());
    }
    sets
}

const BOUNDS: Rect = Rect::new(0.0, 0.0, 3800.0, 2020.0);

fn contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

fn overlap(a: Rect, b: Rect) -> f64 {
    let i = a.intersect(b);
    i.width().max(0.0) * i.height().max(0.0)
}

#[test]
fn cells_are_contained_and_disjoint() {
    for weights in weight_sets() {
        let cells = partition(&weights, BOUNDS, 32.0);
        assert_eq!(cells.len(), weights.len());
        for (i, a) in cells.iter().enumerate() {
            assert!(contains(BOUNDS, *a), "cell {i} {a:?} escapes bounds");
            for b in &cells[i + 1..] {
                assert_eq!(overlap(*a, *b), 0.0, "{a:?} overlaps {b:?}");
            }
        }
    }
}

#[test]
fn rounded_cells_have_integer_coordinates() {
    for weights in weight_sets() {
        for cell in partition(&weights, BOUNDS, 32.0) {
            for v in [cell.x0, cell.y0, cell.x1, cell.y1] {
                assert_eq!(v, v.round());
            }
        }
    }
}

#[test]
fn padded_cells_keep_their_gap() {
    for weights in weight_sets() {
        let cells = Treemap::new().padding(32.0).partition(&weights, BOUNDS);
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                let gap_x = (b.x0 - a.x1).max(a.x0 - b.x1);
                let gap_y = (b.y0 - a.y1).max(a.y0 - b.y1);
                assert!(
                    gap_x >= 32.0 - 1e-9 || gap_y >= 32.0 - 1e-9,
                    "{a:?} and {b:?} are closer than the padding"
                );
            }
        }
    }
}

#[test]
fn unpadded_areas_are_proportional_and_tile_the_bounds() {
    for tiling in [
        Tiling::default(),
        Tiling::Slice,
        Tiling::Dice,
        Tiling::SliceDice,
    ] {
        for weights in weight_sets() {
            let cells = Treemap::new().tiling(tiling).partition(&weights, BOUNDS);
            let total: f64 = weights.iter().sum();
            let covered: f64 = cells.iter().map(|c| c.area()).sum();
            assert!((covered - BOUNDS.area()).abs() < 1e-6 * BOUNDS.area());

            for (cell, w) in cells.iter().zip(&weights) {
                let expected = BOUNDS.area() * w / total;
                assert!(
                    (cell.area() - expected).abs() < 1e-6 * BOUNDS.area(),
                    "{tiling:?}: area {} vs expected {expected}",
                    cell.area()
                );
            }
        }
    }
}

#[test]
fn squarify_keeps_aspect_ratios_reasonable() {
    let weights: Vec<f64> = (0..12).map(|i| f64::from(2 + i)).collect();
    let cells = Treemap::new().partition(&weights, BOUNDS);
    for cell in cells {
        let aspect = (cell.width() / cell.height()).max(cell.height() / cell.width());
        assert!(aspect < 8.0, "{cell:?} is a sliver");
    }
}

#[test]
fn output_follows_input_order() {
    // With slice tiling order is visible as increasing y.
    let cells = Treemap::new()
        .tiling(Tiling::Slice)
        .partition(&[1.0, 2.0, 3.0], BOUNDS);
    assert!(cells[0].y1 <= cells[1].y0 && cells[1].y1 <= cells[2].y0);
}
