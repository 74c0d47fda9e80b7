// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ecomap_treemap::{Tiling, Treemap};
use kurbo::Rect;

fn weights(n: usize) -> Vec<f64> {
    // Skewed like real catalogs: a few large categories and a long tail.
    (0..n).map(|i| 2.0 + (97 * i % 53) as f64).collect()
}

fn bench_partition(c: &mut Criterion) {
    let bounds = Rect::new(0.0, 0.0, 3800.0, 2040.0);
    let mut group = c.benchmark_group("treemap/partition");
    for n in [4usize, 16, 64, 256] {
        let w = weights(n);
        group.throughput(Throughput::Elements(n as u64));
        for (name, tiling) in [
            ("squarify", Tiling::default()),
            ("slice", Tiling::Slice),
            ("dice", Tiling::Dice),
        ] {
            let treemap = Treemap::new().tiling(tiling).padding(32.0).round(true);
            group.bench_with_input(BenchmarkId::new(name, n), &w, |b, w| {
                b.iter(|| black_box(treemap.partition(black_box(w), bounds)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
