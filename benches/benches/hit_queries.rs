// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-query cost of exact search, interpolation, and span collection.

use std::borrow::Cow;

use canopy_hit::{hit_test_x, ids_in_rect, locate, region_of};
use canopy_layout::{LayoutOptions, TreeMap};
use canopy_tree::{NodeKind, Pre, TreeSource};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

/// A root with `fanout` leaf children, ids `1..=fanout`.
struct WideTree {
    fanout: u32,
}

impl TreeSource for WideTree {
    fn children(&self, pre: Pre) -> impl Iterator<Item = Pre> {
        (pre == 0)
            .then(|| 1..=self.fanout)
            .into_iter()
            .flatten()
    }

    fn parent(&self, pre: Pre) -> Option<Pre> {
        (pre > 0).then_some(0)
    }

    fn kind(&self, _pre: Pre) -> NodeKind {
        NodeKind::Element
    }

    fn label(&self, _pre: Pre) -> Option<Cow<'_, str>> {
        None
    }

    fn subtree_size(&self, _pre: Pre) -> usize {
        1
    }

    fn max_depth(&self) -> usize {
        1
    }
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/queries");

    for fanout in [100_u32, 10_000] {
        let tree = WideTree { fanout };
        // Wide enough that every node keeps its own region.
        let mut individual = TreeMap::new(LayoutOptions::default());
        individual.rebuild(&tree, &[0], Size::new(fanout as f64 * 4.0, 400.0));
        // Narrow enough that the child level aggregates.
        let mut aggregated = TreeMap::new(LayoutOptions::default());
        aggregated.rebuild(&tree, &[0], Size::new(100.0, 400.0));

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("region_of", fanout),
            &individual,
            |b, map| {
                let level = &map.levels()[1];
                b.iter(|| black_box(region_of(level, black_box(fanout / 2))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hit_test_interpolated", fanout),
            &aggregated,
            |b, map| {
                let level = &map.levels()[1];
                b.iter(|| black_box(hit_test_x(level, black_box(51.3))));
            },
        );

        group.bench_with_input(BenchmarkId::new("locate", fanout), &individual, |b, map| {
            b.iter(|| black_box(locate(map, black_box(fanout - 1))));
        });

        group.bench_with_input(
            BenchmarkId::new("ids_in_rect", fanout),
            &individual,
            |b, map| {
                let width = map.viewport().width;
                b.iter(|| {
                    black_box(ids_in_rect(
                        map,
                        width / 3.0,
                        0.0,
                        2.0 * width / 3.0,
                        400.0,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
