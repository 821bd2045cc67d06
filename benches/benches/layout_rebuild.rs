// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-rebuild throughput across tree shapes and viewport widths.

use std::borrow::Cow;

use canopy_layout::{LayoutOptions, TreeMap};
use canopy_tree::{NodeKind, Pre, TreeSource};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

/// A complete `arity`-ary tree of the given depth, preorder-numbered.
struct UniformTree {
    children: Vec<Vec<Pre>>,
    depth: usize,
}

impl UniformTree {
    fn new(arity: usize, depth: usize) -> Self {
        fn grow(children: &mut Vec<Vec<Pre>>, arity: usize, levels_left: usize) -> Pre {
            let id = children.len() as Pre;
            children.push(Vec::new());
            if levels_left > 0 {
                for _ in 0..arity {
                    let child = grow(children, arity, levels_left - 1);
                    children[id as usize].push(child);
                }
            }
            id
        }

        let mut children = Vec::new();
        grow(&mut children, arity, depth);
        Self { children, depth }
    }

    fn node_count(&self) -> usize {
        self.children.len()
    }
}

impl TreeSource for UniformTree {
    fn children(&self, pre: Pre) -> impl Iterator<Item = Pre> {
        self.children
            .get(pre as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    fn parent(&self, pre: Pre) -> Option<Pre> {
        self.children
            .iter()
            .position(|kids| kids.contains(&pre))
            .map(|parent| parent as Pre)
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
        self.depth
    }
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/rebuild");

    for (arity, depth) in [(4_usize, 5_usize), (10, 4), (50, 2)] {
        let tree = UniformTree::new(arity, depth);
        group.throughput(Throughput::Elements(tree.node_count() as u64));
        group.bench_with_input(
            BenchmarkId::new("uniform", format!("{arity}x{depth}")),
            &tree,
            |b, tree| {
                let mut map = TreeMap::new(LayoutOptions::default());
                b.iter(|| {
                    map.rebuild(tree, &[0], Size::new(1280.0, 720.0));
                    black_box(map.levels().len());
                });
            },
        );
    }

    // Aggregation-heavy: a very wide level in a narrow viewport.
    let wide = UniformTree::new(10_000, 1);
    group.throughput(Throughput::Elements(wide.node_count() as u64));
    group.bench_with_input(BenchmarkId::new("aggregated", 10_000), &wide, |b, tree| {
        let mut map = TreeMap::new(LayoutOptions::default());
        b.iter(|| {
            map.rebuild(tree, &[0], Size::new(200.0, 100.0));
            black_box(map.levels().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_rebuild);
criterion_main!(benches);
