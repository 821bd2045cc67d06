// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level layout and the rebuilt-on-change map cache.

use alloc::vec::Vec;

use canopy_tree::{Level, Pre, Slot, TreeSource, expand_from_roots};
use kurbo::Size;

use crate::{LayoutOptions, LevelBands, LevelRegions, Payload, Region};

/// Lays out one level's slot list over `available_width`.
///
/// The candidate per-node width divides the available width by the slot
/// count, minus the gap count in consistent-spacing mode below the root
/// (the root level never adjusts). A candidate below
/// [`LayoutOptions::min_region_width`] collapses the level into a single
/// aggregated region covering every real node id, sorted ascending.
#[must_use]
pub fn layout_level(
    level: &Level,
    depth: usize,
    available_width: f64,
    options: &LayoutOptions,
) -> Vec<Region> {
    if level.node_count == 0 || available_width <= 0.0 {
        return Vec::new();
    }

    let gap_adjust = if options.consistent_spacing && depth > 0 {
        level.gap_count
    } else {
        0
    };
    let denominator = level.slots.len() - gap_adjust;
    let width = available_width / denominator as f64;

    if width < options.min_region_width {
        let ids: Vec<Pre> = level.nodes().collect();
        debug_assert!(
            ids.windows(2).all(|pair| pair[0] < pair[1]),
            "document order must be ascending within a level"
        );
        return alloc::vec![Region {
            x: 0.0,
            width: available_width,
            payload: Payload::Group(ids),
        }];
    }

    let mut regions = Vec::with_capacity(level.node_count);
    let mut x = 0.0;
    for slot in &level.slots {
        match *slot {
            Slot::Gap => {
                if !options.consistent_spacing {
                    x += width;
                }
            }
            Slot::Node(pre) => {
                regions.push(Region {
                    x,
                    width,
                    payload: Payload::Node(pre),
                });
                x += width;
            }
        }
    }
    regions
}

/// Cached per-level region lists for one viewport and tree snapshot.
///
/// The map owns nothing of the tree; it is derived data, rebuilt in full
/// whenever the viewport size or the snapshot changes and immutable in
/// between. Hit testing and overlays read it without further coordination
/// because a rebuild replaces the whole structure at once.
#[derive(Clone, Debug)]
pub struct TreeMap {
    options: LayoutOptions,
    viewport: Size,
    bands: LevelBands,
    levels: Vec<LevelRegions>,
}

impl TreeMap {
    /// Creates an empty map; nothing is laid out until [`TreeMap::rebuild`].
    #[must_use]
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            bands: LevelBands::new(0.0, 1, &options),
            options,
            viewport: Size::ZERO,
            levels: Vec::new(),
        }
    }

    /// Rebuilds the layout for a snapshot, root list, and viewport.
    ///
    /// A viewport with a non-positive dimension clears the map: there is
    /// nothing to lay out, and every subsequent query reports "not found".
    pub fn rebuild<T: TreeSource>(&mut self, tree: &T, roots: &[Pre], viewport: Size) {
        self.viewport = viewport;
        self.levels.clear();
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }

        self.bands = LevelBands::new(viewport.height, tree.max_depth() + 1, &self.options);
        for (depth, level) in expand_from_roots(tree, roots).iter().enumerate() {
            let regions = layout_level(level, depth, viewport.width, &self.options);
            self.levels.push(LevelRegions::new(
                self.bands.y_of(depth),
                self.bands.node_height(),
                regions,
            ));
        }
    }

    /// Drops all cached geometry.
    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// The per-level region lists, root first.
    #[must_use]
    pub fn levels(&self) -> &[LevelRegions] {
        &self.levels
    }

    /// The region list of one level.
    #[must_use]
    pub fn level(&self, level: usize) -> Option<&LevelRegions> {
        self.levels.get(level)
    }

    /// Whether anything is laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The vertical band geometry of the current build.
    #[must_use]
    pub const fn bands(&self) -> &LevelBands {
        &self.bands
    }

    /// The viewport of the current build.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// The options this map lays out with.
    #[must_use]
    pub const fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// The built level whose node band contains `y`, if any.
    #[must_use]
    pub fn level_at_y(&self, y: f64) -> Option<usize> {
        self.bands
            .level_at_y(y)
            .filter(|&level| level < self.levels.len())
    }
}
