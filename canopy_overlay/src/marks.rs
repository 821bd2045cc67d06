// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projecting the global mark set onto a built layout.

use alloc::vec::Vec;

use canopy_hit::{position_in, region_index_of, x_of_position};
use canopy_layout::TreeMap;
use canopy_tree::Pre;

/// How a single mark shows up at its level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkShape {
    /// The whole individual region is highlighted; the index addresses the
    /// level's region list.
    Region(usize),
    /// A vertical tick at the given absolute x, inside an aggregated
    /// region.
    Tick(f64),
}

/// One mark resolved against the layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkHighlight {
    /// Level the mark was found on.
    pub level: usize,
    /// The marked node id.
    pub pre: Pre,
    /// Where and how to highlight it.
    pub shape: MarkShape,
}

/// Resolves every mark in `marks` (sorted ascending, externally owned)
/// against the layout.
///
/// Each id is consumed by the first level it is found on; ids absent from
/// the layout produce nothing. The mark set itself is never modified.
#[must_use]
pub fn mark_overlay(map: &TreeMap, marks: &[Pre]) -> Vec<MarkHighlight> {
    let mut remaining: Vec<Option<Pre>> = marks.iter().copied().map(Some).collect();
    let mut highlights = Vec::new();

    for (depth, level) in map.levels().iter().enumerate() {
        if let Some((region, ids)) = level.aggregate() {
            for slot in &mut remaining {
                let Some(pre) = *slot else { continue };
                if let Some(position) = position_in(ids, pre) {
                    highlights.push(MarkHighlight {
                        level: depth,
                        pre,
                        shape: MarkShape::Tick(
                            region.x + x_of_position(region.width, ids.len(), position),
                        ),
                    });
                    *slot = None;
                }
            }
        } else {
            for slot in &mut remaining {
                let Some(pre) = *slot else { continue };
                if let Some(index) = region_index_of(level, pre) {
                    highlights.push(MarkHighlight {
                        level: depth,
                        pre,
                        shape: MarkShape::Region(index),
                    });
                    *slot = None;
                }
            }
        }
    }

    highlights
}
