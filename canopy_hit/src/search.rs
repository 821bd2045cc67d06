// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact and proportional lookups over one level's regions.

use canopy_layout::{LevelRegions, Payload, Region, TreeMap};
use canopy_tree::Pre;

use crate::Location;

/// A pointer position resolved within one level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Index of the hit region within the level.
    pub region: usize,
    /// The resolved node id. Exact for individual regions, interpolated
    /// ("best node near this pixel") for aggregated ones.
    pub pre: Pre,
}

/// Binary search for `pre` among a level's individual regions, returning
/// the region's index within the level.
///
/// Aggregated levels have no per-node regions; this returns `None` there
/// and callers fall back to [`position_in`] + [`x_of_position`].
#[must_use]
pub fn region_index_of(level: &LevelRegions, pre: Pre) -> Option<usize> {
    if level.is_aggregated() {
        return None;
    }
    level
        .regions()
        .binary_search_by_key(&pre, |region| match region.payload {
            Payload::Node(id) => id,
            // Unreachable past the aggregation check; order under the
            // search key is still total.
            Payload::Group(_) => Pre::MAX,
        })
        .ok()
}

/// Finds the individual region representing `pre` by binary search.
///
/// See [`region_index_of`] for the aggregated-level contract.
#[must_use]
pub fn region_of(level: &LevelRegions, pre: Pre) -> Option<&Region> {
    region_index_of(level, pre).map(|index| &level.regions()[index])
}

/// Exact membership test in a sorted ascending id array.
///
/// Used both for aggregated-region payloads and for mark sets.
#[must_use]
pub fn position_in(ids: &[Pre], pre: Pre) -> Option<usize> {
    ids.binary_search(&pre).ok()
}

/// Approximates the node id at `x` within an aggregated region's span.
///
/// Linear interpolation: `index = floor(len * x / width)`, clamped to
/// `[0, len - 1]`. Document-order proximity is preserved; exact identity is
/// not guaranteed. An empty array or non-positive width yields `None`.
#[must_use]
pub fn pre_at_x(ids: &[Pre], width: f64, x: f64) -> Option<Pre> {
    if ids.is_empty() || width <= 0.0 {
        return None;
    }
    let ratio = (x / width).clamp(0.0, 1.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the product is non-negative and truncation is the intended floor"
    )]
    let index = ((ids.len() as f64 * ratio) as usize).min(ids.len() - 1);
    Some(ids[index])
}

/// The x offset of `position` within an aggregated region of `width`.
///
/// Forward counterpart of [`pre_at_x`], used to place mark ticks and chain
/// connectors inside aggregated regions.
#[must_use]
pub fn x_of_position(width: f64, len: usize, position: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    width * position as f64 / len as f64
}

/// Resolves a pointer x within a level to a region and node id.
#[must_use]
pub fn hit_test_x(level: &LevelRegions, x: f64) -> Option<Hit> {
    let regions = level.regions();
    // Last region whose left edge is at or before x; regions are ordered
    // left to right.
    let candidate = regions.partition_point(|region| region.x <= x).checked_sub(1)?;
    let region = &regions[candidate];
    if !region.contains_x(x) {
        return None;
    }
    let pre = match &region.payload {
        Payload::Node(pre) => *pre,
        Payload::Group(ids) => pre_at_x(ids, region.width, x - region.x)?,
    };
    Some(Hit {
        region: candidate,
        pre,
    })
}

/// Finds the region holding a known node id anywhere in the map.
///
/// This is the focus-by-id path: another view reports a focused node and
/// the layout has to find it without a pointer position. Each level is
/// checked with the search matching its shape; a node belongs to exactly
/// one level, so the first match wins.
#[must_use]
pub fn locate(map: &TreeMap, pre: Pre) -> Option<Location> {
    for (depth, level) in map.levels().iter().enumerate() {
        if let Some((_, ids)) = level.aggregate() {
            if position_in(ids, pre).is_some() {
                return Some(Location {
                    level: depth,
                    region: 0,
                });
            }
        } else if let Some(region) = region_index_of(level, pre) {
            return Some(Location {
                level: depth,
                region,
            });
        }
    }
    None
}
