// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal range queries for rubber-band selection.

use alloc::vec::Vec;

use canopy_layout::{LevelRegions, Payload, TreeMap};
use canopy_tree::Pre;

/// Collects the node ids of one level whose regions intersect
/// `[left, right]`.
///
/// Intersection semantics: a region is included as soon as its span touches
/// the selection span, regardless of where the selection's edges fall. For
/// an aggregated level, the proportional index range covering the
/// overlapping part of the span is reported, both boundary indices
/// inclusive.
pub fn ids_in_span(level: &LevelRegions, left: f64, right: f64, out: &mut Vec<Pre>) {
    let (left, right) = if left <= right {
        (left, right)
    } else {
        (right, left)
    };

    if let Some((region, ids)) = level.aggregate() {
        if ids.is_empty() || region.width <= 0.0 {
            return;
        }
        if right < region.x || left > region.x + region.width {
            return;
        }
        let lo_x = (left - region.x).max(0.0);
        let hi_x = (right - region.x).min(region.width);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "offsets are clamped non-negative and truncation is the intended floor"
        )]
        let position = |offset: f64| {
            ((ids.len() as f64 * offset / region.width) as usize).min(ids.len() - 1)
        };
        out.extend_from_slice(&ids[position(lo_x)..=position(hi_x)]);
        return;
    }

    let regions = level.regions();
    let start = regions.partition_point(|region| region.x + region.width < left);
    for region in &regions[start..] {
        if region.x > right {
            break;
        }
        if let Payload::Node(pre) = region.payload {
            out.push(pre);
        }
    }
}

/// Collects every node id whose region intersects the given rectangle.
///
/// Levels whose node band intersects the vertical span contribute their
/// [`ids_in_span`] results; the combined set is deduplicated and sorted
/// ascending, ready to publish as a mark set.
#[must_use]
pub fn ids_in_rect(map: &TreeMap, left: f64, top: f64, right: f64, bottom: f64) -> Vec<Pre> {
    let (top, bottom) = if top <= bottom {
        (top, bottom)
    } else {
        (bottom, top)
    };

    let mut ids = Vec::new();
    for level in map.levels() {
        if level.intersects_y(top, bottom) {
            ids_in_span(level, left, right, &mut ids);
        }
    }
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use canopy_layout::{LevelRegions, Payload, Region};
    use canopy_tree::Pre;

    use super::ids_in_span;

    fn individual_level(y: f64, ids: &[Pre], width: f64) -> LevelRegions {
        let regions: Vec<Region> = ids
            .iter()
            .enumerate()
            .map(|(i, &pre)| Region {
                x: i as f64 * width,
                width,
                payload: Payload::Node(pre),
            })
            .collect();
        LevelRegions::new(y, 16.0, regions)
    }

    #[test]
    fn span_reports_every_intersecting_region() {
        let level = individual_level(0.0, &[1, 2, 3, 4, 5], 10.0);
        let mut out = Vec::new();
        // 12..=33 touches regions 1, 2, and 3.
        ids_in_span(&level, 12.0, 33.0, &mut out);
        assert_eq!(out, vec![2, 3, 4]);
    }

    #[test]
    fn span_running_past_the_last_region_is_not_prefix_only() {
        let level = individual_level(0.0, &[1, 2, 3, 4], 10.0);
        let mut out = Vec::new();
        // The right edge falls far outside any region; everything from the
        // left edge on is still reported.
        ids_in_span(&level, 25.0, 1000.0, &mut out);
        assert_eq!(out, vec![3, 4]);
    }

    #[test]
    fn span_outside_all_regions_is_empty() {
        let level = individual_level(0.0, &[1, 2], 10.0);
        let mut out = Vec::new();
        ids_in_span(&level, 21.0, 30.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn reversed_edges_are_normalized() {
        let level = individual_level(0.0, &[1, 2, 3], 10.0);
        let mut out = Vec::new();
        ids_in_span(&level, 25.0, 5.0, &mut out);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn aggregated_span_is_proportional_and_inclusive() {
        let ids: Vec<Pre> = (0..10).collect();
        let level = LevelRegions::new(
            0.0,
            16.0,
            vec![Region {
                x: 0.0,
                width: 100.0,
                payload: Payload::Group(ids),
            }],
        );
        let mut out = Vec::new();
        // 30..60 covers positions 3 through 6, both ends inclusive.
        ids_in_span(&level, 30.0, 60.0, &mut out);
        assert_eq!(out, vec![3, 4, 5, 6]);

        out.clear();
        // A span past both edges clamps to the full array.
        ids_in_span(&level, -10.0, 500.0, &mut out);
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn aggregated_span_misses_when_disjoint() {
        let level = LevelRegions::new(
            0.0,
            16.0,
            vec![Region {
                x: 0.0,
                width: 100.0,
                payload: Payload::Group(vec![1, 2, 3]),
            }],
        );
        let mut out = Vec::new();
        ids_in_span(&level, 150.0, 200.0, &mut out);
        assert!(out.is_empty());
    }
}
