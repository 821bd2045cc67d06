// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus chain: ancestor highlights computed as data.

use alloc::vec::Vec;

use canopy_hit::{position_in, region_index_of, x_of_position};
use canopy_layout::TreeMap;
use canopy_tree::{Pre, TreeSource};
use kurbo::{Line, Point};

use crate::HighlightFlags;

/// One step of the focus chain, focused node first, root last.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainLink {
    /// Level of this link.
    pub level: usize,
    /// Region index within the level. For an aggregated level this is the
    /// single aggregate region standing in for the actual node.
    pub region: usize,
    /// The node this link highlights.
    pub pre: Pre,
    /// The link's role: [`HighlightFlags::FOCUSED`] on the first link,
    /// [`HighlightFlags::ANCESTOR`] on the rest.
    pub flags: HighlightFlags,
    /// Absolute x of the interpolated marker when the region is
    /// aggregated; `None` for individual regions.
    pub tick_x: Option<f64>,
    /// Connector from this link down to the previous (child) link.
    /// `None` on the focused link itself.
    pub connector: Option<Line>,
}

/// Resolves `pre` within one level: region index plus aggregate tick.
fn link_at(map: &TreeMap, level_index: usize, pre: Pre) -> Option<(usize, Option<f64>)> {
    let level = map.level(level_index)?;
    if let Some((region, ids)) = level.aggregate() {
        let position = position_in(ids, pre)?;
        let tick = region.x + x_of_position(region.width, ids.len(), position);
        Some((0, Some(tick)))
    } else {
        region_index_of(level, pre).map(|index| (index, None))
    }
}

/// Computes the highlight chain from a focused node up to the root.
///
/// The chain starts with the focused node's own link and walks parent by
/// parent toward level 0. Each ancestor link carries the connector line
/// from its anchor (region center, or the interpolated tick inside an
/// aggregated region) down to the previous link's anchor. The walk stops
/// without error when the data source reports no parent or when the parent
/// cannot be found at the level above.
///
/// The returned chain is pure data; nothing in the layout is touched.
#[must_use]
pub fn focus_chain<T: TreeSource>(
    tree: &T,
    map: &TreeMap,
    level: usize,
    pre: Pre,
) -> Vec<ChainLink> {
    let mut links = Vec::new();
    let Some(focused_regions) = map.level(level) else {
        return links;
    };
    let Some((region, tick_x)) = link_at(map, level, pre) else {
        return links;
    };

    // Anchors are the interpolated tick inside aggregates, the region
    // center otherwise; each connector runs from the parent's anchor down
    // to the child's.
    let mut child_anchor = tick_x.unwrap_or_else(|| focused_regions.regions()[region].center_x());
    let mut child_top = focused_regions.y;
    links.push(ChainLink {
        level,
        region,
        pre,
        flags: HighlightFlags::FOCUSED,
        tick_x,
        connector: None,
    });

    let mut child_level = level;
    let mut child_pre = pre;
    while child_level > 0 {
        let Some(parent) = tree.parent(child_pre) else {
            break;
        };
        let parent_level = child_level - 1;
        let Some(parent_regions) = map.level(parent_level) else {
            break;
        };
        let Some((region, tick_x)) = link_at(map, parent_level, parent) else {
            break;
        };
        let parent_anchor =
            tick_x.unwrap_or_else(|| parent_regions.regions()[region].center_x());

        links.push(ChainLink {
            level: parent_level,
            region,
            pre: parent,
            flags: HighlightFlags::ANCESTOR,
            tick_x,
            connector: Some(Line::new(
                Point::new(
                    parent_anchor,
                    parent_regions.y + parent_regions.height + 1.0,
                ),
                Point::new(child_anchor, child_top - 1.0),
            )),
        });
        child_anchor = parent_anchor;
        child_top = parent_regions.y;
        child_level = parent_level;
        child_pre = parent;
    }

    links
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use canopy_layout::{LayoutOptions, TreeMap};
    use kurbo::Size;

    use super::focus_chain;
    use crate::HighlightFlags;
    use crate::test_tree::FixedTree;

    #[test]
    fn chain_walks_to_the_root() {
        let tree = FixedTree::sample();
        let mut map = TreeMap::new(LayoutOptions::default());
        map.rebuild(&tree, &[0], Size::new(300.0, 200.0));

        let chain = focus_chain(&tree, &map, 2, 7);
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.iter().map(|link| link.pre).collect::<Vec<_>>(),
            vec![7, 3, 0]
        );
        assert!(chain[0].connector.is_none());
        assert!(chain[1].connector.is_some());
        assert!(chain[2].connector.is_some());
        assert_eq!(chain[0].flags, HighlightFlags::FOCUSED);
        assert_eq!(chain[1].flags, HighlightFlags::ANCESTOR);
        assert_eq!(chain[2].flags, HighlightFlags::ANCESTOR);
    }

    #[test]
    fn connectors_bridge_the_band_spacing() {
        let tree = FixedTree::sample();
        let mut map = TreeMap::new(LayoutOptions::default());
        map.rebuild(&tree, &[0], Size::new(300.0, 200.0));

        let chain = focus_chain(&tree, &map, 1, 2);
        let connector = chain[1].connector.expect("root link has a connector");
        let level0 = &map.levels()[0];
        let level1 = &map.levels()[1];
        assert_eq!(connector.p0.y, level0.y + level0.height + 1.0);
        assert_eq!(connector.p1.y, level1.y - 1.0);
        // Both anchors are region centers here.
        assert_eq!(connector.p1.x, 150.0);
    }

    #[test]
    fn focused_root_yields_a_single_link() {
        let tree = FixedTree::sample();
        let mut map = TreeMap::new(LayoutOptions::default());
        map.rebuild(&tree, &[0], Size::new(300.0, 200.0));

        let chain = focus_chain(&tree, &map, 0, 0);
        assert_eq!(chain.len(), 1);
        assert!(chain[0].connector.is_none());
    }

    #[test]
    fn aggregated_link_carries_a_tick() {
        let tree = FixedTree::wide(200);
        let mut map = TreeMap::new(LayoutOptions::default());
        map.rebuild(&tree, &[0], Size::new(100.0, 100.0));
        assert!(map.levels()[1].is_aggregated());

        let chain = focus_chain(&tree, &map, 1, 100);
        assert_eq!(chain.len(), 2);
        let tick = chain[0].tick_x.expect("aggregate link has a tick");
        // Position 99 of 200 ids across 100 px.
        assert_eq!(tick, 49.5);
        // The connector ends at the tick's x.
        let connector = chain[1].connector.expect("root connector");
        assert_eq!(connector.p1.x, tick);
        assert!(chain[1].tick_x.is_none());
    }

    #[test]
    fn unknown_focus_produces_an_empty_chain() {
        let tree = FixedTree::sample();
        let mut map = TreeMap::new(LayoutOptions::default());
        map.rebuild(&tree, &[0], Size::new(300.0, 200.0));

        assert!(focus_chain(&tree, &map, 1, 42).is_empty());
        assert!(focus_chain(&tree, &map, 9, 1).is_empty());
    }
}
