// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout tuning knobs.

/// Tuning knobs for region layout.
///
/// The defaults reproduce the classic tree-view proportions; hosts mostly
/// override `node_height` to match their font metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// When `true` (the default), gaps between sibling groups are
    /// zero-width and excluded from the per-node width denominator, so
    /// every node at a level gets the same width regardless of how its
    /// siblings are grouped. When `false`, gaps consume one node width of
    /// empty space each.
    pub consistent_spacing: bool,
    /// Candidate widths below this collapse the level into one aggregated
    /// region.
    pub min_region_width: f64,
    /// Regions narrower than this are drawn without a label.
    pub min_label_width: f64,
    /// Height of each level's node band, typically the font height.
    pub node_height: f64,
    /// Lower bound on the empty space between level bands.
    pub min_level_distance: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            consistent_spacing: true,
            min_region_width: 2.0,
            min_label_width: 35.0,
            node_height: 16.0,
            min_level_distance: 5.0,
        }
    }
}
