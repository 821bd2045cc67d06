// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical band geometry: distributing levels over the viewport height.

use crate::LayoutOptions;

/// Vertical placement of level bands.
///
/// Every level occupies a band of `node_height`, separated by
/// `level_distance` of empty space. The distance stretches to fill the
/// viewport when the tree is shallow and clamps to the configured minimum
/// when it is deep, in which case lower levels simply run off the bottom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LevelBands {
    node_height: f64,
    level_distance: f64,
}

impl LevelBands {
    /// Computes band geometry for a viewport of `viewport_height` holding
    /// `level_count` levels.
    #[must_use]
    pub fn new(viewport_height: f64, level_count: usize, options: &LayoutOptions) -> Self {
        let levels = level_count.max(1) as f64;
        let height_left = viewport_height - levels * options.node_height;
        let level_distance = (height_left / levels).max(options.min_level_distance);
        Self {
            node_height: options.node_height,
            level_distance,
        }
    }

    /// Height of each node band.
    #[must_use]
    pub const fn node_height(&self) -> f64 {
        self.node_height
    }

    /// Empty space between consecutive bands.
    #[must_use]
    pub const fn level_distance(&self) -> f64 {
        self.level_distance
    }

    /// Top edge of the band for `level`.
    #[must_use]
    pub fn y_of(&self, level: usize) -> f64 {
        level as f64 * (self.node_height + self.level_distance)
    }

    /// The level whose node band contains `y`, if any.
    ///
    /// Positions in the empty space between bands resolve to `None`, as do
    /// negative positions. The result is not bounded by how many levels
    /// were actually built; callers clamp against their level list.
    #[must_use]
    pub fn level_at_y(&self, y: f64) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        let stride = self.node_height + self.level_distance;
        if stride <= 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "y / stride is non-negative and truncation is the intended floor"
        )]
        let level = (y / stride) as usize;
        (y - level as f64 * stride <= self.node_height).then_some(level)
    }
}

#[cfg(test)]
mod tests {
    use super::LevelBands;
    use crate::LayoutOptions;

    fn options() -> LayoutOptions {
        LayoutOptions {
            node_height: 10.0,
            min_level_distance: 5.0,
            ..LayoutOptions::default()
        }
    }

    #[test]
    fn distance_stretches_to_fill_the_viewport() {
        // Two levels of 10px in a 100px viewport leave 80px to split.
        let bands = LevelBands::new(100.0, 2, &options());
        assert_eq!(bands.level_distance(), 40.0);
        assert_eq!(bands.y_of(0), 0.0);
        assert_eq!(bands.y_of(1), 50.0);
    }

    #[test]
    fn distance_clamps_to_minimum_when_cramped() {
        let bands = LevelBands::new(50.0, 10, &options());
        assert_eq!(bands.level_distance(), 5.0);
    }

    #[test]
    fn level_at_y_hits_bands_and_misses_spacing() {
        let bands = LevelBands::new(100.0, 2, &options());
        // Band 0 spans 0..=10, spacing 10..50, band 1 spans 50..=60.
        assert_eq!(bands.level_at_y(0.0), Some(0));
        assert_eq!(bands.level_at_y(10.0), Some(0));
        assert_eq!(bands.level_at_y(25.0), None);
        assert_eq!(bands.level_at_y(50.0), Some(1));
        assert_eq!(bands.level_at_y(60.0), Some(1));
        assert_eq!(bands.level_at_y(-1.0), None);
    }
}
