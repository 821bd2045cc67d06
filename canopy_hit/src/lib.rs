// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_hit --heading-base-level=0

//! Canopy Hit: deterministic reverse mapping from coordinates to node ids.
//!
//! Every query in this crate is side-effect-free and reads a built
//! [`canopy_layout::TreeMap`] (or one of its level lists) without touching
//! it. Two families of lookups exist, matching the two region shapes layout
//! can produce:
//!
//! - **Exact**: individual regions are sorted by ascending node id, so
//!   [`region_of`] finds a node's region by binary search, and
//!   [`position_in`] tests membership in any sorted id array (aggregated
//!   payloads, mark sets). O(log n).
//! - **Proportional**: aggregated regions have no per-node geometry;
//!   [`pre_at_x`] approximates the node under a pixel by linear
//!   interpolation, clamped to the array bounds. The result is "the best
//!   node near this pixel", not an exact inverse of layout. O(1).
//!
//! On top of those, [`hit_test_x`] resolves a pointer x within a level,
//! [`locate`] finds the region of a known node id across all levels (the
//! focus-by-id path other views trigger), and [`ids_in_span`] /
//! [`ids_in_rect`] answer rubber-band selection queries: every node whose
//! region intersects the span is reported, deduplicated and sorted.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_layout::{LevelRegions, Payload, Region};
//!
//! let level = LevelRegions::new(
//!     0.0,
//!     16.0,
//!     vec![
//!         Region { x: 0.0, width: 50.0, payload: Payload::Node(3) },
//!         Region { x: 50.0, width: 50.0, payload: Payload::Node(7) },
//!     ],
//! );
//!
//! let region = canopy_hit::region_of(&level, 7).unwrap();
//! assert_eq!(region.x, 50.0);
//!
//! let hit = canopy_hit::hit_test_x(&level, 60.0).unwrap();
//! assert_eq!(hit.pre, 7);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod range;
mod search;

pub use range::{ids_in_rect, ids_in_span};
pub use search::{
    Hit, hit_test_x, locate, position_in, pre_at_x, region_index_of, region_of, x_of_position,
};

/// A node id located somewhere in a built layout.
///
/// `level` and `region` index into the map's level list and that level's
/// region list respectively.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Level index, root = 0.
    pub level: usize,
    /// Region index within the level, left to right.
    pub region: usize,
}
