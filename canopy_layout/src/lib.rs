// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_layout --heading-base-level=0

//! Canopy Layout: level-ordered region layout with graceful aggregation.
//!
//! Given a tree snapshot (via [`canopy_tree::TreeSource`]) and a viewport,
//! this crate assigns every node a screen region, grouped by breadth-first
//! level. The hard constraint is that a level may hold far more nodes than
//! the viewport has pixels; layout then degrades deliberately instead of
//! producing sub-pixel noise:
//!
//! - While the candidate per-node width stays at or above
//!   [`LayoutOptions::min_region_width`], each node gets its own
//!   [`Region`] of uniform width, left to right in document order.
//! - Below that threshold the whole level collapses into a single
//!   *aggregated* region spanning the available width, whose payload is the
//!   sorted array of every node id at the level. Per-node addressability is
//!   traded for a usable region size; `canopy_hit` compensates with
//!   proportional interpolation.
//!
//! The result of a build is a [`TreeMap`]: per-level region lists plus the
//! vertical band geometry, cached until the viewport or the snapshot
//! changes. Rebuilds are full (never incremental), deterministic, and
//! resize-stable: identical inputs produce bit-identical geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_layout::{LayoutOptions, TreeMap};
//! use kurbo::Size;
//! # use std::borrow::Cow;
//! # use canopy_tree::{NodeKind, Pre, TreeSource};
//! # struct Tiny;
//! # impl TreeSource for Tiny {
//! #     fn children(&self, pre: Pre) -> impl Iterator<Item = Pre> {
//! #         let kids: &[Pre] = if pre == 0 { &[1, 2, 3] } else { &[] };
//! #         kids.iter().copied()
//! #     }
//! #     fn parent(&self, pre: Pre) -> Option<Pre> { (pre > 0).then_some(0) }
//! #     fn kind(&self, _pre: Pre) -> NodeKind { NodeKind::Element }
//! #     fn label(&self, _pre: Pre) -> Option<Cow<'_, str>> { None }
//! #     fn subtree_size(&self, pre: Pre) -> usize { if pre == 0 { 4 } else { 1 } }
//! #     fn max_depth(&self) -> usize { 1 }
//! # }
//!
//! let mut map = TreeMap::new(LayoutOptions::default());
//! map.rebuild(&Tiny, &[0], Size::new(300.0, 200.0));
//!
//! // One region for the root, three for its children.
//! assert_eq!(map.levels().len(), 2);
//! assert_eq!(map.levels()[1].regions().len(), 3);
//! assert_eq!(map.levels()[1].regions()[0].width, 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod band;
mod map;
mod options;
mod region;

pub use band::LevelBands;
pub use map::{TreeMap, layout_level};
pub use options::LayoutOptions;
pub use region::{LevelRegions, Payload, Region};
