// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_overlay --heading-base-level=0

//! Canopy Overlay: mark and focus-chain highlights as data.
//!
//! Overlays never touch layout geometry. Both computations here read a
//! built [`canopy_layout::TreeMap`] and return plain highlight records; a
//! separate rendering pass (see `canopy_render`) turns those into drawing
//! calls. That split keeps the geometry immutable under rapid queries and
//! makes every overlay decision unit-testable without a surface.
//!
//! - [`mark_overlay`]: projects an externally owned, sorted mark set onto
//!   the layout. Marks on individual levels highlight their whole region;
//!   marks inside an aggregated level collapse to a tick at the
//!   interpolated position. Each mark id is consumed at most once across
//!   levels (a node lives on exactly one level).
//! - [`focus_chain`]: walks from a focused node toward the root, producing
//!   one [`ChainLink`] per ancestor with the connector geometry between
//!   consecutive links. An aggregated ancestor level contributes its whole
//!   region as the "parent region" plus an interpolated tick. The walk
//!   stops at level 0 or as soon as no parent region can be found.
//!
//! [`HighlightFlags`] names the roles a region can play in one frame;
//! roles compose (a region can be marked and focused at once) and feed the
//! deterministic shade rule on the rendering side.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chain;
mod marks;
#[cfg(test)]
mod test_tree;

pub use chain::{ChainLink, focus_chain};
pub use marks::{MarkHighlight, MarkShape, mark_overlay};

bitflags::bitflags! {
    /// Roles a region can play in the current frame's overlays.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HighlightFlags: u8 {
        /// The region's node is in the global mark set.
        const MARKED   = 0b0000_0001;
        /// The region is under the pointer (or externally focused).
        const FOCUSED  = 0b0000_0010;
        /// The region lies on the focus chain above the focused node.
        const ANCESTOR = 0b0000_0100;
    }
}
