// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_tree --heading-base-level=0

//! Canopy Tree: the document-tree seam and breadth-first level expansion.
//!
//! Canopy renders a document tree level by level. This crate owns the two
//! pieces every other Canopy crate builds on:
//!
//! - [`TreeSource`]: a small accessor trait hosts implement over their own
//!   tree snapshot (child enumeration, parent lookup, node kinds, labels).
//!   Node identity is a [`Pre`] value: the node's position in document
//!   order, unique and ascending for the lifetime of a snapshot.
//! - Level expansion: [`expand_level`] turns one level's slot list into the
//!   next level's by enumerating children in document order, and
//!   [`expand_from_roots`] drives that breadth-first until a level produces
//!   no nodes.
//!
//! Sibling groups from different parents stay visually separable: a
//! [`Slot::Gap`] is inserted before each parent's child group except the
//! first. Gaps are explicit variants, never sentinel ids, and every
//! [`Level`] carries its real-node and gap counts so layout can decide how
//! much width a gap consumes.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::borrow::Cow;
//!
//! use canopy_tree::{expand_from_roots, NodeKind, Pre, TreeSource};
//!
//! // A tiny fixed tree: 0 is the root with children 1 and 2.
//! struct Tiny;
//!
//! impl TreeSource for Tiny {
//!     fn children(&self, pre: Pre) -> impl Iterator<Item = Pre> {
//!         let kids: &[Pre] = if pre == 0 { &[1, 2] } else { &[] };
//!         kids.iter().copied()
//!     }
//!     fn parent(&self, pre: Pre) -> Option<Pre> {
//!         (pre > 0).then_some(0)
//!     }
//!     fn kind(&self, _pre: Pre) -> NodeKind {
//!         NodeKind::Element
//!     }
//!     fn label(&self, _pre: Pre) -> Option<Cow<'_, str>> {
//!         None
//!     }
//!     fn subtree_size(&self, pre: Pre) -> usize {
//!         if pre == 0 { 3 } else { 1 }
//!     }
//!     fn max_depth(&self) -> usize {
//!         1
//!     }
//! }
//!
//! let levels = expand_from_roots(&Tiny, &[0]);
//! assert_eq!(levels.len(), 2);
//! assert_eq!(levels[0].node_count, 1);
//! assert_eq!(levels[1].node_count, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expand;
mod source;

pub use expand::{Level, Slot, expand_from_roots, expand_level};
pub use source::{NodeKind, Pre, TreeSource};
