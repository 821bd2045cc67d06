// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first level expansion with explicit gap slots.

use alloc::vec::Vec;

use crate::{Pre, TreeSource};

/// One position in a level's slot list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Visual separation between sibling groups of different parents.
    Gap,
    /// A real node.
    Node(Pre),
}

/// One breadth-first level of the expanded tree.
///
/// `slots` is in document order. `node_count` and `gap_count` are carried
/// separately because layout needs both: the real node count determines the
/// payload set, and the gap count adjusts the per-node width denominator in
/// consistent-spacing mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Level {
    /// Nodes and gaps in document order.
    pub slots: Vec<Slot>,
    /// Number of `Slot::Node` entries.
    pub node_count: usize,
    /// Number of `Slot::Gap` entries.
    pub gap_count: usize,
}

impl Level {
    /// Builds the root level from a host-supplied root list.
    ///
    /// Roots are independent subtrees, so the same separation rule applies
    /// as during expansion: a gap before every root except the first.
    #[must_use]
    pub fn from_roots(roots: &[Pre]) -> Self {
        let mut slots = Vec::with_capacity(roots.len().saturating_mul(2));
        let mut gap_count = 0;
        for (i, &root) in roots.iter().enumerate() {
            if i > 0 {
                slots.push(Slot::Gap);
                gap_count += 1;
            }
            slots.push(Slot::Node(root));
        }
        Self {
            slots,
            node_count: roots.len(),
            gap_count,
        }
    }

    /// Returns `true` if the level holds no real nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// The real node ids of this level, in document order.
    pub fn nodes(&self) -> impl Iterator<Item = Pre> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Node(pre) => Some(*pre),
            Slot::Gap => None,
        })
    }
}

/// Expands one level into the next.
///
/// For every `Slot::Node` in `level`, the node's children are appended in
/// document order. A `Slot::Gap` is inserted before each node's child group
/// except the first node's, so independent subtrees stay visually separated.
/// The gap is inserted even when the node turns out to be childless; the
/// width denominator compensates via `gap_count`. Input gaps are skipped.
pub fn expand_level<T: TreeSource>(tree: &T, level: &Level) -> Level {
    let mut slots = Vec::new();
    let mut node_count = 0;
    let mut gap_count = 0;
    let mut first = true;

    for slot in &level.slots {
        let Slot::Node(parent) = *slot else {
            continue;
        };
        if !first {
            slots.push(Slot::Gap);
            gap_count += 1;
        }
        first = false;
        for child in tree.children(parent) {
            slots.push(Slot::Node(child));
            node_count += 1;
        }
    }

    Level {
        slots,
        node_count,
        gap_count,
    }
}

/// Expands the whole tree breadth-first, roots at level 0.
///
/// Expansion stops at the first level that produces zero real nodes; that
/// level is not included in the result. An empty root list yields an empty
/// result.
pub fn expand_from_roots<T: TreeSource>(tree: &T, roots: &[Pre]) -> Vec<Level> {
    let mut levels = Vec::new();
    let mut current = Level::from_roots(roots);

    while !current.is_empty() {
        let next = expand_level(tree, &current);
        levels.push(current);
        current = next;
    }

    levels
}
