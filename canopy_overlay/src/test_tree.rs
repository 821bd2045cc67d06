// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed in-memory tree shared by this crate's tests.

use alloc::borrow::Cow;
use alloc::vec;
use alloc::vec::Vec;

use canopy_tree::{NodeKind, Pre, TreeSource};

/// A tree described by explicit child lists, indexed by pre value.
pub(crate) struct FixedTree {
    children: Vec<Vec<Pre>>,
    depth: usize,
}

impl FixedTree {
    /// 0 -> [1, 2, 3]; 1 -> [4, 5], 2 -> [6], 3 -> [7, 8, 9].
    pub(crate) fn sample() -> Self {
        Self {
            children: vec![
                vec![1, 2, 3],
                vec![4, 5],
                vec![6],
                vec![7, 8, 9],
                vec![],
                vec![],
                vec![],
                vec![],
                vec![],
                vec![],
            ],
            depth: 2,
        }
    }

    /// A root with `fanout` leaf children, ids `1..=fanout`.
    pub(crate) fn wide(fanout: u32) -> Self {
        let kids: Vec<Pre> = (1..=fanout).collect();
        let mut children = vec![kids];
        children.extend((0..fanout).map(|_| Vec::new()));
        Self { children, depth: 1 }
    }
}

impl TreeSource for FixedTree {
    fn children(&self, pre: Pre) -> impl Iterator<Item = Pre> {
        self.children
            .get(pre as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    fn parent(&self, pre: Pre) -> Option<Pre> {
        self.children
            .iter()
            .position(|kids| kids.contains(&pre))
            .map(|parent| parent as Pre)
    }

    fn kind(&self, _pre: Pre) -> NodeKind {
        NodeKind::Element
    }

    fn label(&self, _pre: Pre) -> Option<Cow<'_, str>> {
        None
    }

    fn subtree_size(&self, pre: Pre) -> usize {
        1 + self
            .children
            .get(pre as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .len()
    }

    fn max_depth(&self) -> usize {
        self.depth
    }
}
