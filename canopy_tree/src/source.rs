// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree-snapshot accessor trait and node identity types.

use alloc::borrow::Cow;

/// Node identifier: the node's position in document order ("pre" order).
///
/// A `Pre` is unique and stable for the lifetime of a tree snapshot. It is
/// ascending in document order: a node's value is smaller than those of all
/// of its descendants, and siblings are ordered left to right.
pub type Pre = u32;

/// Kind of a document node.
///
/// The kind does not influence layout; it selects label text color and
/// lets hosts distinguish structural from textual content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The document node itself.
    Document,
    /// An element node.
    Element,
    /// A text node.
    Text,
    /// A comment node.
    Comment,
    /// A processing instruction.
    ProcessingInstruction,
}

/// Read-only view of a host-owned tree snapshot.
///
/// Canopy never stores tree structure of its own; everything is derived from
/// this trait per rebuild. Implementations are expected to be cheap to query
/// (all methods are called O(total node count) times during a rebuild) and
/// to tolerate stale ids by returning empty iterators / `None` rather than
/// panicking. The snapshot must not change between a rebuild and the queries
/// that read its derived layout; hosts signal changes by rebuilding.
pub trait TreeSource {
    /// Children of `pre` in document order. Empty for leaves and stale ids.
    fn children(&self, pre: Pre) -> impl Iterator<Item = Pre>;

    /// Parent of `pre`, or `None` for roots and stale ids.
    fn parent(&self, pre: Pre) -> Option<Pre>;

    /// The node's kind.
    fn kind(&self, pre: Pre) -> NodeKind;

    /// Label text for the node: the tag name for elements, the text value
    /// otherwise. `None` when the node has nothing to show.
    fn label(&self, pre: Pre) -> Option<Cow<'_, str>>;

    /// Number of nodes in the subtree rooted at `pre`, including `pre`.
    fn subtree_size(&self, pre: Pre) -> usize;

    /// Maximum depth of the snapshot, with roots at depth 0.
    ///
    /// Used to distribute vertical space across levels before expansion
    /// runs; an overestimate spreads levels further apart, an underestimate
    /// compresses them, neither is an error.
    fn max_depth(&self) -> usize;
}
