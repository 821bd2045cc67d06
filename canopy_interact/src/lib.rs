// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_interact --heading-base-level=0

//! Canopy Interact: pointer gestures over a built layout.
//!
//! The [`Controller`] is a small state machine over two gesture states,
//! `Idle` and `Dragging`. It consumes [`PointerEvent`]s against a cached
//! [`canopy_layout::TreeMap`] and returns [`Action`]s instead of calling
//! into the host directly: focus changes, mark-set updates, navigation
//! requests. A host applies them to its [`Notifier`] with [`dispatch`], or
//! inspects them directly in tests.
//!
//! Keeping the interaction state explicit (no hidden view-instance fields)
//! makes every gesture deterministic and unit-testable without a live
//! rendering surface:
//!
//! - **Move** (idle): vertical position picks the level band, horizontal
//!   position picks the region (exact for individual regions, interpolated
//!   inside aggregates); a change of resolved node emits
//!   [`Action::Focus`]. A miss leaves the focus untouched.
//! - **Click**: requires a focused region. A single left click clears any
//!   drag mark; a double click on a non-root node asks the host to
//!   navigate into that subtree.
//! - **Wheel**: forward zooms into the focused node, backward walks the
//!   host's history.
//! - **Drag**: opens a 1×1 selection rectangle at the anchor, grows it on
//!   every move, and continuously republishes the set of node ids whose
//!   regions intersect the rectangle as the current mark set. Releasing
//!   finalizes the set.
//!
//! A busy host context ([`InteractContext::busy`]) abandons any gesture in
//! progress and swallows the event, so the view never mutates shared state
//! while the host is mid-update.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_interact::{Controller, InteractContext, PointerEvent};
//! use canopy_layout::{LayoutOptions, TreeMap};
//! use kurbo::Point;
//!
//! let map = TreeMap::new(LayoutOptions::default());
//! let mut controller = Controller::new();
//! let actions = controller.handle(
//!     &map,
//!     &InteractContext::default(),
//!     PointerEvent::Move(Point::new(10.0, 10.0)),
//! );
//! // Nothing laid out yet, so nothing to focus.
//! assert!(actions.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod controller;
mod event;

pub use action::{Action, MarkUpdate, Notifier, dispatch};
pub use controller::{Controller, FocusTarget, Gesture, InteractContext};
pub use event::{Button, PointerEvent, WheelDirection};

use smallvec::SmallVec;

/// Actions produced by one event; most events produce zero or one.
pub type Actions = SmallVec<[Action; 2]>;
