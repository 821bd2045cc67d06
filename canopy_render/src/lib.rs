// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_render --heading-base-level=0

//! Canopy Render: backend-agnostic drawing passes.
//!
//! Rendering in Canopy is the last, dumbest step: layout and overlays have
//! already decided *what* to show, and this crate turns those decisions
//! into calls against a five-primitive [`Surface`] trait (`fill_rect`,
//! `stroke_rect`, `draw_line`, `text_width`, `draw_text`). Backends are
//! pluggable; [`RecordingSurface`] is a reference implementation that logs
//! operations for tests and headless hosts.
//!
//! The passes compose over one frame, in order:
//!
//! 1. [`draw_base`]: every region, filled and stroked with the level shade,
//!    plus labels where the region is wide enough.
//! 2. [`draw_marks`]: highlights from [`canopy_overlay::mark_overlay`],
//!    full regions on individual levels and ticks inside aggregates.
//! 3. [`draw_focus_chain`]: the ancestor chain from
//!    [`canopy_overlay::focus_chain`], with connectors and per-link labels.
//! 4. [`draw_selection`]: the rubber-band rectangle while dragging.
//!
//! Shading is a deterministic function of the level index and nothing
//! else: [`Palette::level_fill`] and [`Palette::level_stroke`] darken
//! monotonically with depth up to [`SHADE_DEPTH_CAP`] and stay constant
//! beyond it. The default palette reproduces the classic tree view; hosts
//! may swap any color as long as they keep that rule.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod label;
mod passes;
mod shade;
mod surface;

pub use label::fit_label;
pub use passes::{draw_base, draw_focus_chain, draw_marks, draw_selection};
pub use shade::{Palette, SHADE_DEPTH_CAP};
pub use surface::{Color, DrawOp, RecordingSurface, Surface};
