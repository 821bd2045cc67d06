// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deterministic level-shading rule and color palette.

use canopy_tree::NodeKind;

use crate::Color;

/// Levels at or beyond this depth all share the darkest shade.
pub const SHADE_DEPTH_CAP: usize = 11;

/// Per-level shade step, subtracted from each channel once per level.
const SHADE_STEP: (u8, u8, u8) = (0x12, 0x10, 0x08);

/// Colors for every role a frame can contain.
///
/// The exact values are presentation defaults; the contract the passes
/// rely on is the *rule*: [`Palette::level_fill`] and
/// [`Palette::level_stroke`] darken monotonically with the level index up
/// to [`SHADE_DEPTH_CAP`] and are constant beyond it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Region fill at level 0.
    pub node_fill: Color,
    /// Region outline at level 0.
    pub node_stroke: Color,
    /// Marked regions, ticks, ancestor outlines, and the selection
    /// rectangle.
    pub mark: Color,
    /// Outline of the focused region itself.
    pub focus: Color,
    /// Background behind chain labels.
    pub label_back: Color,
    /// Chain label text.
    pub label_text: Color,
    /// Label text for element and document nodes.
    pub element_text: Color,
    /// Label text for text nodes.
    pub text_text: Color,
    /// Label text for comment nodes.
    pub comment_text: Color,
    /// Label text for processing instructions.
    pub pi_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            node_fill: Color::from_rgb(0xEDEFF7),
            node_stroke: Color::from_rgb(0xC9CFE7),
            mark: Color::from_rgb(0xFF0000),
            focus: Color::from_rgb(0x035FC7),
            label_back: Color::from_rgb(0x5D6FB7),
            label_text: Color::WHITE,
            element_text: Color::BLACK,
            text_text: Color::from_rgb(0x000F87),
            comment_text: Color::from_rgb(0x00FF00),
            pi_text: Color::from_rgb(0xFFC0CB),
        }
    }
}

/// Darkens `base` by one shade step per level, clamped at the cap.
fn shaded(base: Color, level: usize) -> Color {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the cap keeps the level far below u8::MAX"
    )]
    let steps = level.min(SHADE_DEPTH_CAP) as u8;
    Color {
        r: base.r.saturating_sub(steps.saturating_mul(SHADE_STEP.0)),
        g: base.g.saturating_sub(steps.saturating_mul(SHADE_STEP.1)),
        b: base.b.saturating_sub(steps.saturating_mul(SHADE_STEP.2)),
    }
}

impl Palette {
    /// Region fill for a level; darkens with depth up to the cap.
    #[must_use]
    pub fn level_fill(&self, level: usize) -> Color {
        shaded(self.node_fill, level)
    }

    /// Region outline for a level; darkens with depth up to the cap.
    #[must_use]
    pub fn level_stroke(&self, level: usize) -> Color {
        shaded(self.node_stroke, level)
    }

    /// Label text color for a node kind.
    #[must_use]
    pub fn kind_color(&self, kind: NodeKind) -> Color {
        match kind {
            NodeKind::Element | NodeKind::Document => self.element_text,
            NodeKind::Text => self.text_text,
            NodeKind::Comment => self.comment_text,
            NodeKind::ProcessingInstruction => self.pi_text,
        }
    }
}
