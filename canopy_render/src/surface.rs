// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-primitive seam and a recording reference backend.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

/// An opaque sRGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Builds a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0x000000);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(0xFFFFFF);
}

/// The five primitives a rendering backend must provide.
///
/// Coordinates are viewport-space logical pixels, matching the layout.
/// Implementations decide rasterization details (line caps, anti-aliasing,
/// font); `text_width` must be consistent with `draw_text` so label
/// fitting and centering agree with what ends up on screen.
pub trait Surface {
    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    /// Draws a straight line.
    fn draw_line(&mut self, line: Line, color: Color);
    /// Measures the advance width of `text` in the surface's font.
    fn text_width(&mut self, text: &str) -> f64;
    /// Draws `text` with its top-left origin at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, color: Color);
}

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled rectangle.
    FillRect(Rect, Color),
    /// A stroked rectangle.
    StrokeRect(Rect, Color),
    /// A line.
    Line(Line, Color),
    /// A text run.
    Text(String, Point, Color),
}

/// A [`Surface`] that records operations instead of rasterizing.
///
/// Text is measured with a fixed per-character advance, which keeps label
/// fitting deterministic in tests and headless hosts.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    char_advance: f64,
}

impl RecordingSurface {
    /// Creates a recorder with a 6px monospace advance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_char_advance(6.0)
    }

    /// Creates a recorder with a custom per-character advance.
    #[must_use]
    pub fn with_char_advance(char_advance: f64) -> Self {
        Self {
            ops: Vec::new(),
            char_advance,
        }
    }

    /// The operations recorded so far, in order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drops all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::StrokeRect(rect, color));
    }

    fn draw_line(&mut self, line: Line, color: Color) {
        self.ops.push(DrawOp::Line(line, color));
    }

    fn text_width(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_advance
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color) {
        self.ops.push(DrawOp::Text(String::from(text), origin, color));
    }
}
