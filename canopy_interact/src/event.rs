// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer event model.

use kurbo::Point;

/// Mouse button identifier. Button 1 is the primary button.
pub type Button = u8;

/// Wheel rotation direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Rotated toward the user ("zoom in").
    Forward,
    /// Rotated away from the user ("go back").
    Back,
}

/// A pointer event in viewport coordinates.
///
/// Hosts translate their native input events into this form. Coordinates
/// share the space of the built layout; no transform is applied here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved without a button held.
    Move(Point),
    /// A click; `count` is 1 for single clicks, 2 for double clicks.
    Click {
        /// Button that was clicked.
        button: Button,
        /// Consecutive click count.
        count: u8,
        /// Pointer position at click time.
        pos: Point,
    },
    /// The wheel rotated one step.
    Wheel(WheelDirection),
    /// A drag gesture started at the given anchor.
    DragStart(Point),
    /// The pointer moved while dragging.
    DragMove(Point),
    /// The drag gesture ended.
    DragEnd(Point),
}
