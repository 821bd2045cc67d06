// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Idle/Dragging gesture state machine.

use alloc::vec;

use canopy_hit::{hit_test_x, ids_in_rect, locate};
use canopy_layout::TreeMap;
use canopy_tree::Pre;
use kurbo::{Point, Rect};

use crate::{Action, Actions, Button, MarkUpdate, PointerEvent, WheelDirection};

/// The region currently carrying focus, with its resolved node id.
///
/// This is transient state, recomputed from pointer positions or external
/// focus requests. It indexes into the map rather than borrowing from it so
/// the controller can outlive rebuilds; a rebuild clears it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusTarget {
    /// Level of the focused region.
    pub level: usize,
    /// Region index within the level.
    pub region: usize,
    /// The resolved node id (interpolated inside aggregates).
    pub pre: Pre,
}

/// Gesture state of the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A rubber-band selection is being dragged.
    Dragging {
        /// Position where the drag started.
        anchor: Point,
        /// Current selection rectangle (normalized).
        rect: Rect,
    },
}

/// Host context sampled per event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractContext {
    /// `true` while the host is updating and must not be interacted with.
    /// Any gesture in progress is abandoned.
    pub busy: bool,
}

/// Translates pointer events into actions against a built layout.
///
/// The controller holds only interaction state (focus, gesture); layout
/// stays in the [`TreeMap`] the host passes per event. All outcomes are
/// returned as [`Action`]s.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    gesture: Gesture,
    focus: Option<FocusTarget>,
}

impl Controller {
    /// Creates an idle controller with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused region, if any.
    #[must_use]
    pub fn focus(&self) -> Option<&FocusTarget> {
        self.focus.as_ref()
    }

    /// The current gesture state.
    #[must_use]
    pub const fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The selection rectangle while a drag is in progress.
    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        match self.gesture {
            Gesture::Dragging { rect, .. } => Some(rect),
            Gesture::Idle => None,
        }
    }

    /// Focuses a node by id, as requested by another view.
    ///
    /// Searches every level for the node (membership test inside
    /// aggregates, exact search otherwise). Returns `true` when found; a
    /// miss leaves the previous focus untouched. No action is produced:
    /// the request came from the notifier side already.
    pub fn focus_by_pre(&mut self, map: &TreeMap, pre: Pre) -> bool {
        match locate(map, pre) {
            Some(location) => {
                self.focus = Some(FocusTarget {
                    level: location.level,
                    region: location.region,
                    pre,
                });
                true
            }
            None => false,
        }
    }

    /// Drops focus and any gesture, e.g. after a layout rebuild.
    pub fn reset(&mut self) {
        self.focus = None;
        self.gesture = Gesture::Idle;
    }

    /// Processes one pointer event.
    ///
    /// When the context reports the host as busy, any gesture in progress
    /// is abandoned and the event is dropped.
    pub fn handle(&mut self, map: &TreeMap, ctx: &InteractContext, event: PointerEvent) -> Actions {
        if ctx.busy {
            self.gesture = Gesture::Idle;
            return Actions::new();
        }

        match event {
            PointerEvent::Move(pos) => self.on_move(map, pos),
            PointerEvent::Click { button, count, .. } => self.on_click(button, count),
            PointerEvent::Wheel(direction) => self.on_wheel(direction),
            PointerEvent::DragStart(pos) => self.on_drag_start(pos),
            PointerEvent::DragMove(pos) => self.on_drag_move(map, pos),
            PointerEvent::DragEnd(_) => self.on_drag_end(),
        }
    }

    fn on_move(&mut self, map: &TreeMap, pos: Point) -> Actions {
        let mut actions = Actions::new();
        if !matches!(self.gesture, Gesture::Idle) {
            return actions;
        }

        // Vertical position picks the level, horizontal the region. A miss
        // leaves the previous focus in place.
        let Some(level) = map.level_at_y(pos.y) else {
            return actions;
        };
        let Some(regions) = map.level(level) else {
            return actions;
        };
        let Some(hit) = hit_test_x(regions, pos.x) else {
            return actions;
        };

        let changed = self.focus.is_none_or(|focus| focus.pre != hit.pre);
        self.focus = Some(FocusTarget {
            level,
            region: hit.region,
            pre: hit.pre,
        });
        if changed {
            actions.push(Action::Focus(hit.pre));
        }
        actions
    }

    fn on_click(&mut self, button: Button, count: u8) -> Actions {
        let mut actions = Actions::new();
        let Some(focus) = self.focus else {
            return actions;
        };
        if button != 1 {
            return actions;
        }

        actions.push(Action::Mark(MarkUpdate::Clear));
        if count > 1 && focus.pre > 0 {
            actions.push(Action::Navigate {
                targets: vec![focus.pre],
                replace_history: false,
            });
        }
        actions
    }

    fn on_wheel(&mut self, direction: WheelDirection) -> Actions {
        let mut actions = Actions::new();
        let Some(focus) = self.focus else {
            return actions;
        };
        match direction {
            WheelDirection::Forward => actions.push(Action::Navigate {
                targets: vec![focus.pre],
                replace_history: false,
            }),
            WheelDirection::Back => actions.push(Action::HistoryBack),
        }
        actions
    }

    fn on_drag_start(&mut self, pos: Point) -> Actions {
        self.gesture = Gesture::Dragging {
            anchor: pos,
            rect: Rect::from_origin_size(pos, (1.0, 1.0)),
        };
        Actions::new()
    }

    fn on_drag_move(&mut self, map: &TreeMap, pos: Point) -> Actions {
        let anchor = match self.gesture {
            Gesture::Dragging { anchor, .. } => anchor,
            // A drag that arrives without an explicit start opens the
            // gesture at the current position.
            Gesture::Idle => {
                return self.on_drag_start(pos);
            }
        };

        let rect = Rect::from_points(anchor, pos);
        self.gesture = Gesture::Dragging { anchor, rect };

        let ids = ids_in_rect(map, rect.x0, rect.y0, rect.x1, rect.y1);
        let mut actions = Actions::new();
        actions.push(Action::Mark(MarkUpdate::Replace(ids)));
        actions
    }

    fn on_drag_end(&mut self) -> Actions {
        self.gesture = Gesture::Idle;
        Actions::new()
    }
}
