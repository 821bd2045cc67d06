// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless walk through the whole Canopy stack.
//!
//! Builds a small in-memory document, lays it out, moves a pointer over
//! it, drags a selection, and renders every pass into a recording surface,
//! printing what a real backend would have drawn.
//!
//! Run:
//! - `cargo run -p canopy_demos --bin tree_view`

use std::borrow::Cow;

use canopy_interact::{Controller, InteractContext, MarkUpdate, Notifier, PointerEvent, dispatch};
use canopy_layout::{LayoutOptions, TreeMap};
use canopy_overlay::{focus_chain, mark_overlay};
use canopy_render::{
    Palette, RecordingSurface, draw_base, draw_focus_chain, draw_marks, draw_selection,
};
use canopy_tree::{NodeKind, Pre, TreeSource};
use kurbo::{Point, Size};

/// A small fixed document, preorder-numbered:
///
/// ```text
/// 0 doc
/// └─ 1 html
///    ├─ 2 head ── 3 title ── 4 "Canopy"
///    └─ 5 body ── 6 p ────── 7 "hello", 8 em ── 9 "world"
/// ```
struct Document {
    nodes: Vec<(&'static str, NodeKind, Vec<Pre>)>,
}

impl Document {
    fn new() -> Self {
        let element = NodeKind::Element;
        let text = NodeKind::Text;
        Self {
            nodes: vec![
                ("doc", NodeKind::Document, vec![1]),
                ("html", element, vec![2, 5]),
                ("head", element, vec![3]),
                ("title", element, vec![4]),
                ("Canopy", text, vec![]),
                ("body", element, vec![6]),
                ("p", element, vec![7, 8]),
                ("hello", text, vec![]),
                ("em", element, vec![9]),
                ("world", text, vec![]),
            ],
        }
    }
}

impl TreeSource for Document {
    fn children(&self, pre: Pre) -> impl Iterator<Item = Pre> {
        self.nodes
            .get(pre as usize)
            .map(|(_, _, kids)| kids.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    fn parent(&self, pre: Pre) -> Option<Pre> {
        self.nodes
            .iter()
            .position(|(_, _, kids)| kids.contains(&pre))
            .map(|parent| parent as Pre)
    }

    fn kind(&self, pre: Pre) -> NodeKind {
        self.nodes
            .get(pre as usize)
            .map_or(NodeKind::Element, |(_, kind, _)| *kind)
    }

    fn label(&self, pre: Pre) -> Option<Cow<'_, str>> {
        self.nodes
            .get(pre as usize)
            .map(|(name, _, _)| Cow::Borrowed(*name))
    }

    fn subtree_size(&self, pre: Pre) -> usize {
        1 + self
            .children(pre)
            .map(|child| self.subtree_size(child))
            .sum::<usize>()
    }

    fn max_depth(&self) -> usize {
        5
    }
}

/// Prints every request the view makes instead of forwarding it anywhere.
#[derive(Default)]
struct Console {
    marks: Vec<Pre>,
}

impl Notifier for Console {
    fn focus(&mut self, pre: Pre) {
        println!("  notify: focus -> {pre}");
    }

    fn mark(&mut self, update: &MarkUpdate) {
        match update {
            MarkUpdate::Clear => self.marks.clear(),
            MarkUpdate::Replace(ids) => self.marks = ids.clone(),
        }
        println!("  notify: marks -> {:?}", self.marks);
    }

    fn navigate(&mut self, targets: &[Pre], replace_history: bool) {
        println!("  notify: navigate -> {targets:?} (replace: {replace_history})");
    }

    fn history_back(&mut self) {
        println!("  notify: history back");
    }
}

fn run_events(
    controller: &mut Controller,
    map: &TreeMap,
    console: &mut Console,
    events: &[PointerEvent],
) {
    let ctx = InteractContext::default();
    for event in events {
        let actions = controller.handle(map, &ctx, *event);
        dispatch(&actions, console);
    }
}

fn main() {
    let document = Document::new();
    let viewport = Size::new(640.0, 360.0);

    let mut map = TreeMap::new(LayoutOptions::default());
    map.rebuild(&document, &[0], viewport);
    println!("laid out {} levels in {viewport:?}", map.levels().len());
    for (depth, level) in map.levels().iter().enumerate() {
        println!(
            "  level {depth}: {} regions ({} nodes){}",
            level.regions().len(),
            level.node_count(),
            if level.is_aggregated() {
                ", aggregated"
            } else {
                ""
            }
        );
    }

    let mut controller = Controller::new();
    let mut console = Console::default();

    // Hover over the middle of level 1, then drag across level 3.
    let hover = Point::new(320.0, map.levels()[1].y + 2.0);
    let drag_band = map.levels()[3].y + 2.0;
    run_events(
        &mut controller,
        &map,
        &mut console,
        &[
            PointerEvent::Move(hover),
            PointerEvent::DragStart(Point::new(100.0, drag_band)),
            PointerEvent::DragMove(Point::new(500.0, drag_band)),
            PointerEvent::DragEnd(Point::new(500.0, drag_band)),
        ],
    );

    // Render the full frame into a recording surface.
    let palette = Palette::default();
    let mut surface = RecordingSurface::new();
    draw_base(&mut surface, &document, &map, &palette);

    let highlights = mark_overlay(&map, &console.marks);
    draw_marks(&mut surface, &document, &map, &palette, &highlights);

    if let Some(focus) = controller.focus() {
        let chain = focus_chain(&document, &map, focus.level, focus.pre);
        draw_focus_chain(&mut surface, &document, &map, &palette, &chain);
    }
    if let Some(rect) = controller.selection_rect() {
        draw_selection(&mut surface, rect, &palette);
    }

    println!("recorded {} draw operations", surface.ops().len());
}
