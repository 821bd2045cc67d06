// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame's drawing passes: base regions, marks, focus chain, selection.

use canopy_layout::{LevelRegions, Payload, Region, TreeMap};
use canopy_overlay::{ChainLink, HighlightFlags, MarkHighlight, MarkShape};
use canopy_tree::{Pre, TreeSource};
use kurbo::{Line, Point, Rect};

use crate::{Palette, Surface, fit_label};

/// Baseline inset from the bottom of a region for in-region labels.
const LABEL_BASELINE_INSET: f64 = 2.0;

/// Draws every region of the layout with its level shade, plus labels
/// where the region is at least [`canopy_layout::LayoutOptions::min_label_width`]
/// wide.
pub fn draw_base<T: TreeSource, S: Surface + ?Sized>(
    surface: &mut S,
    tree: &T,
    map: &TreeMap,
    palette: &Palette,
) {
    let min_label_width = map.options().min_label_width;
    for (depth, level) in map.levels().iter().enumerate() {
        let fill = palette.level_fill(depth);
        let stroke = palette.level_stroke(depth);
        for region in level.regions() {
            let frame = region.frame(level.y, level.height);
            surface.fill_rect(frame, fill);
            surface.stroke_rect(frame, stroke);
            if let Payload::Node(pre) = region.payload {
                if region.width >= min_label_width {
                    draw_region_label(surface, tree, palette, pre, region, level);
                }
            }
        }
    }
}

/// Draws one node's label centered in its region.
fn draw_region_label<T: TreeSource, S: Surface + ?Sized>(
    surface: &mut S,
    tree: &T,
    palette: &Palette,
    pre: Pre,
    region: &Region,
    level: &LevelRegions,
) {
    let Some(label) = tree.label(pre) else {
        return;
    };
    let Some(text) = fit_label(surface, &label, region.width) else {
        return;
    };
    let width = surface.text_width(&text);
    surface.draw_text(
        &text,
        Point::new(
            region.center_x() - width / 2.0,
            level.y + level.height - LABEL_BASELINE_INSET,
        ),
        palette.kind_color(tree.kind(pre)),
    );
}

/// Draws the mark overlay: filled regions on individual levels, vertical
/// ticks inside aggregated ones. Marked individual regions get their label
/// redrawn on top of the mark fill.
pub fn draw_marks<T: TreeSource, S: Surface + ?Sized>(
    surface: &mut S,
    tree: &T,
    map: &TreeMap,
    palette: &Palette,
    highlights: &[MarkHighlight],
) {
    for highlight in highlights {
        let Some(level) = map.level(highlight.level) else {
            continue;
        };
        match highlight.shape {
            MarkShape::Region(index) => {
                let Some(region) = level.regions().get(index) else {
                    continue;
                };
                surface.fill_rect(region.frame(level.y, level.height), palette.mark);
                if region.width >= map.options().min_label_width {
                    draw_region_label(surface, tree, palette, highlight.pre, region, level);
                }
            }
            MarkShape::Tick(x) => {
                surface.draw_line(
                    Line::new(Point::new(x, level.y), Point::new(x, level.y + level.height)),
                    palette.mark,
                );
            }
        }
    }
}

/// Draws the focus chain: the focused region's outline, ancestor outlines,
/// connectors, aggregate ticks, and one label per link.
///
/// Links flagged [`HighlightFlags::FOCUSED`] are stroked with the focus
/// color, ancestors with the mark color, matching how the chain was
/// computed: parent highlighting only, no recursion into children.
pub fn draw_focus_chain<T: TreeSource, S: Surface + ?Sized>(
    surface: &mut S,
    tree: &T,
    map: &TreeMap,
    palette: &Palette,
    chain: &[ChainLink],
) {
    for link in chain {
        let Some(level) = map.level(link.level) else {
            continue;
        };
        let Some(region) = level.regions().get(link.region) else {
            continue;
        };
        let color = if link.flags.contains(HighlightFlags::FOCUSED) {
            palette.focus
        } else {
            palette.mark
        };

        surface.stroke_rect(region.frame(level.y, level.height), color);
        if let Some(x) = link.tick_x {
            surface.draw_line(
                Line::new(Point::new(x, level.y), Point::new(x, level.y + level.height)),
                palette.mark,
            );
        }
        if let Some(connector) = link.connector {
            surface.draw_line(connector, palette.mark);
        }
        draw_chain_label(surface, tree, palette, link, region, level);
    }
}

/// Draws a chain link's label on its own background strip, above the
/// region, or below it for the document root, which has no space above.
fn draw_chain_label<T: TreeSource, S: Surface + ?Sized>(
    surface: &mut S,
    tree: &T,
    palette: &Palette,
    link: &ChainLink,
    region: &Region,
    level: &LevelRegions,
) {
    let Some(label) = tree.label(link.pre) else {
        return;
    };
    let width = surface.text_width(&label);
    let y = if link.pre == 0 {
        level.y + level.height + 1.0
    } else {
        level.y - level.height - 1.0
    };
    surface.fill_rect(
        Rect::new(region.x, y, region.x + width + 2.0, y + level.height),
        palette.label_back,
    );
    surface.draw_text(
        &label,
        Point::new(region.x + 1.0, y + level.height - LABEL_BASELINE_INSET),
        palette.label_text,
    );
}

/// Draws the rubber-band selection rectangle.
pub fn draw_selection<S: Surface + ?Sized>(surface: &mut S, rect: Rect, palette: &Palette) {
    surface.stroke_rect(rect, palette.mark);
}
