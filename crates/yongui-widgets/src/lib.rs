#![forbid(unsafe_code)]

//! Widgets for YongUI.
//!
//! Widgets draw into a [`Frame`] and may register hit regions so the host
//! can route mouse events back to them. The main inhabitant of this crate is
//! the [`dropdown`] module.

pub mod block;
pub mod borders;
pub mod dropdown;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use yongui_core::geometry::Rect;
use yongui_render::buffer::Buffer;
use yongui_render::cell::Cell;
use yongui_render::frame::Frame;
use yongui_style::Style;

/// A `Widget` is a renderable component.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Helper to apply style to a cell.
#[inline]
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    style.apply_to(cell);
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span into the frame at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive).
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    let mut base = Cell::default();
    apply_style(&mut base, style);
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x as usize + w > max_x as usize {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            frame.buffer.set(x, y, base.with_char(c));
        }
        x = x.saturating_add(w as u16);
    }
    x
}

const ELLIPSIS: &str = "…";

/// Draw `content` in at most `max_width` cells, replacing the tail with an
/// ellipsis when it does not fit.
///
/// Returns the x position after the last drawn character.
pub(crate) fn draw_truncated(
    frame: &mut Frame,
    x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_width: u16,
) -> u16 {
    let max_x = x.saturating_add(max_width);
    if yongui_render::display_width(content) <= max_width as usize {
        return draw_text_span(frame, x, y, content, style, max_x);
    }
    if max_width == 0 {
        return x;
    }

    // Reserve one cell for the ellipsis.
    let mut budget = max_width as usize - 1;
    let mut end = 0;
    for (idx, grapheme) in content.grapheme_indices(true) {
        let w = yongui_render::grapheme_width(grapheme);
        if w > budget {
            break;
        }
        budget -= w;
        end = idx + grapheme.len();
    }
    let x = draw_text_span(frame, x, y, &content[..end], style, max_x);
    draw_text_span(frame, x, y, ELLIPSIS, style, max_x)
}
