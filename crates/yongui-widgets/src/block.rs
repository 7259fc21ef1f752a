#![forbid(unsafe_code)]

use crate::Widget;
use crate::borders::{BorderType, Borders};
use crate::{apply_style, set_style_area};
use yongui_core::geometry::Rect;
use yongui_render::cell::Cell;
use yongui_render::frame::Frame;
use yongui_style::Style;

/// A widget that draws a block with optional borders and a background.
///
/// The dropdown uses it for the trigger box and the list panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    borders: Borders,
    border_style: Style,
    border_type: BorderType,
    style: Style,
}

impl Block {
    /// Create a new block with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block with all borders enabled.
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the style applied to border characters.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the background style for the entire block area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Compute the inner area inside the block's borders.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;

        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }

        inner
    }

    /// Rows consumed by the top and bottom borders.
    pub fn vertical_chrome(&self) -> u16 {
        self.borders.contains(Borders::TOP) as u16 + self.borders.contains(Borders::BOTTOM) as u16
    }

    fn border_cell(&self, c: char) -> Cell {
        let mut cell = Cell::from_char(c);
        apply_style(&mut cell, self.style);
        apply_style(&mut cell, self.border_style);
        cell
    }

    fn render_borders(&self, area: Rect, frame: &mut Frame) {
        let set = self.border_type.to_border_set();
        let buf = &mut frame.buffer;

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            let x = area.right() - 1;
            for y in area.y..area.bottom() {
                buf.set(x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            let y = area.bottom() - 1;
            for x in area.x..area.right() {
                buf.set(x, y, self.border_cell(set.horizontal));
            }
        }

        // Corners last so they overwrite the edges.
        if self.borders.contains(Borders::LEFT | Borders::TOP) {
            buf.set(area.x, area.y, self.border_cell(set.top_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::TOP) {
            buf.set(area.right() - 1, area.y, self.border_cell(set.top_right));
        }
        if self.borders.contains(Borders::LEFT | Borders::BOTTOM) {
            buf.set(area.x, area.bottom() - 1, self.border_cell(set.bottom_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::BOTTOM) {
            buf.set(
                area.right() - 1,
                area.bottom() - 1,
                self.border_cell(set.bottom_right),
            );
        }
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Block",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }

        // Blank the area first so a popover hides whatever was underneath.
        frame.buffer.fill(area, Cell::from_char(' '));
        set_style_area(&mut frame.buffer, area, self.style);

        self.render_borders(area, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yongui_render::cell::PackedRgba;

    fn char_at(frame: &Frame, x: u16, y: u16) -> Option<char> {
        frame.buffer.get(x, y).and_then(|c| c.content.as_char())
    }

    #[test]
    fn inner_with_all_borders() {
        let block = Block::bordered();
        assert_eq!(block.inner(Rect::new(2, 3, 10, 5)), Rect::new(3, 4, 8, 3));
        assert_eq!(block.vertical_chrome(), 2);
    }

    #[test]
    fn inner_without_borders_is_identity() {
        let area = Rect::new(0, 0, 4, 4);
        assert_eq!(Block::new().inner(area), area);
        assert_eq!(Block::new().vertical_chrome(), 0);
    }

    #[test]
    fn inner_saturates_on_tiny_area() {
        let inner = Block::bordered().inner(Rect::new(0, 0, 1, 1));
        assert!(inner.is_empty());
    }

    #[test]
    fn renders_rounded_corners() {
        let mut frame = Frame::new(5, 3);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .render(Rect::new(0, 0, 5, 3), &mut frame);
        assert_eq!(char_at(&frame, 0, 0), Some('╭'));
        assert_eq!(char_at(&frame, 4, 0), Some('╮'));
        assert_eq!(char_at(&frame, 0, 2), Some('╰'));
        assert_eq!(char_at(&frame, 4, 2), Some('╯'));
        assert_eq!(char_at(&frame, 2, 0), Some('─'));
        assert_eq!(char_at(&frame, 0, 1), Some('│'));
        assert_eq!(char_at(&frame, 2, 1), Some(' '));
    }

    #[test]
    fn border_style_colors_border_cells_only() {
        let red = PackedRgba::rgb(200, 0, 0);
        let blue = PackedRgba::rgb(0, 0, 200);
        let mut frame = Frame::new(4, 3);
        Block::bordered()
            .border_style(Style::new().fg(red))
            .style(Style::new().bg(blue))
            .render(Rect::new(0, 0, 4, 3), &mut frame);
        assert_eq!(frame.buffer.get(0, 0).unwrap().fg, red);
        assert_eq!(frame.buffer.get(0, 0).unwrap().bg, blue);
        assert_ne!(frame.buffer.get(1, 1).unwrap().fg, red);
        assert_eq!(frame.buffer.get(1, 1).unwrap().bg, blue);
    }

    #[test]
    fn render_clips_to_frame() {
        let mut frame = Frame::new(4, 3);
        Block::bordered().render(Rect::new(1, 1, 10, 10), &mut frame);
        assert_eq!(char_at(&frame, 1, 1), Some('┌'));
        assert_eq!(char_at(&frame, 3, 2), Some('┘'));
        assert_eq!(char_at(&frame, 0, 0), None);
    }
}
