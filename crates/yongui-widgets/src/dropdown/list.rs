#![forbid(unsafe_code)]

//! Dropdown option list and item rows.

use super::item::DropdownItem;
use super::state::DropdownState;
use super::style::DropdownStyles;
use crate::block::Block;
use crate::borders::BorderType;
use crate::{StatefulWidget, Widget, draw_text_span, draw_truncated, set_style_area};
use yongui_core::geometry::{Rect, Sides};
use yongui_render::cell::Cell;
use yongui_render::frame::{Frame, HitId, HitRegion};

pub(crate) const DEFAULT_FOCUS_MARKER: &str = "▸";
pub(crate) const DEFAULT_MAX_VISIBLE_ROWS: u16 = 8;

/// One option row.
///
/// Selected, focused and hovered combine: selection sets the selected
/// colours, focus adds a marker and bold text, hover tints the background
/// of an unselected row.
#[derive(Debug, Clone)]
pub struct DropdownItemView<'a> {
    item: &'a DropdownItem,
    selected: bool,
    focused: bool,
    hovered: bool,
    marker: &'a str,
    styles: DropdownStyles,
}

impl<'a> DropdownItemView<'a> {
    pub fn new(item: &'a DropdownItem) -> Self {
        Self {
            item,
            selected: false,
            focused: false,
            hovered: false,
            marker: DEFAULT_FOCUS_MARKER,
            styles: DropdownStyles::default(),
        }
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Symbol drawn before a focused item.
    #[must_use]
    pub fn marker(mut self, marker: &'a str) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn styles(mut self, styles: DropdownStyles) -> Self {
        self.styles = styles;
        self
    }

    fn row_style(&self) -> yongui_style::Style {
        let mut style = self.styles.item;
        if self.hovered && !self.selected {
            style = self.styles.hovered.merge(&style);
        }
        if self.selected {
            style = self.styles.selected.merge(&style);
        }
        if self.focused {
            style = self.styles.focused.merge(&style);
        }
        style
    }
}

impl Widget for DropdownItemView<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let Some(row) = area.intersection(&frame.bounds()).row(0) else {
            return;
        };
        let style = self.row_style();
        frame.buffer.fill(row, Cell::from_char(' '));
        set_style_area(&mut frame.buffer, row, style);

        let padded = row.inner(Sides::horizontal(u16::from(row.width >= 3)));
        let marker_width = yongui_render::display_width(self.marker) as u16;
        let mut x = padded.x;
        if self.focused {
            draw_text_span(frame, x, row.y, self.marker, style, padded.right());
        }
        if marker_width > 0 {
            x = x.saturating_add(marker_width + 1);
        }
        let text_width = padded.right().saturating_sub(x);
        draw_truncated(frame, x, row.y, &self.item.text, style, text_width);
    }
}

/// The option list shown below the trigger while the dropdown is open.
///
/// Renders nothing while closed. Shows at most `max_visible_rows` items
/// starting at the state's scroll offset and scrolls the focused item into
/// view when focus moved since the last render. Each visible row registers
/// a [`HitRegion::Content`] hit region whose data is the item index.
#[derive(Debug, Clone)]
pub struct DropdownList<'a> {
    styles: DropdownStyles,
    max_visible_rows: u16,
    focus_marker: &'a str,
    hit_id: Option<HitId>,
}

impl Default for DropdownList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DropdownList<'a> {
    pub fn new() -> Self {
        Self {
            styles: DropdownStyles::default(),
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            focus_marker: DEFAULT_FOCUS_MARKER,
            hit_id: None,
        }
    }

    #[must_use]
    pub fn styles(mut self, styles: DropdownStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Cap on item rows shown at once (at least one).
    #[must_use]
    pub fn max_visible_rows(mut self, rows: u16) -> Self {
        self.max_visible_rows = rows.max(1);
        self
    }

    #[must_use]
    pub fn focus_marker(mut self, marker: &'a str) -> Self {
        self.focus_marker = marker;
        self
    }

    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Panel height needed to show `item_count` items, borders included.
    pub fn desired_height(&self, item_count: usize) -> u16 {
        let rows = item_count.clamp(1, self.max_visible_rows as usize) as u16;
        rows + self.block().vertical_chrome()
    }

    fn block(&self) -> Block {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.styles.list_border)
            .style(self.styles.list)
    }
}

impl StatefulWidget for DropdownList<'_> {
    type State = DropdownState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "DropdownList",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if !state.is_open() {
            return;
        }
        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }

        let height = self.desired_height(state.len()).min(area.height);
        let panel = Rect::new(area.x, area.y, area.width, height);
        let block = self.block();
        block.render(panel, frame);
        if let Some(id) = self.hit_id {
            frame.register_hit(panel, id, HitRegion::Border, 0);
        }

        let inner = block.inner(panel);
        if inner.is_empty() {
            return;
        }
        state.sync_viewport(inner.height as usize);

        let offset = state.offset();
        for (index, item) in state.items().iter().enumerate().skip(offset) {
            let Some(row) = inner.row((index - offset) as u16) else {
                break;
            };
            DropdownItemView::new(item)
                .selected(state.selected() == Some(index))
                .focused(state.focused() == Some(index))
                .hovered(state.hovered() == Some(index))
                .marker(self.focus_marker)
                .styles(self.styles)
                .render(row, frame);

            if let Some(id) = self.hit_id {
                frame.register_hit(row, id, HitRegion::Content, index as u64);
            }
        }
    }
}
