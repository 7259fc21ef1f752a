#![forbid(unsafe_code)]

//! Dropdown trigger: the always-visible box showing the current selection.

use super::state::DropdownState;
use super::style::DropdownStyles;
use crate::block::Block;
use crate::borders::BorderType;
use crate::{StatefulWidget, Widget, draw_text_span, draw_truncated, set_style_area};
use yongui_core::geometry::{Rect, Sides};
use yongui_render::cell::Cell;
use yongui_render::frame::{Frame, HitId, HitRegion};
use yongui_style::{ResolvedTheme, Tone};

pub(crate) const DEFAULT_PLACEHOLDER: &str = "Select an option";

const CHEVRON_CLOSED: &str = "▾";
const CHEVRON_OPEN: &str = "▴";

/// The box that shows the selected item (or a placeholder) and a chevron.
///
/// Areas three or more rows tall get a rounded border; shorter areas draw
/// a single row. Clicking it should toggle the list; register a
/// [`HitId`] with [`DropdownTrigger::hit_id`] and route clicks through
/// [`DropdownState::handle_mouse`].
#[derive(Debug, Clone)]
pub struct DropdownTrigger<'a> {
    tone: Tone,
    placeholder: &'a str,
    styles: Option<DropdownStyles>,
    hit_id: Option<HitId>,
}

impl Default for DropdownTrigger<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DropdownTrigger<'a> {
    pub fn new() -> Self {
        Self {
            tone: Tone::Neutral,
            placeholder: DEFAULT_PLACEHOLDER,
            styles: None,
            hit_id: None,
        }
    }

    /// Colour family for the default styles. Ignored once explicit
    /// styles are set.
    #[must_use]
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Text shown while nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    #[must_use]
    pub fn styles(mut self, styles: DropdownStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Register the whole trigger as a [`HitRegion::Button`].
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    fn resolved_styles(&self) -> DropdownStyles {
        self.styles
            .unwrap_or_else(|| DropdownStyles::from_theme(&ResolvedTheme::default(), self.tone))
    }
}

impl StatefulWidget for DropdownTrigger<'_> {
    type State = DropdownState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "DropdownTrigger",
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
        let styles = self.resolved_styles();

        let content = if area.height >= 3 {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(styles.trigger_border)
                .style(styles.trigger);
            block.render(area, frame);
            block.inner(area)
        } else {
            frame.buffer.fill(area, Cell::from_char(' '));
            set_style_area(&mut frame.buffer, area, styles.trigger);
            area
        };

        if let Some(id) = self.hit_id {
            frame.register_hit(area, id, HitRegion::Button, 0);
        }
        if content.is_empty() {
            return;
        }

        let row = content.inner(Sides::horizontal(u16::from(content.width >= 4)));
        let y = row.y + (content.height - 1) / 2;
        let chevron_x = row.right().saturating_sub(1);
        let text_width = chevron_x.saturating_sub(row.x).saturating_sub(1);

        let (text, text_style) = match state.selected_item().filter(|item| !item.text.is_empty()) {
            Some(item) => (item.text.as_str(), styles.trigger),
            None => (self.placeholder, styles.placeholder),
        };
        draw_truncated(frame, row.x, y, text, text_style, text_width);

        let chevron = if state.is_open() {
            CHEVRON_OPEN
        } else {
            CHEVRON_CLOSED
        };
        draw_text_span(frame, chevron_x, y, chevron, styles.trigger, row.right());
    }
}
