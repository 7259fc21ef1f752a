#![forbid(unsafe_code)]

//! Dropdown (select) widget.
//!
//! The dropdown is split the way its parts cooperate on screen:
//!
//! - [`DropdownState`] is the controller. It owns the items, the open flag,
//!   the committed selection and the keyboard focus, and turns key and mouse
//!   events into [`DropdownOutcome`]s.
//! - [`DropdownTrigger`] shows the selection and toggles the list.
//! - [`DropdownList`] shows the options while open, one
//!   [`DropdownItemView`] per row.
//! - [`Dropdown`] stacks a trigger over its list.
//!
//! All of them render from the same `&mut DropdownState`.
//!
//! ```
//! use yongui_core::event::{KeyCode, KeyEvent};
//! use yongui_widgets::dropdown::{DropdownOutcome, DropdownState};
//!
//! let mut state = DropdownState::new([("apple", "Apple"), ("banana", "Banana")]);
//! state.toggle(None);
//! state.handle_key(&KeyEvent::new(KeyCode::Down));
//! let outcome = state.handle_key(&KeyEvent::new(KeyCode::Enter));
//! assert_eq!(outcome, DropdownOutcome::Selected(0));
//! assert_eq!(state.selected_item().unwrap().text, "Apple");
//! ```

mod action;
mod item;
mod list;
mod semantics;
mod state;
mod style;
mod trigger;

pub use action::{DropdownAction, DropdownOutcome};
pub use item::{DropdownItem, ItemListError, validate_items};
pub use list::{DropdownItemView, DropdownList};
pub use semantics::{ItemSemantics, ListSemantics, Role, TriggerSemantics};
pub use state::{DropdownHitIds, DropdownState};
pub use style::DropdownStyles;
pub use trigger::DropdownTrigger;

use crate::StatefulWidget;
use yongui_core::geometry::Rect;
use yongui_render::frame::Frame;
use yongui_style::{ResolvedTheme, Tone};

/// Trigger with its option list directly below.
///
/// The list is drawn over whatever lies below the trigger, so render the
/// dropdown after the widgets it should cover.
#[derive(Debug, Clone)]
pub struct Dropdown<'a> {
    trigger: DropdownTrigger<'a>,
    list: DropdownList<'a>,
    trigger_height: u16,
}

impl Default for Dropdown<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Dropdown<'a> {
    pub fn new() -> Self {
        Self {
            trigger: DropdownTrigger::new(),
            list: DropdownList::new(),
            trigger_height: 3,
        }
    }

    /// Use the given theme, with the trigger drawn in `tone`.
    #[must_use]
    pub fn themed(self, theme: &ResolvedTheme, tone: Tone) -> Self {
        self.styles(DropdownStyles::from_theme(theme, tone))
    }

    /// Trigger tone on the default theme.
    #[must_use]
    pub fn tone(self, tone: Tone) -> Self {
        self.themed(&ResolvedTheme::default(), tone)
    }

    #[must_use]
    pub fn styles(mut self, styles: DropdownStyles) -> Self {
        self.trigger = self.trigger.styles(styles);
        self.list = self.list.styles(styles);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.trigger = self.trigger.placeholder(placeholder);
        self
    }

    #[must_use]
    pub fn max_visible_rows(mut self, rows: u16) -> Self {
        self.list = self.list.max_visible_rows(rows);
        self
    }

    #[must_use]
    pub fn focus_marker(mut self, marker: &'a str) -> Self {
        self.list = self.list.focus_marker(marker);
        self
    }

    /// Rows given to the trigger. Three or more draw it boxed.
    #[must_use]
    pub fn trigger_height(mut self, height: u16) -> Self {
        self.trigger_height = height.max(1);
        self
    }

    /// Register hit regions for mouse routing through
    /// [`DropdownState::handle_mouse`].
    #[must_use]
    pub fn hit_ids(mut self, ids: DropdownHitIds) -> Self {
        self.trigger = self.trigger.hit_id(ids.trigger);
        self.list = self.list.hit_id(ids.list);
        self
    }

    /// Total height the dropdown wants with the list open.
    pub fn desired_height(&self, state: &DropdownState) -> u16 {
        self.trigger_height + self.list.desired_height(state.len())
    }
}

impl StatefulWidget for Dropdown<'_> {
    type State = DropdownState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Dropdown",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let (trigger_area, list_area) = area.split_top(self.trigger_height);
        self.trigger.render(trigger_area, frame, state);
        self.list.render(list_area, frame, state);
    }
}
