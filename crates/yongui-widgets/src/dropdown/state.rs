#![forbid(unsafe_code)]

//! Dropdown controller state.
//!
//! [`DropdownState`] owns the option list together with the open flag, the
//! committed selection and the keyboard focus. Every mutation goes through a
//! method here, and every method keeps `selected`, `focused` and `hovered`
//! inside `0..items.len()`. Invalid input is ignored rather than rejected.

use super::action::{DropdownAction, DropdownOutcome};
use super::item::{DropdownItem, ItemListError, validate_items};
use yongui_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use yongui_render::frame::{HitData, HitId, HitRegion};

/// Hit ids the trigger and the list register under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownHitIds {
    pub trigger: HitId,
    pub list: HitId,
}

impl DropdownHitIds {
    pub const fn new(trigger: HitId, list: HitId) -> Self {
        Self { trigger, list }
    }
}

impl Default for DropdownHitIds {
    fn default() -> Self {
        Self::new(HitId::new(1), HitId::new(2))
    }
}

/// Mutable state shared by the dropdown trigger, list and items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    items: Vec<DropdownItem>,
    open: bool,
    selected: Option<usize>,
    focused: Option<usize>,
    hovered: Option<usize>,
    /// First visible row of the list viewport.
    offset: usize,
    /// Focus moved while open; the next list render scrolls it into view.
    scroll_pending: bool,
    /// Rows the list showed on its last render.
    viewport_rows: usize,
}

impl DropdownState {
    /// Closed dropdown with nothing selected or focused.
    pub fn new(items: impl IntoIterator<Item = impl Into<DropdownItem>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Like [`DropdownState::new`], rejecting duplicate item ids.
    pub fn try_new(
        items: impl IntoIterator<Item = impl Into<DropdownItem>>,
    ) -> Result<Self, ItemListError> {
        let state = Self::new(items);
        validate_items(&state.items)?;
        Ok(state)
    }

    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&DropdownItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// First visible row of the list.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The committed item, if any.
    pub fn selected_item(&self) -> Option<&DropdownItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Whether a scroll-into-view is waiting for the next list render.
    pub fn is_scroll_pending(&self) -> bool {
        self.scroll_pending
    }

    /// Replace the option list.
    ///
    /// The selection follows its item id into the new list and is cleared if
    /// the id is gone. Focus is clamped to the new length, hover is cleared.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = impl Into<DropdownItem>>) {
        let selected_id = self.selected_item().map(|item| item.id.clone());
        self.items = items.into_iter().map(Into::into).collect();
        let len = self.items.len();

        self.selected =
            selected_id.and_then(|id| self.items.iter().position(|item| item.id == id));
        self.focused = match self.focused {
            Some(_) if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
        self.hovered = None;
        self.clamp_offset();

        yongui_core::debug!(
            len,
            selected = ?self.selected,
            focused = ?self.focused,
            "dropdown items replaced"
        );
    }

    /// Like [`DropdownState::set_items`], rejecting duplicate item ids.
    ///
    /// On error the state is left untouched.
    pub fn try_set_items(
        &mut self,
        items: impl IntoIterator<Item = impl Into<DropdownItem>>,
    ) -> Result<(), ItemListError> {
        let items: Vec<DropdownItem> = items.into_iter().map(Into::into).collect();
        validate_items(&items)?;
        self.set_items(items);
        Ok(())
    }

    /// Open or close the list. `Some(b)` forces the value, `None` flips it.
    ///
    /// Returns the new open flag. Selection and focus are not touched.
    pub fn toggle(&mut self, force: Option<bool>) -> bool {
        let open = force.unwrap_or(!self.open);
        if open != self.open {
            self.open = open;
            if open {
                self.scroll_pending = self.focused.is_some();
            } else {
                self.hovered = None;
            }
            yongui_core::trace!(open, "dropdown toggled");
        }
        open
    }

    pub fn open(&mut self) {
        self.toggle(Some(true));
    }

    pub fn close(&mut self) {
        self.toggle(Some(false));
    }

    /// Set the committed selection. Out-of-range indices are ignored.
    ///
    /// Returns `false` when the index was ignored.
    pub fn select_index(&mut self, index: Option<usize>) -> bool {
        if !self.in_range(index) {
            yongui_core::debug!(index = ?index, len = self.items.len(), "select index out of range");
            return false;
        }
        self.selected = index;
        true
    }

    /// Set the keyboard focus. Out-of-range indices are ignored.
    ///
    /// Returns `false` when the index was ignored.
    pub fn focus_index(&mut self, index: Option<usize>) -> bool {
        if !self.in_range(index) {
            yongui_core::debug!(index = ?index, len = self.items.len(), "focus index out of range");
            return false;
        }
        self.set_focus(index);
        true
    }

    /// Set the keyboard focus to a function of the current focus.
    pub fn focus_with(&mut self, f: impl FnOnce(Option<usize>) -> Option<usize>) -> bool {
        let next = f(self.focused);
        self.focus_index(next)
    }

    /// Set the pointer hover. Out-of-range indices are ignored.
    pub fn hover_index(&mut self, index: Option<usize>) -> bool {
        if !self.in_range(index) {
            return false;
        }
        self.hovered = index;
        true
    }

    /// Dispatch a key to its [`DropdownAction`].
    pub fn handle_key(&mut self, key: &KeyEvent) -> DropdownOutcome {
        match DropdownAction::from_key(key) {
            Some(action) => self.apply(action),
            None => DropdownOutcome::Ignored,
        }
    }

    /// Apply one keyboard action.
    pub fn apply(&mut self, action: DropdownAction) -> DropdownOutcome {
        let outcome = match action {
            DropdownAction::FocusPrevious => self.step_focus(false),
            DropdownAction::FocusNext => self.step_focus(true),
            DropdownAction::Commit => match self.focused {
                Some(index) => {
                    self.selected = Some(index);
                    DropdownOutcome::Selected(index)
                }
                None => DropdownOutcome::Ignored,
            },
            DropdownAction::Dismiss => {
                let was_open = self.open;
                self.toggle(Some(false));
                if was_open {
                    DropdownOutcome::Toggled { open: false }
                } else {
                    DropdownOutcome::Ignored
                }
            }
        };
        yongui_core::trace!(action = ?action, outcome = ?outcome, "dropdown action");
        outcome
    }

    /// Select an item and close the list in one step.
    ///
    /// This is what a click on an item, or Enter/Space on a focused item, does.
    pub fn activate(&mut self, index: usize) -> DropdownOutcome {
        if index >= self.items.len() {
            yongui_core::debug!(index, len = self.items.len(), "activate index out of range");
            return DropdownOutcome::Ignored;
        }
        self.selected = Some(index);
        self.open = false;
        self.hovered = None;
        yongui_core::trace!(index, "dropdown item activated");
        DropdownOutcome::Selected(index)
    }

    /// Key handler for an item that holds input focus: Enter or Space
    /// activates it.
    pub fn handle_item_key(&mut self, index: usize, key: &KeyEvent) -> DropdownOutcome {
        if !key.is_press() {
            return DropdownOutcome::Ignored;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(index),
            _ => DropdownOutcome::Ignored,
        }
    }

    /// Route a mouse event using the hit-test result at its position.
    ///
    /// `hit` is `frame.hit_test(event.x, event.y)` from the last render.
    /// List rows carry their item index as hit data.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        ids: DropdownHitIds,
    ) -> DropdownOutcome {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some((id, _, _)) if id == ids.trigger => DropdownOutcome::Toggled {
                    open: self.toggle(None),
                },
                Some((id, HitRegion::Content, data)) if id == ids.list && self.open => {
                    match usize::try_from(data) {
                        Ok(index) => self.activate(index),
                        Err(_) => DropdownOutcome::Ignored,
                    }
                }
                _ => DropdownOutcome::Ignored,
            },
            MouseEventKind::Moved => {
                let target = match hit {
                    Some((id, HitRegion::Content, data)) if id == ids.list && self.open => {
                        usize::try_from(data)
                            .ok()
                            .filter(|&index| index < self.items.len())
                    }
                    _ => None,
                };
                if target == self.hovered {
                    return DropdownOutcome::Ignored;
                }
                self.hovered = target;
                DropdownOutcome::Hovered(target)
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let over_list = matches!(hit, Some((id, _, _)) if id == ids.list);
                if !self.open || !over_list {
                    return DropdownOutcome::Ignored;
                }
                let moved = if event.kind == MouseEventKind::ScrollUp {
                    self.scroll_up(1)
                } else {
                    self.scroll_down(1)
                };
                if moved {
                    DropdownOutcome::Scrolled
                } else {
                    DropdownOutcome::Ignored
                }
            }
            _ => DropdownOutcome::Ignored,
        }
    }

    /// Scroll the list viewport up. Returns whether it moved.
    pub fn scroll_up(&mut self, lines: usize) -> bool {
        let before = self.offset;
        self.offset = self.offset.saturating_sub(lines);
        self.offset != before
    }

    /// Scroll the list viewport down, keeping the last page full.
    pub fn scroll_down(&mut self, lines: usize) -> bool {
        let before = self.offset;
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
        self.offset != before
    }

    /// Scroll so the focused row is visible in a viewport of `viewport_rows`.
    ///
    /// Nearest alignment: a row above the viewport becomes the first row, a
    /// row below becomes the last, a visible row does not move anything.
    /// Clears any pending scroll. Returns whether the offset changed.
    pub fn scroll_into_view(&mut self, viewport_rows: usize) -> bool {
        self.scroll_pending = false;
        self.viewport_rows = viewport_rows;
        let Some(focused) = self.focused else {
            return false;
        };
        if viewport_rows == 0 {
            return false;
        }

        let before = self.offset;
        if focused < self.offset {
            self.offset = focused;
        } else if focused >= self.offset + viewport_rows {
            self.offset = focused + 1 - viewport_rows;
        }
        self.offset != before
    }

    /// Record the list viewport height for this render and run any pending
    /// scroll-into-view.
    pub(crate) fn sync_viewport(&mut self, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
        self.clamp_offset();
        if self.scroll_pending {
            self.scroll_into_view(viewport_rows);
        }
    }

    fn step_focus(&mut self, forward: bool) -> DropdownOutcome {
        let len = self.items.len();
        if len == 0 {
            yongui_core::debug!("focus step on empty dropdown ignored");
            return DropdownOutcome::Ignored;
        }
        let next = match self.focused {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None if forward => 0,
            // No focus counts as index -1.
            None => (2 * len - 2) % len,
        };
        if self.set_focus(Some(next)) {
            DropdownOutcome::Focused(Some(next))
        } else {
            DropdownOutcome::Ignored
        }
    }

    /// Returns `false` when `index` was already focused.
    fn set_focus(&mut self, index: Option<usize>) -> bool {
        if index == self.focused {
            return false;
        }
        self.focused = index;
        if self.open {
            self.scroll_pending = true;
        }
        true
    }

    fn in_range(&self, index: Option<usize>) -> bool {
        index.is_none_or(|index| index < self.items.len())
    }

    fn max_offset(&self) -> usize {
        self.items.len().saturating_sub(self.viewport_rows.max(1))
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> DropdownState {
        DropdownState::new([("apple", "Apple"), ("banana", "Banana"), ("cherry", "Cherry")])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn new_state_is_closed_and_empty_handed() {
        let state = fruits();
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
        assert_eq!(state.focused(), None);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let err = DropdownState::try_new([("a", "A"), ("a", "B")]).unwrap_err();
        assert!(matches!(err, ItemListError::DuplicateId { first: 0, second: 1, .. }));
    }

    #[test]
    fn toggle_flips_and_forces() {
        let mut state = fruits();
        assert!(state.toggle(None));
        assert!(!state.toggle(None));
        assert!(state.toggle(Some(true)));
        assert!(state.toggle(Some(true)));
        assert!(!state.toggle(Some(false)));
        assert_eq!(state.selected(), None);
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn keyboard_scenario_selects_apple() {
        let mut state = fruits();
        state.toggle(None);
        assert_eq!(state.handle_key(&key(KeyCode::Down)), DropdownOutcome::Focused(Some(0)));
        assert_eq!(state.handle_key(&key(KeyCode::Down)), DropdownOutcome::Focused(Some(1)));
        assert_eq!(state.handle_key(&key(KeyCode::Up)), DropdownOutcome::Focused(Some(0)));
        assert_eq!(state.handle_key(&key(KeyCode::Enter)), DropdownOutcome::Selected(0));
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.selected_item().map(|i| i.text.as_str()), Some("Apple"));
        assert!(state.is_open());
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let mut state = fruits();
        state.focus_index(Some(0));
        state.handle_key(&key(KeyCode::Up));
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn down_from_last_wraps_to_first() {
        let mut state = fruits();
        state.focus_index(Some(2));
        state.handle_key(&key(KeyCode::Down));
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn up_from_no_focus_steps_back_from_minus_one() {
        let mut state = fruits();
        state.open();
        assert_eq!(state.handle_key(&key(KeyCode::Up)), DropdownOutcome::Focused(Some(1)));
        assert_eq!(state.focused(), Some(1));

        let mut single = DropdownState::new([("only", "Only")]);
        assert_eq!(single.apply(DropdownAction::FocusPrevious), DropdownOutcome::Focused(Some(0)));
    }

    #[test]
    fn single_item_step_reports_no_change() {
        let mut state = DropdownState::new([("only", "Only")]);
        state.open();
        state.focus_index(Some(0));
        assert!(state.handle_key(&key(KeyCode::Down)).is_ignored());
        assert!(state.handle_key(&key(KeyCode::Up)).is_ignored());
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn empty_list_navigation_is_noop() {
        let mut state = DropdownState::new(Vec::<DropdownItem>::new());
        assert!(state.handle_key(&key(KeyCode::Up)).is_ignored());
        assert!(state.handle_key(&key(KeyCode::Down)).is_ignored());
        assert_eq!(state.focused(), None);
        assert!(state.handle_key(&key(KeyCode::Enter)).is_ignored());
    }

    #[test]
    fn commit_without_focus_keeps_selection() {
        let mut state = fruits();
        state.select_index(Some(1));
        assert!(state.apply(DropdownAction::Commit).is_ignored());
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn commit_does_not_change_open() {
        let mut state = fruits();
        state.focus_index(Some(2));
        state.apply(DropdownAction::Commit);
        assert!(!state.is_open());
        state.open();
        state.apply(DropdownAction::Commit);
        assert!(state.is_open());
    }

    #[test]
    fn escape_closes_regardless() {
        let mut state = fruits();
        state.open();
        assert_eq!(
            state.handle_key(&key(KeyCode::Escape)),
            DropdownOutcome::Toggled { open: false }
        );
        assert!(!state.is_open());
        assert!(state.handle_key(&key(KeyCode::Escape)).is_ignored());
        assert!(!state.is_open());
    }

    #[test]
    fn close_keeps_focus() {
        let mut state = fruits();
        state.open();
        state.focus_index(Some(1));
        state.close();
        assert_eq!(state.focused(), Some(1));
    }

    #[test]
    fn unmapped_and_release_keys_ignored() {
        let mut state = fruits();
        assert!(state.handle_key(&key(KeyCode::Char('x'))).is_ignored());
        let release = key(KeyCode::Down).with_kind(yongui_core::event::KeyEventKind::Release);
        assert!(state.handle_key(&release).is_ignored());
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut state = fruits();
        assert!(!state.select_index(Some(3)));
        assert!(!state.focus_index(Some(99)));
        assert!(!state.hover_index(Some(3)));
        assert_eq!(state.selected(), None);
        assert_eq!(state.focused(), None);
        assert!(state.select_index(None));
        assert!(!state.is_open());
    }

    #[test]
    fn focus_with_uses_previous_value() {
        let mut state = fruits();
        state.focus_index(Some(1));
        assert!(state.focus_with(|prev| prev.map(|i| i + 1)));
        assert_eq!(state.focused(), Some(2));
        assert!(!state.focus_with(|prev| prev.map(|i| i + 1)));
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn activate_selects_and_closes() {
        let mut state = fruits();
        state.open();
        assert_eq!(state.activate(2), DropdownOutcome::Selected(2));
        assert_eq!(state.selected(), Some(2));
        assert!(!state.is_open());
        assert!(state.activate(3).is_ignored());
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn item_key_enter_or_space_activates() {
        let mut state = fruits();
        state.open();
        assert_eq!(
            state.handle_item_key(1, &key(KeyCode::Char(' '))),
            DropdownOutcome::Selected(1)
        );
        assert!(!state.is_open());
        state.open();
        assert_eq!(
            state.handle_item_key(0, &key(KeyCode::Enter)),
            DropdownOutcome::Selected(0)
        );
        assert!(state.handle_item_key(2, &key(KeyCode::Char('a'))).is_ignored());
    }

    #[test]
    fn set_items_keeps_selection_by_id() {
        let mut state = fruits();
        state.select_index(Some(1));
        state.set_items([("cherry", "Cherry"), ("banana", "Banana")]);
        assert_eq!(state.selected(), Some(1));
        state.set_items([("cherry", "Cherry"), ("kiwi", "Kiwi"), ("banana", "Banana")]);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn set_items_clears_missing_selection_and_clamps_focus() {
        let mut state = fruits();
        state.select_index(Some(2));
        state.focus_index(Some(2));
        state.set_items([("apple", "Apple")]);
        assert_eq!(state.selected(), None);
        assert_eq!(state.focused(), Some(0));

        state.set_items(Vec::<DropdownItem>::new());
        assert_eq!(state.focused(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn try_set_items_leaves_state_on_error() {
        let mut state = fruits();
        state.select_index(Some(0));
        assert!(state.try_set_items([("x", "X"), ("x", "Y")]).is_err());
        assert_eq!(state.len(), 3);
        assert_eq!(state.selected(), Some(0));
        assert!(state.try_set_items([("x", "X")]).is_ok());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn focus_change_while_open_schedules_scroll() {
        let mut state = fruits();
        state.focus_index(Some(1));
        assert!(!state.is_scroll_pending());
        state.open();
        assert!(state.is_scroll_pending());
        state.scroll_into_view(2);
        assert!(!state.is_scroll_pending());
        state.apply(DropdownAction::FocusNext);
        assert!(state.is_scroll_pending());
    }

    #[test]
    fn scroll_into_view_nearest() {
        let items: Vec<DropdownItem> = (0..10)
            .map(|i| DropdownItem::new(format!("id{i}"), format!("Item {i}")))
            .collect();
        let mut state = DropdownState::new(items);
        state.open();

        state.focus_index(Some(7));
        assert!(state.scroll_into_view(3));
        assert_eq!(state.offset(), 5);

        state.focus_index(Some(6));
        assert!(!state.scroll_into_view(3));
        assert_eq!(state.offset(), 5);

        state.focus_index(Some(2));
        assert!(state.scroll_into_view(3));
        assert_eq!(state.offset(), 2);
    }

    #[test]
    fn sync_viewport_runs_pending_scroll() {
        let items: Vec<DropdownItem> = (0..6)
            .map(|i| DropdownItem::new(format!("{i}"), format!("{i}")))
            .collect();
        let mut state = DropdownState::new(items);
        state.open();
        state.focus_index(Some(5));
        state.sync_viewport(2);
        assert_eq!(state.offset(), 4);
        assert!(!state.is_scroll_pending());
    }

    #[test]
    fn scroll_clamps_to_last_page() {
        let items: Vec<DropdownItem> = (0..5)
            .map(|i| DropdownItem::new(format!("{i}"), format!("{i}")))
            .collect();
        let mut state = DropdownState::new(items);
        state.sync_viewport(3);
        assert!(state.scroll_down(10));
        assert_eq!(state.offset(), 2);
        assert!(!state.scroll_down(1));
        assert!(state.scroll_up(1));
        assert_eq!(state.offset(), 1);
        assert!(state.scroll_up(5));
        assert!(!state.scroll_up(1));
    }

    mod mouse {
        use super::*;

        const IDS: DropdownHitIds = DropdownHitIds::new(HitId::new(10), HitId::new(11));

        fn left_click() -> MouseEvent {
            MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0)
        }

        #[test]
        fn click_trigger_toggles() {
            let mut state = fruits();
            let hit = Some((IDS.trigger, HitRegion::Button, 0));
            assert_eq!(
                state.handle_mouse(&left_click(), hit, IDS),
                DropdownOutcome::Toggled { open: true }
            );
            assert_eq!(
                state.handle_mouse(&left_click(), hit, IDS),
                DropdownOutcome::Toggled { open: false }
            );
        }

        #[test]
        fn click_item_activates() {
            let mut state = fruits();
            state.open();
            let hit = Some((IDS.list, HitRegion::Content, 1));
            assert_eq!(
                state.handle_mouse(&left_click(), hit, IDS),
                DropdownOutcome::Selected(1)
            );
            assert!(!state.is_open());
        }

        #[test]
        fn click_on_closed_list_or_elsewhere_ignored() {
            let mut state = fruits();
            let hit = Some((IDS.list, HitRegion::Content, 1));
            assert!(state.handle_mouse(&left_click(), hit, IDS).is_ignored());
            let foreign = Some((HitId::new(99), HitRegion::Content, 0));
            assert!(state.handle_mouse(&left_click(), foreign, IDS).is_ignored());
            assert!(state.handle_mouse(&left_click(), None, IDS).is_ignored());
            assert_eq!(state.selected(), None);
        }

        #[test]
        fn motion_sets_and_clears_hover() {
            let mut state = fruits();
            state.open();
            let moved = MouseEvent::new(MouseEventKind::Moved, 2, 2);
            let hit = Some((IDS.list, HitRegion::Content, 2));
            assert_eq!(
                state.handle_mouse(&moved, hit, IDS),
                DropdownOutcome::Hovered(Some(2))
            );
            assert!(state.handle_mouse(&moved, hit, IDS).is_ignored());
            assert_eq!(
                state.handle_mouse(&moved, None, IDS),
                DropdownOutcome::Hovered(None)
            );
            assert_eq!(state.hovered(), None);
        }

        #[test]
        fn wheel_scrolls_list_without_moving_focus() {
            let items: Vec<DropdownItem> = (0..8)
                .map(|i| DropdownItem::new(format!("{i}"), format!("{i}")))
                .collect();
            let mut state = DropdownState::new(items);
            state.open();
            state.sync_viewport(3);
            let wheel = MouseEvent::new(MouseEventKind::ScrollDown, 0, 0);
            let hit = Some((IDS.list, HitRegion::Content, 0));
            assert_eq!(state.handle_mouse(&wheel, hit, IDS), DropdownOutcome::Scrolled);
            assert_eq!(state.offset(), 1);
            assert_eq!(state.focused(), None);

            let up = MouseEvent::new(MouseEventKind::ScrollUp, 0, 0);
            assert_eq!(state.handle_mouse(&up, hit, IDS), DropdownOutcome::Scrolled);
            assert!(state.handle_mouse(&up, hit, IDS).is_ignored());
        }
    }
}
