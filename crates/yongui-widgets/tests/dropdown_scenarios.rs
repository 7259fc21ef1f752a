#![forbid(unsafe_code)]

//! End-to-end dropdown scenarios: events in, frames out.
//!
//! Each test drives a [`DropdownState`] the way a host would, renders the
//! [`Dropdown`] into a frame, and checks both the state and the screen.

use yongui_core::event::{
    Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use yongui_core::geometry::Rect;
use yongui_harness::{assert_rows, row_text};
use yongui_render::frame::{Frame, HitId};
use yongui_style::{Theme, Tone};
use yongui_widgets::StatefulWidget;
use yongui_widgets::dropdown::{
    Dropdown, DropdownHitIds, DropdownItem, DropdownOutcome, DropdownState, DropdownStyles, Role,
};

const IDS: DropdownHitIds = DropdownHitIds::new(HitId::new(1), HitId::new(2));

fn fruits() -> DropdownState {
    DropdownState::new([
        ("apple", "Apple"),
        ("banana", "Banana"),
        ("cherry", "Cherry"),
    ])
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

/// Route one event the way a host event loop does.
fn dispatch(state: &mut DropdownState, frame: &Frame, event: Event) -> DropdownOutcome {
    match event {
        Event::Key(key) => state.handle_key(&key),
        Event::Mouse(mouse) => state.handle_mouse(&mouse, frame.hit_test(mouse.x, mouse.y), IDS),
        _ => DropdownOutcome::Ignored,
    }
}

fn draw(state: &mut DropdownState, frame: &mut Frame) {
    frame.clear();
    Dropdown::new()
        .placeholder("Fruit")
        .hit_ids(IDS)
        .render(frame.bounds(), frame, state);
}

#[test]
fn keyboard_select_apple() {
    let mut state = fruits();
    let mut frame = Frame::with_hit_grid(14, 8);

    state.toggle(None);
    for (code, expected) in [
        (KeyCode::Down, Some(0)),
        (KeyCode::Down, Some(1)),
        (KeyCode::Up, Some(0)),
    ] {
        state.handle_key(&press(code));
        assert_eq!(state.focused(), expected);
    }
    let outcome = state.handle_key(&press(KeyCode::Enter));
    assert_eq!(outcome.selection(), Some(0));
    assert!(state.is_open());

    draw(&mut state, &mut frame);
    assert_rows!(
        &frame.buffer,
        [
            "╭────────────╮",
            "│ Apple    ▴ │",
            "╰────────────╯",
            "╭────────────╮",
            "│ ▸ Apple    │",
            "│   Banana   │",
            "│   Cherry   │",
            "╰────────────╯",
        ]
    );
}

#[test]
fn up_from_first_focuses_last() {
    let mut state = fruits();
    state.focus_index(Some(0));
    state.handle_key(&press(KeyCode::Up));
    assert_eq!(state.focused(), Some(2));
}

#[test]
fn empty_list_survives_navigation() {
    let mut state = DropdownState::new(Vec::<DropdownItem>::new());
    let mut frame = Frame::with_hit_grid(14, 6);
    state.toggle(Some(true));
    for code in [KeyCode::Up, KeyCode::Down, KeyCode::Enter, KeyCode::Up] {
        assert!(state.handle_key(&press(code)).is_ignored());
    }
    assert_eq!(state.focused(), None);
    draw(&mut state, &mut frame);
    assert_eq!(row_text(&frame.buffer, 1), "│ Fruit    ▴ │");
}

#[test]
fn escape_then_reopen_keeps_focus() {
    let mut state = fruits();
    state.open();
    state.handle_key(&press(KeyCode::Down));
    state.handle_key(&press(KeyCode::Down));
    state.handle_key(&press(KeyCode::Escape));
    assert!(!state.is_open());
    assert_eq!(state.focused(), Some(1));

    state.open();
    let mut frame = Frame::with_hit_grid(14, 8);
    draw(&mut state, &mut frame);
    assert_eq!(row_text(&frame.buffer, 5), "│ ▸ Banana   │");
}

#[test]
fn mouse_open_hover_and_pick() {
    let mut state = fruits();
    let mut frame = Frame::with_hit_grid(14, 8);
    draw(&mut state, &mut frame);

    let click = |x, y| Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y));

    assert_eq!(
        dispatch(&mut state, &frame, click(5, 1)),
        DropdownOutcome::Toggled { open: true }
    );
    draw(&mut state, &mut frame);

    let hover = Event::Mouse(MouseEvent::new(MouseEventKind::Moved, 5, 6));
    assert_eq!(
        dispatch(&mut state, &frame, hover),
        DropdownOutcome::Hovered(Some(2))
    );

    assert_eq!(
        dispatch(&mut state, &frame, click(5, 6)),
        DropdownOutcome::Selected(2)
    );
    assert!(!state.is_open());
    assert_eq!(state.hovered(), None);

    draw(&mut state, &mut frame);
    assert_rows!(
        &frame.buffer,
        [
            "╭────────────╮",
            "│ Cherry   ▾ │",
            "╰────────────╯",
            "",
            "",
            "",
            "",
            "",
        ]
    );
}

#[test]
fn click_on_list_border_does_nothing() {
    let mut state = fruits();
    state.open();
    let mut frame = Frame::with_hit_grid(14, 8);
    draw(&mut state, &mut frame);
    let click = Event::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Left),
        0,
        3,
    ));
    assert!(dispatch(&mut state, &frame, click).is_ignored());
    assert!(state.is_open());
    assert_eq!(state.selected(), None);
}

#[test]
fn long_list_scrolls_with_keyboard() {
    let items: Vec<DropdownItem> = (1..=12)
        .map(|i| DropdownItem::new(format!("m{i}"), format!("Month {i}")))
        .collect();
    let mut state = DropdownState::new(items);
    let dropdown = Dropdown::new().max_visible_rows(4).hit_ids(IDS);
    let mut frame = Frame::with_hit_grid(16, 9);

    state.open();
    for _ in 0..6 {
        state.handle_key(&press(KeyCode::Down));
        frame.clear();
        dropdown.render(frame.bounds(), &mut frame, &mut state);
        let focused = state.focused().unwrap_or_default();
        assert!(state.offset() <= focused && focused < state.offset() + 4);
    }
    assert_eq!(state.focused(), Some(5));
    assert_eq!(state.offset(), 2);
    assert_eq!(row_text(&frame.buffer, 4), "│   Month 3    │");
    assert_eq!(row_text(&frame.buffer, 7), "│ ▸ Month 6    │");

    // Wrap from the top lands on the last page.
    state.focus_index(Some(0));
    state.handle_key(&press(KeyCode::Up));
    frame.clear();
    dropdown.render(frame.bounds(), &mut frame, &mut state);
    assert_eq!(state.focused(), Some(11));
    assert_eq!(state.offset(), 8);
    assert_eq!(row_text(&frame.buffer, 7), "│ ▸ Month 12   │");
}

#[test]
fn replacing_items_keeps_selection_and_screen_in_sync() {
    let mut state = fruits();
    state.select_index(Some(2));
    state.focus_index(Some(2));
    state.set_items([("cherry", "Cherry"), ("date", "Date")]);
    assert_eq!(state.selected(), Some(0));
    assert_eq!(state.focused(), Some(1));

    state.set_items([("fig", "Fig")]);
    assert_eq!(state.selected(), None);
    assert_eq!(state.focused(), Some(0));

    let mut frame = Frame::with_hit_grid(14, 8);
    draw(&mut state, &mut frame);
    assert_eq!(row_text(&frame.buffer, 1), "│ Fruit    ▾ │");
}

#[test]
fn semantics_follow_state() {
    let mut state = fruits();
    assert!(!state.trigger_semantics().expanded);
    state.open();
    state.activate(1);
    let trigger = state.trigger_semantics();
    assert_eq!(trigger.role, Role::Combobox);
    assert!(!trigger.expanded);
    let selected: Vec<bool> = (0..state.len())
        .map(|i| state.item_semantics(i).selected)
        .collect();
    assert_eq!(selected, vec![false, true, false]);
}

#[test]
fn themed_dropdown_uses_tone_on_trigger() {
    let theme = Theme::default().resolve(false);
    let mut state = fruits();
    let mut frame = Frame::new(14, 3);
    Dropdown::new()
        .themed(&theme, Tone::Success)
        .render(Rect::new(0, 0, 14, 3), &mut frame, &mut state);
    let corner = frame.buffer.get(0, 0).copied();
    assert_eq!(
        corner.map(|c| c.fg),
        Some(theme.tone(Tone::Success).border)
    );
    let styles = DropdownStyles::from_theme(&theme, Tone::Success);
    assert_eq!(
        frame.buffer.get(2, 1).map(|c| Some(c.fg)),
        Some(styles.placeholder.fg)
    );
}
