#![forbid(unsafe_code)]

//! Demo model: two dropdowns side by side, a status line and a key legend.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use yongui::prelude::*;
use yongui::{Cell, DropdownStyles, HitRegion, MouseEvent, ResolvedTheme};

pub const FRUIT_IDS: DropdownHitIds = DropdownHitIds::new(HitId::new(1), HitId::new(2));
pub const MONTH_IDS: DropdownHitIds = DropdownHitIds::new(HitId::new(3), HitId::new(4));

const FRUITS: [(&str, &str); 10] = [
    ("apple", "Apple"),
    ("banana", "Banana"),
    ("cherry", "Cherry"),
    ("durian", "Durian"),
    ("elderberry", "Elderberry"),
    ("fig", "Fig"),
    ("grape", "Grape"),
    ("honeydew", "Honeydew"),
    ("kiwi", "Kiwi"),
    ("lemon", "Lemon"),
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const LEGEND: &str = "Tab switch  Enter open/select  Space pick  Esc close  q quit";
const FIELD_WIDTH: u16 = 24;
const LIST_ROWS: u16 = 6;

/// What the event loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
struct Field {
    label: &'static str,
    placeholder: &'static str,
    tone: Tone,
    ids: DropdownHitIds,
    state: DropdownState,
}

#[derive(Debug)]
pub struct DemoApp {
    theme: ResolvedTheme,
    fields: [Field; 2],
    active: usize,
    status: String,
}

impl DemoApp {
    /// `tone` colours the fruit trigger; the month trigger stays neutral.
    pub fn new(theme: ResolvedTheme, tone: Tone) -> Self {
        let months = MONTHS
            .iter()
            .enumerate()
            .map(|(i, name)| DropdownItem::new(format!("m{:02}", i + 1), *name));
        Self {
            theme,
            fields: [
                Field {
                    label: "Fruit",
                    placeholder: "Pick a fruit",
                    tone,
                    ids: FRUIT_IDS,
                    state: DropdownState::new(FRUITS),
                },
                Field {
                    label: "Month",
                    placeholder: "Pick a month",
                    tone: Tone::Neutral,
                    ids: MONTH_IDS,
                    state: DropdownState::new(months),
                },
            ],
            active: 0,
            status: String::from("Nothing selected yet"),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// State of the fruit (0) or month (1) dropdown.
    pub fn state(&self, field: usize) -> Option<&DropdownState> {
        self.fields.get(field).map(|f| &f.state)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handle one event. `frame` is the last rendered frame, used for mouse
    /// hit testing.
    pub fn handle_event(&mut self, event: &Event, frame: &Frame) -> Control {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, frame.hit_test(mouse.x, mouse.y));
                Control::Continue
            }
            Event::Resize { .. } | Event::Focus(_) => Control::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Control {
        if !key.is_press() {
            return Control::Continue;
        }
        if key.is_char('q') || (key.ctrl() && key.is_char('c')) {
            return Control::Quit;
        }
        match key.code {
            KeyCode::Tab => {
                self.switch_to((self.active + 1) % self.fields.len());
                return Control::Continue;
            }
            KeyCode::BackTab => {
                self.switch_to((self.active + self.fields.len() - 1) % self.fields.len());
                return Control::Continue;
            }
            _ => {}
        }

        let state = &mut self.fields[self.active].state;
        let outcome = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !state.is_open() => DropdownOutcome::Toggled {
                open: state.toggle(Some(true)),
            },
            KeyCode::Char(' ') => match state.focused() {
                Some(index) => state.handle_item_key(index, key),
                None => DropdownOutcome::Ignored,
            },
            _ => state.handle_key(key),
        };

        if outcome.is_ignored() && key.code == KeyCode::Escape {
            return Control::Quit;
        }
        self.report(self.active, outcome);
        Control::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, hit: Option<(HitId, HitRegion, u64)>) {
        let owner = hit.and_then(|(id, _, _)| {
            self.fields
                .iter()
                .position(|f| id == f.ids.trigger || id == f.ids.list)
        });

        if mouse.is_left_click() {
            match owner {
                Some(index) if index != self.active => self.switch_to(index),
                // Click outside any dropdown dismisses the open list.
                None => {
                    self.fields[self.active].state.close();
                    return;
                }
                Some(_) => {}
            }
        }

        for index in 0..self.fields.len() {
            let field = &mut self.fields[index];
            let outcome = field.state.handle_mouse(mouse, hit, field.ids);
            self.report(index, outcome);
        }
    }

    fn switch_to(&mut self, index: usize) {
        if index != self.active {
            self.fields[self.active].state.close();
            self.active = index;
            tracing::debug!(field = self.fields[index].label, "active dropdown changed");
        }
    }

    fn report(&mut self, index: usize, outcome: DropdownOutcome) {
        let field = &self.fields[index];
        if let Some(item) = outcome.selection().and_then(|i| field.state.item(i)) {
            self.status = format!("{}: {}", field.label, item.text);
            tracing::info!(field = field.label, id = %item.id, "item selected");
        }
    }

    /// Draw the whole screen.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.bounds();
        let base = Style::new().fg(self.theme.text).bg(self.theme.surface);
        let mut blank = Cell::from_char(' ');
        base.apply_to(&mut blank);
        frame.buffer.fill(area, blank);

        if area.height < 6 || area.width < 8 {
            draw_line(frame, 0, 0, "Terminal too small", base, area.right());
            return;
        }

        draw_line(frame, 1, 0, "YongUI dropdown demo", base.bold(), area.right());

        let width = FIELD_WIDTH.min(area.width.saturating_sub(3) / 2);
        let height = area.height.saturating_sub(5);
        let label_style = base.fg(self.theme.placeholder);

        // The active dropdown goes last so its list draws on top.
        let order = [1 - self.active, self.active];
        for index in order {
            let x = 1 + index as u16 * (width + 1);
            let field = &mut self.fields[index];
            let style = if index == self.active {
                base.bold().underline()
            } else {
                label_style
            };
            draw_line(frame, x, 2, field.label, style, x + width);

            let styles = DropdownStyles::from_theme(&self.theme, field.tone);
            Dropdown::new()
                .styles(styles)
                .placeholder(field.placeholder)
                .max_visible_rows(LIST_ROWS)
                .hit_ids(field.ids)
                .render(Rect::new(x, 3, width, height), frame, &mut field.state);
        }

        let status_y = area.bottom() - 2;
        draw_line(frame, 1, status_y, &self.status, base, area.right());
        draw_line(frame, 1, status_y + 1, LEGEND, label_style, area.right());
    }
}

fn draw_line(frame: &mut Frame, mut x: u16, y: u16, text: &str, style: Style, max_x: u16) {
    for grapheme in text.graphemes(true) {
        let w = grapheme.width() as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            style.apply_to(&mut cell);
            frame.buffer.set(x, y, cell);
        }
        x += w;
    }
}
