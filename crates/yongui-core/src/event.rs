#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Widgets never see crossterm types directly: terminal input is converted
//! once with [`Event::from_crossterm`] and everything downstream matches on
//! these types.
//!
//! - Mouse coordinates are 0-indexed.
//! - `KeyEventKind` defaults to `Press` when the terminal cannot tell.

use bitflags::bitflags;
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A mouse event.
    Mouse(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

impl Event {
    /// Convert a crossterm event.
    ///
    /// Returns `None` for events with no canonical equivalent (paste,
    /// unsupported key codes).
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => KeyEvent::try_from(key).ok().map(Event::Key),
            cte::Event::Mouse(mouse) => Some(Event::Mouse(mouse.into())),
            cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            cte::Event::FocusGained => Some(Event::Focus(true)),
            cte::Event::FocusLost => Some(Event::Focus(false)),
            cte::Event::Paste(_) => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press, repeat, or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a press event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Press or auto-repeat; release events do not trigger actions.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }

    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key. Space arrives as `Char(' ')`.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    /// Shift+Tab.
    BackTab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held.
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        /// Super/Meta/Command.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,

    /// Column, 0-indexed.
    pub x: u16,

    /// Row, 0-indexed.
    pub y: u16,

    pub modifiers: Modifiers,
}

impl MouseEvent {
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Left button pressed.
    #[must_use]
    pub const fn is_left_click(&self) -> bool {
        matches!(self.kind, MouseEventKind::Down(MouseButton::Left))
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    /// Pointer moved with no button held.
    Moved,
    ScrollUp,
    ScrollDown,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl TryFrom<cte::KeyEvent> for KeyEvent {
    type Error = cte::KeyCode;

    /// Fails with the crossterm code when it has no [`KeyCode`] equivalent.
    fn try_from(event: cte::KeyEvent) -> Result<Self, Self::Error> {
        Ok(KeyEvent {
            code: KeyCode::try_from(event.code)?,
            modifiers: event.modifiers.into(),
            kind: match event.kind {
                cte::KeyEventKind::Press => KeyEventKind::Press,
                cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
                cte::KeyEventKind::Release => KeyEventKind::Release,
            },
        })
    }
}

impl TryFrom<cte::KeyCode> for KeyCode {
    type Error = cte::KeyCode;

    fn try_from(code: cte::KeyCode) -> Result<Self, Self::Error> {
        let mapped = match code {
            cte::KeyCode::Char(c) => KeyCode::Char(c),
            cte::KeyCode::Esc => KeyCode::Escape,
            cte::KeyCode::Enter => KeyCode::Enter,
            cte::KeyCode::Up => KeyCode::Up,
            cte::KeyCode::Down => KeyCode::Down,
            cte::KeyCode::Left => KeyCode::Left,
            cte::KeyCode::Right => KeyCode::Right,
            cte::KeyCode::Home => KeyCode::Home,
            cte::KeyCode::End => KeyCode::End,
            cte::KeyCode::PageUp => KeyCode::PageUp,
            cte::KeyCode::PageDown => KeyCode::PageDown,
            cte::KeyCode::Tab => KeyCode::Tab,
            cte::KeyCode::BackTab => KeyCode::BackTab,
            cte::KeyCode::Backspace => KeyCode::Backspace,
            cte::KeyCode::Delete => KeyCode::Delete,
            cte::KeyCode::F(n) => KeyCode::F(n),
            other => return Err(other),
        };
        Ok(mapped)
    }
}

/// Crossterm modifier bits and the flag each one sets.
const MODIFIER_TABLE: [(cte::KeyModifiers, Modifiers); 6] = [
    (cte::KeyModifiers::SHIFT, Modifiers::SHIFT),
    (cte::KeyModifiers::ALT, Modifiers::ALT),
    (cte::KeyModifiers::CONTROL, Modifiers::CTRL),
    (cte::KeyModifiers::SUPER, Modifiers::SUPER),
    (cte::KeyModifiers::HYPER, Modifiers::SUPER),
    (cte::KeyModifiers::META, Modifiers::SUPER),
];

impl From<cte::KeyModifiers> for Modifiers {
    fn from(modifiers: cte::KeyModifiers) -> Self {
        MODIFIER_TABLE
            .iter()
            .filter(|(ct, _)| modifiers.contains(*ct))
            .fold(Modifiers::NONE, |acc, (_, ours)| acc | *ours)
    }
}

impl From<cte::MouseButton> for MouseButton {
    fn from(button: cte::MouseButton) -> Self {
        match button {
            cte::MouseButton::Left => MouseButton::Left,
            cte::MouseButton::Right => MouseButton::Right,
            cte::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

impl From<cte::MouseEvent> for MouseEvent {
    fn from(event: cte::MouseEvent) -> Self {
        let kind = match event.kind {
            cte::MouseEventKind::Down(button) => MouseEventKind::Down(button.into()),
            cte::MouseEventKind::Up(button) => MouseEventKind::Up(button.into()),
            cte::MouseEventKind::Drag(button) => MouseEventKind::Drag(button.into()),
            cte::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
            cte::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
            // Lists only scroll vertically; a sideways wheel is just motion.
            cte::MouseEventKind::Moved
            | cte::MouseEventKind::ScrollLeft
            | cte::MouseEventKind::ScrollRight => MouseEventKind::Moved,
        };
        MouseEvent::new(kind, event.column, event.row).with_modifiers(event.modifiers.into())
    }
}
