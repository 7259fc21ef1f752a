#![forbid(unsafe_code)]

//! Keyboard actions and transition outcomes.

use yongui_core::event::{KeyCode, KeyEvent};

/// A keyboard-driven dropdown transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropdownAction {
    /// Move focus up, wrapping from the first item to the last.
    FocusPrevious,
    /// Move focus down, wrapping from the last item to the first.
    FocusNext,
    /// Select the focused item. The list stays open or closed as it was.
    Commit,
    /// Close the list.
    Dismiss,
}

impl DropdownAction {
    /// Map a key to its action.
    ///
    /// Release events and chords with Ctrl or Alt map to nothing.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !key.is_press() || key.ctrl() || key.alt() {
            return None;
        }
        match key.code {
            KeyCode::Up => Some(Self::FocusPrevious),
            KeyCode::Down => Some(Self::FocusNext),
            KeyCode::Enter => Some(Self::Commit),
            KeyCode::Escape => Some(Self::Dismiss),
            _ => None,
        }
    }
}

/// What a dropdown transition changed.
///
/// Hosts watch for [`DropdownOutcome::Selected`] to react to a new selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropdownOutcome {
    /// Nothing changed.
    #[default]
    Ignored,
    Toggled {
        open: bool,
    },
    Focused(Option<usize>),
    /// An item was committed.
    Selected(usize),
    Hovered(Option<usize>),
    /// The list viewport moved.
    Scrolled,
}

impl DropdownOutcome {
    /// The newly selected index, if this outcome is a selection.
    pub const fn selection(self) -> Option<usize> {
        match self {
            Self::Selected(index) => Some(index),
            _ => None,
        }
    }

    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }
}
