#![forbid(unsafe_code)]

//! YongUI public facade crate.
//!
//! Re-exports the types a dropdown host needs from the internal crates and
//! offers a small prelude for day-to-day usage.
//!
//! ```
//! use yongui::prelude::*;
//!
//! let mut state = DropdownState::new([("apple", "Apple"), ("banana", "Banana")]);
//! let mut frame = Frame::new(16, 8);
//! state.toggle(None);
//! state.handle_key(&KeyEvent::new(KeyCode::Down));
//! Dropdown::new().tone(Tone::Brand).render(frame.bounds(), &mut frame, &mut state);
//! assert_eq!(state.focused(), Some(0));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use yongui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use yongui_core::geometry::{Rect, Sides};
pub use yongui_core::terminal_session::{SessionOptions, TerminalSession};

// --- Render re-exports -----------------------------------------------------

pub use yongui_render::buffer::Buffer;
pub use yongui_render::cell::{Cell, PackedRgba, StyleFlags};
pub use yongui_render::frame::{Frame, HitId, HitRegion};
pub use yongui_render::presenter::Presenter;

// --- Style re-exports ------------------------------------------------------

pub use yongui_style::{
    AdaptiveColor, ResolvedTheme, Style, Theme, ThemeBuilder, Tone, ToneColors, UnknownTone,
};

// --- Widget re-exports -----------------------------------------------------

pub use yongui_widgets::dropdown::{
    Dropdown, DropdownAction, DropdownHitIds, DropdownItem, DropdownList, DropdownOutcome,
    DropdownState, DropdownStyles, DropdownTrigger, ItemListError,
};
pub use yongui_widgets::{StatefulWidget, Widget};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for YongUI apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// Terminal error with message.
    Terminal(String),
    /// Rejected item list.
    Items(ItemListError),
    /// Unrecognized tone name.
    Tone(UnknownTone),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Terminal(msg) => write!(f, "{msg}"),
            Self::Items(err) => write!(f, "{err}"),
            Self::Tone(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Items(err) => Some(err),
            Self::Tone(err) => Some(err),
            Self::Terminal(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ItemListError> for Error {
    fn from(err: ItemListError) -> Self {
        Self::Items(err)
    }
}

impl From<UnknownTone> for Error {
    fn from(err: UnknownTone) -> Self {
        Self::Tone(err)
    }
}

/// Standard result type for YongUI APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Buffer, Dropdown, DropdownHitIds, DropdownItem, DropdownOutcome, DropdownState, Error,
        Event, Frame, HitId, KeyCode, KeyEvent, Modifiers, Rect, Result, StatefulWidget, Style,
        TerminalSession, Theme, Tone, Widget,
    };

    pub use crate::{core, render, style, widgets};
}

pub use yongui_core as core;
pub use yongui_render as render;
pub use yongui_style as style;
pub use yongui_widgets as widgets;
