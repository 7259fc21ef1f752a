#![forbid(unsafe_code)]

//! Cell style: optional foreground, background, and attribute flags.

use yongui_render::cell::{Cell, PackedRgba, StyleFlags};

/// A partial cell style. Unset fields leave the cell untouched when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags, keeping any already set.
    #[must_use]
    pub fn add_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | attrs);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attrs(StyleFlags::DIM)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attrs(StyleFlags::UNDERLINE)
    }

    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Layer `self` over `base`: fields set on `self` win, attributes union.
    #[must_use]
    pub fn merge(&self, base: &Style) -> Style {
        let attrs = match (self.attrs, base.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Style {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            attrs,
        }
    }

    /// Apply to a cell in place, preserving its content.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs |= attrs;
        }
    }
}
