#![forbid(unsafe_code)]

//! Cell types: content, packed colors, and style flags.
//!
//! A [`Cell`] is one terminal grid position. Wide characters occupy a head
//! cell followed by [`Cell::CONTINUATION`] cells.

use unicode_width::UnicodeWidthChar;

/// Content of a cell: empty, a single `char`, or a continuation marker.
///
/// Stored as a `u32`: `0` is empty, [`CellContent::CONTINUATION`] is a value
/// outside the Unicode scalar range, everything else is a `char`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct CellContent(u32);

impl CellContent {
    /// Empty cell.
    pub const EMPTY: Self = Self(0);

    /// Trailing cell of a wide character.
    pub const CONTINUATION: Self = Self(0x7FFF_FFFF);

    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[inline]
    pub const fn is_continuation(self) -> bool {
        self.0 == Self::CONTINUATION.0
    }

    /// The character, if this cell holds one.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() || self.is_continuation() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// Display width in cells. Empty and continuation cells are 0.
    #[inline]
    pub fn width(self) -> usize {
        self.as_char()
            .map_or(0, |c| UnicodeWidthChar::width(c).unwrap_or(0))
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl core::fmt::Debug for CellContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            f.write_str("Empty")
        } else if self.is_continuation() {
            f.write_str("Continuation")
        } else {
            match self.as_char() {
                Some(c) => write!(f, "Char({c:?})"),
                None => write!(f, "Invalid({:#x})", self.0),
            }
        }
    }
}

/// A compact RGBA color, laid out `0xRRGGBBAA`.
///
/// Alpha 0 ([`PackedRgba::TRANSPARENT`]) means "terminal default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque RGB color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Parse a `#RRGGBB` token. Const so theme tables can use it.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const) on malformed input.
    pub const fn hex(token: &str) -> Self {
        let bytes = token.as_bytes();
        assert!(bytes.len() == 7 && bytes[0] == b'#', "expected #RRGGBB");
        Self::rgb(
            hex_pair(bytes[1], bytes[2]),
            hex_pair(bytes[3], bytes[4]),
            hex_pair(bytes[5], bytes[6]),
        )
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }
}

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn hex_pair(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) * 16 + hex_digit(lo)
}

bitflags::bitflags! {
    /// Cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const UNDERLINE     = 0b0000_1000;
        /// Swap fg/bg.
        const REVERSE       = 0b0010_0000;
        const STRIKETHROUGH = 0b0100_0000;
    }
}

/// One terminal grid position.
///
/// The default cell is empty with white foreground and transparent
/// background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub content: CellContent,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub attrs: StyleFlags,
}

impl Cell {
    /// Placeholder for the trailing cells of a wide character.
    pub const CONTINUATION: Self = Self {
        content: CellContent::CONTINUATION,
        fg: PackedRgba::TRANSPARENT,
        bg: PackedRgba::TRANSPARENT,
        attrs: StyleFlags::empty(),
    };

    #[inline]
    pub const fn new(content: CellContent) -> Self {
        Self {
            content,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }

    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self::new(CellContent::from_char(c))
    }

    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[inline]
    pub const fn with_char(mut self, c: char) -> Self {
        self.content = CellContent::from_char(c);
        self
    }

    #[inline]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellContent::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_roundtrips_char() {
        let c = CellContent::from_char('A');
        assert_eq!(c.as_char(), Some('A'));
        assert_eq!(c.width(), 1);
        assert!(!c.is_empty());
    }

    #[test]
    fn empty_and_continuation_have_no_char() {
        assert_eq!(CellContent::EMPTY.as_char(), None);
        assert_eq!(CellContent::CONTINUATION.as_char(), None);
        assert_eq!(CellContent::CONTINUATION.width(), 0);
        assert!(Cell::CONTINUATION.is_continuation());
    }

    #[test]
    fn wide_char_width() {
        assert_eq!(CellContent::from_char('항').width(), 2);
    }

    #[test]
    fn packed_rgba_channels() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
        assert!(PackedRgba::TRANSPARENT.is_transparent());
        assert!(!PackedRgba::BLACK.is_transparent());
    }

    #[test]
    fn hex_token_parses() {
        const VIOLET: PackedRgba = PackedRgba::hex("#0064FF");
        assert_eq!(VIOLET, PackedRgba::rgb(0x00, 0x64, 0xFF));
        assert_eq!(PackedRgba::hex("#e3e8ea"), PackedRgba::rgb(0xE3, 0xE8, 0xEA));
    }

    #[test]
    fn default_cell() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.fg, PackedRgba::WHITE);
        assert_eq!(cell.bg, PackedRgba::TRANSPARENT);
        assert!(cell.attrs.is_empty());
    }
}
