#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames with hit testing, and ANSI output.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod presenter;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a single grapheme cluster in terminal cells.
///
/// Control characters and zero-width clusters report 0.
#[inline]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_ascii() {
        return grapheme
            .bytes()
            .filter(|b| (0x20..=0x7E).contains(b))
            .count();
    }
    UnicodeWidthStr::width(grapheme)
}

/// Display width of a string in terminal cells.
#[inline]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return grapheme_width(text);
    }
    text.graphemes(true).map(grapheme_width).sum()
}
