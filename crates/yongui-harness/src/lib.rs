#![forbid(unsafe_code)]

//! Test helpers for YongUI widgets.
//!
//! Captures a [`Buffer`] as plain text and compares it against expected rows,
//! printing a line diff on mismatch.
//!
//! ```
//! use yongui_harness::{assert_rows, buffer::Buffer, cell::Cell};
//!
//! let mut buf = Buffer::new(3, 2);
//! buf.set(0, 0, Cell::from_char('h'));
//! buf.set(1, 0, Cell::from_char('i'));
//! assert_rows!(&buf, ["hi", ""]);
//! ```

use std::fmt::Write as FmtWrite;

use yongui_render::buffer::Buffer;

pub use yongui_core::geometry::Rect;
pub use yongui_render::buffer;
pub use yongui_render::cell;

/// How [`assert_buffer_text`] compares lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Byte-exact comparison.
    Exact,
    /// Trailing spaces on each line are ignored.
    #[default]
    TrimTrailing,
}

/// Convert a `Buffer` to a plain text string.
///
/// Each row becomes one line. Empty cells become spaces. Continuation cells
/// (trailing cells of wide characters) are skipped so wide characters occupy
/// their natural display width in the output string.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 1) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);

    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }
        out.push_str(&row_text(buf, y));
    }
    out
}

/// One row of a buffer as text. Out-of-range rows are empty.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    if y >= buf.height() {
        return String::new();
    }
    buf.row_cells(y)
        .iter()
        .filter(|cell| !cell.is_continuation())
        .map(|cell| cell.content.as_char().unwrap_or(' '))
        .collect()
}

/// Compute a simple line-by-line diff between two text strings.
///
/// Lines prefixed with ` ` match, `-` appear only in `expected` and `+` only
/// in `actual`. Returns an empty string when the inputs are identical.
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let max_lines = expected_lines.len().max(actual_lines.len());
    let mut out = String::new();
    let mut has_diff = false;

    for i in 0..max_lines {
        let exp = expected_lines.get(i).copied();
        let act = actual_lines.get(i).copied();

        // Writing into a String cannot fail.
        let _ = match (exp, act) {
            (Some(e), Some(a)) if e == a => writeln!(out, " {e}"),
            (Some(e), Some(a)) => {
                has_diff = true;
                writeln!(out, "-{e}").and_then(|()| writeln!(out, "+{a}"))
            }
            (Some(e), None) => {
                has_diff = true;
                writeln!(out, "-{e}")
            }
            (None, Some(a)) => {
                has_diff = true;
                writeln!(out, "+{a}")
            }
            (None, None) => Ok(()),
        };
    }

    if has_diff { out } else { String::new() }
}

fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .split('\n')
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Assert that a buffer's text matches `expected` row by row.
///
/// # Panics
///
/// If the text differs, with a line diff in the message.
pub fn assert_buffer_text(buf: &Buffer, expected: &[&str], mode: MatchMode) {
    let expected = normalize(&expected.join("\n"), mode);
    let actual = normalize(&buffer_to_text(buf), mode);
    if expected != actual {
        let diff = diff_text(&expected, &actual);
        panic!(
            "\n=== Buffer mismatch ({w}x{h}, {mode:?}) ===\n\
             Diff (- expected, + actual):\n{diff}",
            w = buf.width(),
            h = buf.height(),
        );
    }
}

/// Assert buffer rows, ignoring trailing spaces.
///
/// ```ignore
/// assert_rows!(&frame.buffer, ["╭──╮", "│ab│", "╰──╯"]);
/// assert_rows!(&frame.buffer, ["ab  "], MatchMode::Exact);
/// ```
#[macro_export]
macro_rules! assert_rows {
    ($buf:expr, [$($row:expr),* $(,)?]) => {
        $crate::assert_buffer_text($buf, &[$($row),*], $crate::MatchMode::TrimTrailing)
    };
    ($buf:expr, [$($row:expr),* $(,)?], $mode:expr) => {
        $crate::assert_buffer_text($buf, &[$($row),*], $mode)
    };
}
