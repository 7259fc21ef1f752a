#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! Writes a [`Buffer`] to a terminal, emitting SGR sequences only when the
//! style changes between adjacent cells and skipping rows that are identical
//! to the previously presented frame. Output is wrapped in synchronized
//! output (DEC 2026) and flushed once per frame.

use std::io::{self, BufWriter, Write};

use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};

/// Size of the internal write buffer.
const BUFFER_CAPACITY: usize = 16 * 1024;

const SYNC_BEGIN: &[u8] = b"\x1b[?2026h";
const SYNC_END: &[u8] = b"\x1b[?2026l";
const SGR_RESET: &[u8] = b"\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

/// ANSI presenter over any writer.
#[derive(Debug)]
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    previous: Option<Buffer>,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            previous: None,
        }
    }

    /// Forget the last frame so the next `present` redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Present a buffer. Rows unchanged since the last call are skipped.
    pub fn present(&mut self, buffer: &Buffer) -> io::Result<()> {
        let previous = self
            .previous
            .take()
            .filter(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        self.writer.write_all(SYNC_BEGIN)?;
        for y in 0..buffer.height() {
            if let Some(prev) = &previous
                && prev.row_cells(y) == buffer.row_cells(y)
            {
                continue;
            }
            self.write_row(buffer, y)?;
        }
        self.writer.write_all(SYNC_END)?;
        self.writer.flush()?;

        yongui_core::trace!("frame presented");
        self.previous = Some(buffer.clone());
        Ok(())
    }

    /// Recover the inner writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|err| err.into_error())
    }

    fn write_row(&mut self, buffer: &Buffer, y: u16) -> io::Result<()> {
        write!(self.writer, "\x1b[{};1H", y + 1)?;
        let mut current: Option<CellStyle> = None;

        for cell in buffer.row_cells(y) {
            if cell.is_continuation() {
                continue;
            }
            let style = CellStyle::from_cell(cell);
            if current != Some(style) {
                self.write_style(style)?;
                current = Some(style);
            }
            let ch = cell.content.as_char().unwrap_or(' ');
            let mut utf8 = [0u8; 4];
            self.writer.write_all(ch.encode_utf8(&mut utf8).as_bytes())?;
        }
        self.writer.write_all(SGR_RESET)
    }

    fn write_style(&mut self, style: CellStyle) -> io::Result<()> {
        self.writer.write_all(SGR_RESET)?;
        for (flag, code) in [
            (StyleFlags::BOLD, 1),
            (StyleFlags::DIM, 2),
            (StyleFlags::ITALIC, 3),
            (StyleFlags::UNDERLINE, 4),
            (StyleFlags::REVERSE, 7),
            (StyleFlags::STRIKETHROUGH, 9),
        ] {
            if style.attrs.contains(flag) {
                write!(self.writer, "\x1b[{code}m")?;
            }
        }
        if !style.fg.is_transparent() {
            write!(
                self.writer,
                "\x1b[38;2;{};{};{}m",
                style.fg.r(),
                style.fg.g(),
                style.fg.b()
            )?;
        }
        if !style.bg.is_transparent() {
            write!(
                self.writer,
                "\x1b[48;2;{};{};{}m",
                style.bg.r(),
                style.bg.g(),
                style.bg.b()
            )?;
        }
        Ok(())
    }
}
