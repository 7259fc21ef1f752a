#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a row-major grid of [`Cell`]s (`index = y * width + x`)
//! with a scissor stack for clipping.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. The scissor stack always has at least one element, and each push
//!    intersects with the current top

use crate::cell::Cell;
use yongui_core::geometry::Rect;

/// A 2D grid of terminal cells.
///
/// ```
/// use yongui_render::buffer::Buffer;
/// use yongui_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    scissor_stack: Vec<Rect>,
}

impl Buffer {
    /// Create a buffer filled with default cells.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            scissor_stack: vec![Rect::from_size(width, height)],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Clear the cells of any wide character that overlaps `(x, y)`.
    fn cleanup_overlap(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else { return };
        let current = self.cells[idx];

        if current.content.width() > 1 {
            for dx in 1..current.content.width() as u16 {
                if let Some(tail) = self.index(x.saturating_add(dx), y)
                    && self.cells[tail].is_continuation()
                {
                    self.cells[tail] = Cell::default();
                }
            }
        } else if current.is_continuation() {
            let mut back_x = x;
            while back_x > 0 {
                back_x -= 1;
                let Some(head_idx) = self.index(back_x, y) else { break };
                let head = self.cells[head_idx];
                if head.is_continuation() {
                    continue;
                }
                let width = head.content.width() as u16;
                if back_x + width > x {
                    self.cells[head_idx] = Cell::default();
                    for dx in 1..width {
                        if let Some(tail) = self.index(back_x + dx, y)
                            && self.cells[tail].is_continuation()
                        {
                            self.cells[tail] = Cell::default();
                        }
                    }
                }
                break;
            }
        }
    }

    /// Set the cell at `(x, y)`.
    ///
    /// - Out-of-bounds or out-of-scissor writes are dropped.
    /// - Wide characters write continuation cells after the head; if the
    ///   whole character does not fit, nothing is written.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let width = cell.content.width().max(1) as u16;
        let scissor = self.current_scissor();

        for dx in 0..width {
            let Some(cx) = x.checked_add(dx) else { return };
            if self.index(cx, y).is_none() || !scissor.contains(cx, y) {
                return;
            }
        }

        for dx in 0..width {
            self.cleanup_overlap(x + dx, y);
        }

        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
        for dx in 1..width {
            if let Some(idx) = self.index(x + dx, y) {
                self.cells[idx] = Cell::CONTINUATION;
            }
        }
    }

    /// Fill a rectangle (clipped to bounds and scissor) with a cell.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = rect.intersection(&self.current_scissor());
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        assert!(y < self.height, "row {y} out of bounds");
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Restrict subsequent writes to `rect` (intersected with the current clip).
    pub fn push_scissor(&mut self, rect: Rect) {
        let next = rect.intersection(&self.current_scissor());
        self.scissor_stack.push(next);
    }

    /// Undo the last [`push_scissor`](Self::push_scissor). The base clip is never popped.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    #[inline]
    pub fn current_scissor(&self) -> Rect {
        *self
            .scissor_stack
            .last()
            .unwrap_or(&Rect::from_size(self.width, self.height))
    }

    /// Compare cell contents, ignoring scissor state.
    pub fn content_eq(&self, other: &Buffer) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Default for Buffer {
    /// A 1x1 buffer.
    fn default() -> Self {
        Self::new(1, 1)
    }
}
