#![forbid(unsafe_code)]

//! Frame = Buffer + hit grid for a render pass.
//!
//! Widgets draw into [`Frame::buffer`] and register clickable regions; the
//! host later maps a mouse position back to the widget and item under it
//! with [`Frame::hit_test`].
//!
//! ```
//! use yongui_core::geometry::Rect;
//! use yongui_render::frame::{Frame, HitId, HitRegion};
//!
//! let mut frame = Frame::with_hit_grid(20, 5);
//! frame.register_hit(Rect::new(0, 1, 20, 1), HitId::new(7), HitRegion::Content, 2);
//! assert_eq!(frame.hit_test(3, 1), Some((HitId::new(7), HitRegion::Content, 2)));
//! ```

use crate::buffer::Buffer;
use yongui_core::geometry::Rect;

/// Identifier for a clickable region in the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque data attached to a hit cell (list widgets store the item index).
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    #[default]
    None,
    /// Main content area, e.g. a list row.
    Content,
    Border,
    /// Clickable button, e.g. a dropdown trigger.
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct HitCell {
    widget_id: Option<HitId>,
    region: HitRegion,
    data: HitData,
}

/// Maps screen positions to the widget registered there.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![HitCell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Register a region. Later registrations win where they overlap.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize);
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize);
        if rect.x as usize >= x_end || rect.y as usize >= y_end {
            return;
        }

        let cell = HitCell {
            widget_id: Some(widget_id),
            region,
            data,
        };
        for y in rect.y as usize..y_end {
            let row_start = y * self.width as usize;
            self.cells[row_start + rect.x as usize..row_start + x_end].fill(cell);
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        let cell = self.cells.get(self.index(x, y)?)?;
        cell.widget_id.map(|id| (id, cell.region, cell.data))
    }

    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Render target for one pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Cell grid widgets draw into.
    pub buffer: Buffer,
    hit_grid: Option<HitGrid>,
}

impl Frame {
    /// Frame without hit testing; `register_hit` becomes a no-op.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
        }
    }

    /// Frame with hit testing enabled.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
        }
    }

    pub fn enable_hit_testing(&mut self) {
        if self.hit_grid.is_none() {
            self.hit_grid = Some(HitGrid::new(self.width(), self.height()));
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear cells and hit regions for the next pass.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(grid) = &mut self.hit_grid {
            grid.clear();
        }
    }

    /// Register a hit region. Returns `false` when hit testing is disabled.
    pub fn register_hit(
        &mut self,
        rect: Rect,
        id: HitId,
        region: HitRegion,
        data: HitData,
    ) -> bool {
        match &mut self.hit_grid {
            Some(grid) => {
                grid.register(rect, id, region, data);
                true
            }
            None => false,
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref()?.hit_test(x, y)
    }
}
