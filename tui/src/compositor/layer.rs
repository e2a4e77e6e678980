//! Layer - A single compositable layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::LayerId;

/// A single layer in the compositor
pub struct Layer {
    pub id: LayerId,
    /// Z-order (higher = in front)
    pub z_index: i32,
    /// Screen position and size
    pub bounds: Rect,
    pub visible: bool,
    /// Render target, in layer-local coordinates
    pub buffer: Buffer,
}

impl Layer {
    pub fn new(id: LayerId, bounds: Rect, z_index: i32) -> Self {
        Self {
            id,
            z_index,
            bounds,
            visible: true,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
        }
    }

    /// Move and resize; the buffer is recreated only when the size changes
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds.width != self.bounds.width || bounds.height != self.bounds.height {
            self.buffer = Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height));
        }
        self.bounds = bounds;
    }

    /// Check if a screen point is within this layer
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x.saturating_add(self.bounds.width)
            && y >= self.bounds.y
            && y < self.bounds.y.saturating_add(self.bounds.height)
    }
}
