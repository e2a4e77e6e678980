//! Layered Compositor
//!
//! Z-ordered layers, each with its own buffer, flattened into one output
//! buffer per frame. The card uses three: the screen itself, a confetti
//! overlay above it and the tab bar on top.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// How a layer's cells combine with what is beneath
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    /// Every cell replaces the one below
    Opaque,
    /// Spaces are holes; other cells take symbol and foreground but keep
    /// the background below
    Overlay,
}

pub struct Compositor {
    layers: HashMap<LayerId, (Layer, Blend)>,
    /// Back to front
    render_order: Vec<LayerId>,
    next_id: u32,
    output: Buffer,
    area: Rect,
}

impl Compositor {
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    pub fn create_layer(&mut self, bounds: Rect, z_index: i32, blend: Blend) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, (Layer::new(id, bounds, z_index), blend));
        self.update_render_order();

        id
    }

    /// Cleared buffer of a layer, ready to draw into
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|(l, _)| {
            l.buffer.reset();
            &mut l.buffer
        })
    }

    pub fn set_bounds(&mut self, id: LayerId, bounds: Rect) {
        if let Some((layer, _)) = self.layers.get_mut(&id) {
            layer.set_bounds(bounds);
        }
    }

    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some((layer, _)) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Flatten all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        for id in &self.render_order {
            if let Some((layer, blend)) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, self.area, layer, *blend);
                }
            }
        }

        &self.output
    }

    fn blit_layer(output: &mut Buffer, area: Rect, layer: &Layer, blend: Blend) {
        let lb = layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x + lx;
                let dst_y = lb.y + ly;
                if dst_x >= area.x + area.width || dst_y >= area.y + area.height {
                    continue;
                }

                let Some(src) = layer.buffer.cell((lx, ly)) else {
                    continue;
                };
                let Some(dst) = output.cell_mut((dst_x, dst_y)) else {
                    continue;
                };

                match blend {
                    Blend::Opaque => *dst = src.clone(),
                    Blend::Overlay if src.symbol() != " " => {
                        dst.set_symbol(src.symbol());
                        dst.set_fg(src.fg);
                    }
                    Blend::Overlay => {}
                }
            }
        }
    }

    /// Topmost visible layer at a screen position (for mouse events)
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        self.render_order.iter().rev().copied().find(|id| {
            self.layers
                .get(id)
                .is_some_and(|(layer, _)| layer.visible && layer.contains(x, y))
        })
    }

    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order
            .sort_by_key(|id| self.layers.get(id).map_or(0, |(l, _)| l.z_index));
    }
}
