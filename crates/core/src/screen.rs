//! The screen: the collection of active shapes and the step protocol.
//!
//! The screen only thinks in pixel coordinates and shapes; the actual
//! pixel state lives behind the [`PixelSurface`] the host passes into
//! each step.

use crate::shape::MovingShape;
use crate::surface::PixelSurface;

/// Handle to a shape registered on a [`Screen`].
///
/// Shapes are never removed, so a handle stays valid for the screen's
/// lifetime; drivers use it to recycle an entity in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeId(usize);

/// Owns the active shapes and redraws them onto a surface.
#[derive(Debug, Default)]
pub struct Screen {
    shapes: Vec<MovingShape>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shape. Registration order is draw order; later shapes
    /// overpaint earlier ones on a shared cell.
    pub fn add_shape(&mut self, shape: MovingShape) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }

    pub fn shape(&self, id: ShapeId) -> &MovingShape {
        &self.shapes[id.0]
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> &mut MovingShape {
        &mut self.shapes[id.0]
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Execute one display update, in this exact order:
    ///
    /// 1. clear every pixel;
    /// 2. per shape, in registration order: advance one step, then draw
    ///    it, clipping any cell outside the surface.
    pub fn step(&mut self, host: &mut dyn PixelSurface) {
        host.clear();

        for shape in &mut self.shapes {
            shape.advance();
            draw_shape(shape, host);
        }
    }

    /// Redraw all shapes at their current positions without advancing.
    pub fn redraw(&self, host: &mut dyn PixelSurface) {
        host.clear();
        for shape in &self.shapes {
            draw_shape(shape, host);
        }
    }
}

fn draw_shape(shape: &MovingShape, host: &mut dyn PixelSurface) {
    let (width, height) = (host.width(), host.height());
    for &offset in shape.offsets {
        let cell = shape.center + offset;
        if cell.x < 0 || cell.x >= width || cell.y < 0 || cell.y >= height {
            continue;
        }
        host.set_pixel(cell.x, cell.y, true);
    }
}
