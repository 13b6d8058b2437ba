//! The terminal-owned LCD panel surface.

use tui_brick_core::surface::PixelSurface;

/// The host-side pixel grid the display core draws onto.
///
/// Redundant writes are suppressed when tracking changes, so a frame
/// that redraws the identical picture does not force a terminal flush.
#[derive(Debug, Clone)]
pub struct LcdPanel {
    width: i32,
    height: i32,
    cells: Vec<bool>,
    changed: bool,
}

impl LcdPanel {
    pub fn new(width: i32, height: i32) -> Self {
        let len = if width > 0 && height > 0 {
            (width as usize) * (height as usize)
        } else {
            0
        };
        Self {
            width: width.max(0),
            height: height.max(0),
            cells: vec![false; len],
            changed: true,
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Whether anything changed since the last call, clearing the flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl PixelSurface for LcdPanel {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self) {
        for cell in &mut self.cells {
            if *cell {
                *cell = false;
                self.changed = true;
            }
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some(i) = self.index(x, y) {
            if self.cells[i] != on {
                self.cells[i] = on;
                self.changed = true;
            }
        }
    }
}
