//! PanelView: maps the LCD panel into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. It imitates the look
//! of a handheld LCD: dark segments over a pale green backdrop, with an
//! unlit ghost visible for every cell, and a small status column beside
//! the panel.

use tui_brick_core::surface::PixelSurface;

use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::panel::LcdPanel;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host status lines shown beside the panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelStatus<'a> {
    pub game_name: &'a str,
    pub score: i32,
    pub speed_level: u8,
}

const LCD_BACKDROP: Rgb = Rgb::new(150, 166, 118);
const LCD_SEGMENT: Rgb = Rgb::new(26, 32, 22);
const LCD_GHOST: Rgb = Rgb::new(132, 148, 104);
const TEXT: Rgb = Rgb::new(210, 210, 210);
const TEXT_DIM: Rgb = Rgb::new(130, 130, 130);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Renders the LCD panel and its status column.
pub struct PanelView {
    /// Terminal columns per LCD cell; 2 compensates for the glyph
    /// aspect ratio of typical terminal fonts.
    cell_w: u16,
}

impl Default for PanelView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl PanelView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers reuse one framebuffer across frames; this is the
    /// allocation-free hot path.
    pub fn render_into(
        &self,
        panel: &LcdPanel,
        status: &PanelStatus<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::new(' ', TEXT, SCREEN_BG));

        let panel_w = (panel.width().max(0) as u16) * self.cell_w;
        let panel_h = panel.height().max(0) as u16;
        let frame_w = panel_w + 2;
        let frame_h = panel_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..panel.height() {
            for x in 0..panel.width() {
                let (ch, fg) = if panel.is_on(x, y) {
                    ('█', LCD_SEGMENT)
                } else {
                    ('▪', LCD_GHOST)
                };
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + y as u16;
                fb.fill_rect(px, py, self.cell_w, 1, Cell::new(ch, fg, LCD_BACKDROP));
            }
        }

        self.draw_status(fb, status, viewport, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        panel: &LcdPanel,
        status: &PanelStatus<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(panel, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = |ch| Cell::new(ch, TEXT_DIM, SCREEN_BG);

        fb.set(x, y, style('┌'));
        fb.set(x + w - 1, y, style('┐'));
        fb.set(x, y + h - 1, style('└'));
        fb.set(x + w - 1, y + h - 1, style('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, style('─'));
            fb.set(x + dx, y + h - 1, style('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style('│'));
            fb.set(x + w - 1, y + dy, style('│'));
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        status: &PanelStatus<'_>,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x >= viewport.width {
            return;
        }

        fb.put_str(x, y, status.game_name, TEXT, SCREEN_BG);

        fb.put_str(x, y + 2, "SCORE", TEXT, SCREEN_BG);
        fb.put_str(x, y + 3, &status.score.to_string(), TEXT_DIM, SCREEN_BG);

        fb.put_str(x, y + 5, "SPEED", TEXT, SCREEN_BG);
        fb.put_str(x, y + 6, &status.speed_level.to_string(), TEXT_DIM, SCREEN_BG);

        let help = [
            "↑/↓ speed",
            "1 sweep",
            "2 sweep+",
            "3 spiral",
            "q quit",
        ];
        for (i, line) in help.iter().enumerate() {
            fb.put_str(x, y + 8 + i as u16, line, TEXT_DIM, SCREEN_BG);
        }
    }
}
