//! TerminalRenderer: flushes a framebuffer to the terminal.
//!
//! Commands are queued into an in-memory byte buffer and written in one
//! syscall per frame. Frames are diffed row-by-row against the previous
//! one; the LCD panel changes a handful of rows per step, so whole-row
//! granularity is enough.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        self.buf.clear();
        if full {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut colors: Option<(Rgb, Rgb)> = None;
        for y in 0..fb.height() {
            if !full {
                if let Some(prev) = &self.last {
                    if prev.row(y) == fb.row(y) {
                        continue;
                    }
                }
            }

            self.buf.queue(cursor::MoveTo(0, y))?;
            for cell in fb.row(y) {
                if colors != Some((cell.fg, cell.bg)) {
                    self.buf.queue(SetForegroundColor(to_color(cell.fg)))?;
                    self.buf.queue(SetBackgroundColor(to_color(cell.bg)))?;
                    colors = Some((cell.fg, cell.bg));
                }
                self.buf.queue(Print(cell.ch))?;
            }
        }
        self.buf.queue(ResetColor)?;
        self.flush_buf()?;

        self.last = Some(fb.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_conversion_preserves_channels() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
