//! The glyph marquee, the built-in demo game.
//!
//! Cycles the whole shape catalog across the display: each glyph falls
//! in from above, leaves through the bottom, and is replaced by the next
//! one. Up/Down adjust the speed level; the score counts fully cycled
//! glyphs.

use log::debug;
use tui_brick_types::GameButton;

use crate::driver::FrameDriver;
use crate::game::Game;
use crate::surface::PixelSurface;

pub struct GlyphMarquee {
    driver: FrameDriver,
    running: bool,
}

impl GlyphMarquee {
    pub fn new() -> Self {
        Self {
            driver: FrameDriver::new(),
            running: false,
        }
    }

    pub fn speed_level(&self) -> u8 {
        self.driver.speed_level()
    }
}

impl Default for GlyphMarquee {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for GlyphMarquee {
    fn id(&self) -> &'static str {
        "marquee"
    }

    fn display_name(&self) -> &'static str {
        "Glyph Marquee"
    }

    fn start(&mut self) {
        debug!("marquee started");
        self.running = true;
        self.driver.attach();
    }

    fn stop(&mut self) {
        debug!("marquee stopped");
        self.running = false;
        self.driver.detach();
    }

    fn update(&mut self, host: &mut dyn PixelSurface, elapsed_ms: f64) {
        if !self.running {
            return;
        }
        self.driver.on_frame(elapsed_ms, host);
    }

    fn on_button_down(&mut self, button: GameButton) {
        let level = self.driver.speed_level();
        match button {
            GameButton::Up => {
                // Rejected at the bounds; the prior level stays.
                self.driver.set_speed_level(level.saturating_add(1));
            }
            GameButton::Down => {
                self.driver.set_speed_level(level.saturating_sub(1));
            }
            GameButton::Left | GameButton::Right | GameButton::Function => {}
        }
    }

    fn score(&self) -> i32 {
        self.driver.glyphs_cycled()
    }
}
