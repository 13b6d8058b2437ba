//! The frame driver: real time in, whole logical steps out.
//!
//! A frame driver is ticked once per rendered frame with the elapsed
//! wall-clock time. It accumulates that time into a step budget and
//! drains the budget in whole logical steps, so animation speed is
//! independent of the frame rate: a slow frame catches up with several
//! steps instead of dropping moves.

use log::debug;
use tui_brick_types::{
    Point, DEFAULT_SPEED_LEVEL, GLYPH_FALL_VECTOR, GLYPH_SPAWN_CENTER, GLYPH_SPEED,
    SPEED_LEVEL_MAX, SPEED_LEVEL_MIN, STEP_BUDGET_MS,
};

use crate::glyphs;
use crate::screen::{Screen, ShapeId};
use crate::shape::MovingShape;
use crate::surface::PixelSurface;

/// Drives the glyph marquee: a single shape cycling through the catalog,
/// falling in from above the display and respawning once it has fully
/// left the bottom.
#[derive(Debug)]
pub struct FrameDriver {
    screen: Screen,
    glyph: ShapeId,
    glyph_index: i32,
    spawn_center: Point,
    speed_level: u8,
    accumulator_ms: f64,
    attached: bool,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_spawn(GLYPH_SPAWN_CENTER)
    }

    pub fn with_spawn(spawn_center: Point) -> Self {
        let mut screen = Screen::new();
        let glyph = screen.add_shape(MovingShape::from_vector(
            glyphs::glyph(0),
            spawn_center,
            GLYPH_FALL_VECTOR,
            GLYPH_SPEED,
        ));
        Self {
            screen,
            glyph,
            glyph_index: 0,
            spawn_center,
            speed_level: DEFAULT_SPEED_LEVEL,
            accumulator_ms: 0.0,
            attached: true,
        }
    }

    /// Milliseconds of budget one logical step consumes at the current
    /// speed level.
    pub fn step_interval_ms(&self) -> f64 {
        STEP_BUDGET_MS / f64::from(self.speed_level)
    }

    pub fn speed_level(&self) -> u8 {
        self.speed_level
    }

    /// Change the speed level.
    ///
    /// Out-of-range levels are rejected and leave the previous level in
    /// effect; an accepted level applies on the next accumulator drain,
    /// never retroactively.
    pub fn set_speed_level(&mut self, level: u8) -> bool {
        if !(SPEED_LEVEL_MIN..=SPEED_LEVEL_MAX).contains(&level) {
            debug!("rejected speed level {level}, keeping {}", self.speed_level);
            return false;
        }
        self.speed_level = level;
        true
    }

    /// Index of the glyph currently falling.
    pub fn glyph_index(&self) -> i32 {
        self.glyph_index
    }

    /// How many glyphs have fully fallen through the display.
    pub fn glyphs_cycled(&self) -> i32 {
        self.glyph_index
    }

    /// Remaining fraction of a step in the budget, for tests.
    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Stop driving steps. The budget is discarded so a later
    /// [`attach`](Self::attach) starts from a fresh accumulator instead
    /// of replaying stale time.
    pub fn detach(&mut self) {
        self.attached = false;
        self.accumulator_ms = 0.0;
    }

    pub fn attach(&mut self) {
        self.attached = true;
        self.accumulator_ms = 0.0;
    }

    /// The cycling shape itself, for callers that want to inspect it.
    pub fn glyph_shape(&self) -> &MovingShape {
        self.screen.shape(self.glyph)
    }

    /// Feed one rendered frame's worth of elapsed real time.
    ///
    /// Performs zero or more logical steps depending on how much budget
    /// has accumulated. After each step the glyph is respawned with the
    /// next catalog template once it has fully left the display.
    pub fn on_frame(&mut self, elapsed_ms: f64, host: &mut dyn PixelSurface) {
        if !self.attached {
            return;
        }

        self.accumulator_ms += elapsed_ms;
        let interval = self.step_interval_ms();
        while self.accumulator_ms >= interval {
            self.accumulator_ms -= interval;

            self.screen.step(host);
            if self.screen.shape(self.glyph).off_bottom(host.height()) {
                self.respawn_next_glyph();
            }
        }
    }

    fn respawn_next_glyph(&mut self) {
        self.glyph_index += 1;
        debug!("glyph left the display, cycling to catalog index {}", self.glyph_index);
        let shape = self.screen.shape_mut(self.glyph);
        shape.center = self.spawn_center;
        shape.offsets = glyphs::glyph(self.glyph_index);
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelBuffer;

    #[test]
    fn default_configuration_matches_the_handheld() {
        let driver = FrameDriver::new();
        assert_eq!(driver.speed_level(), DEFAULT_SPEED_LEVEL);
        assert_eq!(driver.step_interval_ms(), 50.0);
        assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);
    }

    #[test]
    fn out_of_range_levels_keep_the_previous_one() {
        let mut driver = FrameDriver::new();
        assert!(driver.set_speed_level(3));
        assert!(!driver.set_speed_level(0));
        assert!(!driver.set_speed_level(16));
        assert_eq!(driver.speed_level(), 3);
    }

    #[test]
    fn budget_drains_in_whole_steps() {
        let mut driver = FrameDriver::new();
        let mut buf = PixelBuffer::new(10, 20);
        driver.set_speed_level(10); // 50 ms per step

        driver.on_frame(120.0, &mut buf);
        // Two whole steps executed, 20 ms left in the budget.
        assert_eq!(driver.glyph_shape().center.y, -2);
        assert!((driver.accumulator_ms() - 20.0).abs() < 1e-9);

        driver.on_frame(30.0, &mut buf);
        assert_eq!(driver.glyph_shape().center.y, -1);
        assert!(driver.accumulator_ms().abs() < 1e-9);
    }

    #[test]
    fn short_frames_perform_no_step() {
        let mut driver = FrameDriver::new();
        let mut buf = PixelBuffer::new(10, 20);
        driver.on_frame(49.9, &mut buf);
        assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);
    }

    #[test]
    fn detach_stops_stepping_and_clears_the_budget() {
        let mut driver = FrameDriver::new();
        let mut buf = PixelBuffer::new(10, 20);

        driver.on_frame(40.0, &mut buf);
        driver.detach();
        driver.on_frame(10_000.0, &mut buf);
        assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);

        driver.attach();
        assert_eq!(driver.accumulator_ms(), 0.0);
        driver.on_frame(49.0, &mut buf);
        // A fresh accumulator: the pre-detach 40 ms were not replayed.
        assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);
    }
}
