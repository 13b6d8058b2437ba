//! Transition effects: full-surface sweeps played between games.
//!
//! Effects operate directly on the pixel surface rather than through
//! shapes. They are cooperative state machines: the host ticks them once
//! per frame with the elapsed wall-clock time, and every internal delay
//! is a suspension point between ticks; an effect never blocks the
//! calling thread.

use tui_brick_types::{
    Direction, Point, ROW_SWEEP_FAST_DELAY_MS, ROW_SWEEP_SLOW_DELAY_MS, SPIRAL_SWEEP_DELAY_MS,
};

use crate::surface::PixelSurface;

/// A multi-step full-surface animation.
pub trait TransitionEffect {
    /// Advance the effect by `elapsed_ms` of real time.
    ///
    /// Returns `true` while the effect is still running; a finished
    /// effect is inert and keeps returning `false`.
    fn tick(&mut self, host: &mut dyn PixelSurface, elapsed_ms: f64) -> bool;

    fn is_finished(&self) -> bool;
}

/// Compute the inward-spiral traversal order of a grid.
///
/// The walk starts at the top-right corner preferring to move left, and
/// turns through the cycle left → down → right → up (wrapping back to
/// left) whenever the next cell would leave the grid or has already been
/// visited. Every cell is visited exactly once; non-positive dimensions
/// yield an empty order.
pub fn spiral_order(width: i32, height: i32) -> Vec<Point> {
    if width <= 0 || height <= 0 {
        return Vec::new();
    }

    const CYCLE: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    let w = width as usize;
    let total = w * height as usize;
    let mut order = Vec::with_capacity(total);
    let mut visited = vec![false; total];
    let mut pos = Point::new(width - 1, 0);
    let mut dir = 0usize;

    for emitted in 0..total {
        order.push(pos);
        visited[pos.y as usize * w + pos.x as usize] = true;
        if emitted + 1 == total {
            break;
        }

        let walkable = |p: Point| {
            p.x >= 0
                && p.x < width
                && p.y >= 0
                && p.y < height
                && !visited[p.y as usize * w + p.x as usize]
        };

        // One turn is always enough: when the spiral is blocked, the
        // next direction in the cycle leads to an unvisited cell as long
        // as any remain.
        if !walkable(pos + CYCLE[dir].to_vector()) {
            dir = (dir + 1) % CYCLE.len();
        }
        pos = pos + CYCLE[dir].to_vector();
    }

    order
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepPhase {
    /// Waiting for the first tick to clear the surface and start.
    Pending,
    Fill,
    Wipe,
    Done,
}

/// Row-by-row fill-then-wipe effect.
///
/// Lights every row from the bottom upward, one row per delay, then
/// turns rows off again from the top downward. The slow and fast
/// variants differ only in the per-row delay.
#[derive(Debug, Clone)]
pub struct RowSweep {
    delay_ms: f64,
    accumulator_ms: f64,
    phase: SweepPhase,
    row: i32,
}

impl RowSweep {
    pub fn with_delay(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            accumulator_ms: 0.0,
            phase: SweepPhase::Pending,
            row: 0,
        }
    }

    /// The variant used for game-over style transitions.
    pub fn slow() -> Self {
        Self::with_delay(ROW_SWEEP_SLOW_DELAY_MS)
    }

    /// Same sweep with a shorter per-row delay, for lower-priority
    /// feedback.
    pub fn fast() -> Self {
        Self::with_delay(ROW_SWEEP_FAST_DELAY_MS)
    }

    fn apply_one(&mut self, host: &mut dyn PixelSurface) {
        match self.phase {
            SweepPhase::Fill => {
                fill_row(host, self.row, true);
                if self.row == 0 {
                    self.phase = SweepPhase::Wipe;
                    self.row = 0;
                } else {
                    self.row -= 1;
                }
            }
            SweepPhase::Wipe => {
                fill_row(host, self.row, false);
                if self.row >= host.height() - 1 {
                    self.phase = SweepPhase::Done;
                } else {
                    self.row += 1;
                }
            }
            SweepPhase::Pending | SweepPhase::Done => {}
        }
    }
}

impl TransitionEffect for RowSweep {
    fn tick(&mut self, host: &mut dyn PixelSurface, elapsed_ms: f64) -> bool {
        if self.phase == SweepPhase::Done {
            return false;
        }

        if self.phase == SweepPhase::Pending {
            host.clear();
            if host.width() <= 0 || host.height() <= 0 {
                self.phase = SweepPhase::Done;
                return false;
            }
            // The bottom row lights immediately; the delays pace the
            // rest of the sweep.
            self.phase = SweepPhase::Fill;
            self.row = host.height() - 1;
            self.apply_one(host);
        }

        self.accumulator_ms += elapsed_ms;
        while self.accumulator_ms >= self.delay_ms && self.phase != SweepPhase::Done {
            self.accumulator_ms -= self.delay_ms;
            self.apply_one(host);
        }

        self.phase != SweepPhase::Done
    }

    fn is_finished(&self) -> bool {
        self.phase == SweepPhase::Done
    }
}

fn fill_row(host: &mut dyn PixelSurface, row: i32, on: bool) {
    for x in 0..host.width() {
        host.set_pixel(x, row, on);
    }
}

/// Cell-by-cell spiral fill-then-wipe effect.
///
/// Precomputes the spiral traversal on its first tick, lights every cell
/// in that order, then turns them off again in the identical order.
#[derive(Debug, Clone)]
pub struct SpiralSweep {
    delay_ms: f64,
    accumulator_ms: f64,
    phase: SweepPhase,
    order: Vec<Point>,
    cursor: usize,
}

impl SpiralSweep {
    pub fn new() -> Self {
        Self::with_delay(SPIRAL_SWEEP_DELAY_MS)
    }

    pub fn with_delay(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            accumulator_ms: 0.0,
            phase: SweepPhase::Pending,
            order: Vec::new(),
            cursor: 0,
        }
    }

    fn apply_one(&mut self, host: &mut dyn PixelSurface) {
        match self.phase {
            SweepPhase::Fill => {
                let cell = self.order[self.cursor];
                host.set_pixel(cell.x, cell.y, true);
                self.cursor += 1;
                if self.cursor == self.order.len() {
                    self.phase = SweepPhase::Wipe;
                    self.cursor = 0;
                }
            }
            SweepPhase::Wipe => {
                let cell = self.order[self.cursor];
                host.set_pixel(cell.x, cell.y, false);
                self.cursor += 1;
                if self.cursor == self.order.len() {
                    self.phase = SweepPhase::Done;
                }
            }
            SweepPhase::Pending | SweepPhase::Done => {}
        }
    }
}

impl Default for SpiralSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionEffect for SpiralSweep {
    fn tick(&mut self, host: &mut dyn PixelSurface, elapsed_ms: f64) -> bool {
        if self.phase == SweepPhase::Done {
            return false;
        }

        if self.phase == SweepPhase::Pending {
            host.clear();
            self.order = spiral_order(host.width(), host.height());
            if self.order.is_empty() {
                self.phase = SweepPhase::Done;
                return false;
            }
            self.phase = SweepPhase::Fill;
            self.cursor = 0;
            self.apply_one(host);
        }

        self.accumulator_ms += elapsed_ms;
        while self.accumulator_ms >= self.delay_ms && self.phase != SweepPhase::Done {
            self.accumulator_ms -= self.delay_ms;
            self.apply_one(host);
        }

        self.phase != SweepPhase::Done
    }

    fn is_finished(&self) -> bool {
        self.phase == SweepPhase::Done
    }
}
