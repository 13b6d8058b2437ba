//! Core types shared across the workspace.
//!
//! This crate contains pure data types with no external dependencies:
//! the integer pixel coordinate, the four-way direction enum, the logical
//! handheld buttons, and the display/timing constants.

/// Display dimensions of the simulated LCD matrix (columns x rows).
pub const PIXEL_WIDTH: i32 = 10;
pub const PIXEL_HEIGHT: i32 = 20;

/// One logical step costs `STEP_BUDGET_MS / speed_level` milliseconds.
pub const STEP_BUDGET_MS: f64 = 500.0;

/// Valid range for the speed-level knob.
pub const SPEED_LEVEL_MIN: u8 = 1;
pub const SPEED_LEVEL_MAX: u8 = 15;
pub const DEFAULT_SPEED_LEVEL: u8 = 10;

/// Spawn configuration for the cycling marquee glyph: the shape enters
/// from above the matrix and falls one cell per logical step.
pub const GLYPH_SPAWN_CENTER: Point = Point::new(4, -4);
pub const GLYPH_FALL_VECTOR: Point = Point::new(0, 1);
pub const GLYPH_SPEED: u32 = 1;

/// Per-row delays for the row-sweep transition effect (milliseconds).
pub const ROW_SWEEP_SLOW_DELAY_MS: f64 = 80.0;
pub const ROW_SWEEP_FAST_DELAY_MS: f64 = 30.0;

/// Per-cell delay for the spiral-sweep transition effect (milliseconds).
pub const SPIRAL_SWEEP_DELAY_MS: f64 = 10.0;

/// An integer pixel coordinate on (or off) the display.
///
/// The origin is the top-left cell; `x` grows rightward and `y` grows
/// downward. Coordinates outside the display are legal and used for
/// shapes gliding in from off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise scaling, used to stretch a unit vector by a speed.
    pub const fn scaled(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Movement or facing direction of a shape on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The axis-aligned unit vector for this direction.
    pub const fn to_vector(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// Classify a raw vector as one of the four directions.
    ///
    /// Anything that is not on a single axis (including the zero vector)
    /// maps to `Down`, matching the historical behavior callers rely on.
    pub fn from_vector(vector: Point) -> Self {
        if vector.x == 0 && vector.y < 0 {
            Direction::Up
        } else if vector.x == 0 && vector.y > 0 {
            Direction::Down
        } else if vector.x < 0 && vector.y == 0 {
            Direction::Left
        } else if vector.x > 0 && vector.y == 0 {
            Direction::Right
        } else {
            Direction::Down
        }
    }
}

/// Logical buttons of the simulated handheld.
///
/// The host maps physical input (keyboard, on-screen buttons) onto these
/// values and forwards them to the active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameButton {
    Up,
    Down,
    Left,
    Right,
    /// Primary action button (rotate, fire, confirm).
    Function,
}
