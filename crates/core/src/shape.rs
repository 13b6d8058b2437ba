//! The moving shape entity.
//!
//! A shape instance pairs a borrowed template with a mutable center, a
//! facing direction (for aiming logic), a movement direction, and a
//! speed. Centers are allowed to be off-grid: the surface clips drawing,
//! which is what lets shapes glide in from above and out below.

use tui_brick_types::{Direction, Point};

/// A shape instance that can move across the display.
///
/// The template (`offsets`) is shared, read-only catalog data; the
/// template cannot be absent and the speed cannot be negative, so
/// construction never fails.
#[derive(Debug, Clone)]
pub struct MovingShape {
    /// Cell offsets relative to `center`.
    pub offsets: &'static [Point],
    /// Current center position. May lie outside the display.
    pub center: Point,
    /// Which way the shape points (muzzle, nose). Distinct from the
    /// movement direction so a shape can strafe.
    pub facing: Direction,
    /// Which way `advance` moves the center.
    pub move_direction: Direction,
    /// Cells moved per logical step.
    pub speed: u32,
}

impl MovingShape {
    pub fn new(
        offsets: &'static [Point],
        center: Point,
        facing: Direction,
        move_direction: Direction,
        speed: u32,
    ) -> Self {
        Self {
            offsets,
            center,
            facing,
            move_direction,
            speed,
        }
    }

    /// Create a shape from a raw direction vector, setting both the
    /// facing and the movement direction from it.
    pub fn from_vector(
        offsets: &'static [Point],
        center: Point,
        direction: Point,
        speed: u32,
    ) -> Self {
        let dir = Direction::from_vector(direction);
        Self::new(offsets, center, dir, dir, speed)
    }

    /// Advance the center one logical step along the movement direction.
    ///
    /// The new center is taken unconditionally; the surface clips
    /// off-grid cells during drawing, so no bound check happens here.
    /// A zero speed leaves the center unchanged.
    pub fn advance(&mut self) {
        if self.speed == 0 {
            return;
        }
        let step = self.move_direction.to_vector().scaled(self.speed as i32);
        if step.x == 0 && step.y == 0 {
            return;
        }
        self.center = self.center + step;
    }

    /// Bounding box of the occupied cells as `(min, max)` corners, or
    /// `None` for an empty template.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut iter = self.offsets.iter().map(|&o| self.center + o);
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for cell in iter {
            min.x = min.x.min(cell.x);
            min.y = min.y.min(cell.y);
            max.x = max.x.max(cell.x);
            max.y = max.y.max(cell.y);
        }
        Some((min, max))
    }

    /// Topmost and bottommost occupied rows.
    pub fn row_span(&self) -> Option<(i32, i32)> {
        self.bounds().map(|(min, max)| (min.y, max.y))
    }

    /// Whether the shape has fully left the display below the last
    /// visible row, i.e. even its topmost occupied row is out of view.
    pub fn off_bottom(&self, height: i32) -> bool {
        match self.row_span() {
            Some((top, bottom)) => top > height - 1 && bottom > height - 1,
            None => false,
        }
    }
}
