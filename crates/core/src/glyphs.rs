//! Predefined pixel-art shape templates.
//!
//! Every template is a fixed set of offsets relative to the shape's
//! center point. Digits and letters are 3x5 dot matrices (top row at
//! y = 0, centered on x = 0) drawn so that visually similar pairs such
//! as `0`/`O`, `2`/`Z`, or `8`/`B` stay distinguishable at this
//! resolution. Templates are shared by reference and never mutated.

use tui_brick_types::Point;

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Racing-game car sprite.
pub static FORMULA_ONE_CAR: &[Point] = &[
    p(0, 0), // nose
    p(-1, 1),
    p(0, 1),
    p(1, 1), // front wheels / body
    p(0, 2), // waist
    p(-1, 3),
    p(1, 3), // rear wheels
];

/// Player tank sprite, muzzle pointing up.
pub static PLAYER_TANK: &[Point] = &[
    p(0, -1), // muzzle
    p(-1, 0),
    p(0, 0),
    p(1, 0), // hull
    p(-1, 1),
    p(0, 1),
    p(1, 1), // tracks
];

/// Enemy tank sprite; the hollow track row tells it apart from the player.
pub static ENEMY_TANK: &[Point] = &[
    p(0, -1), // muzzle
    p(-1, 0),
    p(0, 0),
    p(1, 0), // hull
    p(-1, 1),
    p(1, 1), // tracks
];

/// Debris burst shown when a car or tank is destroyed.
pub static EXPLOSION: &[Point] = &[
    p(-1, 0),
    p(2, 0),
    p(0, 1),
    p(1, 1),
    p(0, 2),
    p(1, 2),
    p(-1, 3),
    p(2, 3),
];

pub static NUM_0: &[Point] = &[
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(0, 4),
];

pub static NUM_1: &[Point] = &[p(1, 0), p(0, 1), p(1, 1), p(1, 2), p(1, 3), p(1, 4)];

pub static NUM_2: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 1),
    p(0, 2),
    p(-1, 3),
    p(-1, 4),
    p(0, 4),
    p(1, 4),
];

pub static NUM_3: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 1),
    p(0, 2),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
];

pub static NUM_4: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(1, 3),
    p(1, 4),
];

pub static NUM_5: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(-1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
    p(1, 4),
];

pub static NUM_6: &[Point] = &[
    p(-1, 0),
    p(-1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
    p(1, 4),
];

pub static NUM_7: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(1, 1),
    p(0, 2),
    p(0, 3),
    p(0, 4),
];

pub static NUM_8: &[Point] = &[p(0, 0), p(-1, 1), p(1, 1), p(0, 2), p(-1, 3), p(1, 3), p(0, 4)];

pub static NUM_9: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(1, 3),
    p(1, 4),
];

pub static LETTER_A: &[Point] = &[
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_B: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
];

pub static LETTER_C: &[Point] = &[
    p(0, 0),
    p(1, 0),
    p(-1, 1),
    p(-1, 2),
    p(-1, 3),
    p(0, 4),
    p(1, 4),
];

pub static LETTER_D: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
];

pub static LETTER_E: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(-1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(-1, 3),
    p(-1, 4),
    p(0, 4),
    p(1, 4),
];

pub static LETTER_F: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(-1, 1),
    p(-1, 2),
    p(0, 2),
    p(-1, 3),
    p(-1, 4),
];

pub static LETTER_G: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(-1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
    p(1, 4),
];

pub static LETTER_H: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_I: &[Point] = &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(0, 4)];

pub static LETTER_J: &[Point] = &[p(1, 0), p(1, 1), p(1, 2), p(-1, 3), p(1, 3), p(0, 4)];

pub static LETTER_K: &[Point] = &[
    p(-1, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(-1, 3),
    p(0, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_L: &[Point] = &[
    p(-1, 0),
    p(-1, 1),
    p(-1, 2),
    p(-1, 3),
    p(-1, 4),
    p(0, 4),
    p(1, 4),
];

pub static LETTER_M: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(0, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_N: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_O: &[Point] = &[
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(0, 4),
];

pub static LETTER_P: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(-1, 3),
    p(-1, 4),
];

pub static LETTER_Q: &[Point] = &[
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(0, 3),
    p(1, 4),
];

pub static LETTER_R: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(0, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_S: &[Point] = &[
    p(0, 0),
    p(1, 0),
    p(-1, 1),
    p(0, 2),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
];

pub static LETTER_T: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(0, 1),
    p(0, 2),
    p(0, 3),
    p(0, 4),
];

pub static LETTER_U: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(0, 4),
    p(1, 4),
];

pub static LETTER_V: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(1, 3),
    p(0, 4),
];

pub static LETTER_W: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(-1, 2),
    p(1, 2),
    p(-1, 3),
    p(0, 3),
    p(1, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_X: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(0, 2),
    p(-1, 3),
    p(1, 3),
    p(-1, 4),
    p(1, 4),
];

pub static LETTER_Y: &[Point] = &[
    p(-1, 0),
    p(1, 0),
    p(-1, 1),
    p(1, 1),
    p(0, 2),
    p(1, 2),
    p(1, 3),
    p(-1, 4),
    p(0, 4),
];

pub static LETTER_Z: &[Point] = &[
    p(-1, 0),
    p(0, 0),
    p(1, 0),
    p(1, 1),
    p(0, 2),
    p(-1, 3),
    p(-1, 4),
    p(0, 4),
    p(1, 4),
];

/// Number of glyphs in the cycling catalog (digits then letters).
pub const GLYPH_COUNT: usize = 36;

static GLYPHS: [&[Point]; GLYPH_COUNT] = [
    NUM_0, NUM_1, NUM_2, NUM_3, NUM_4, NUM_5, NUM_6, NUM_7, NUM_8, NUM_9, LETTER_A, LETTER_B,
    LETTER_C, LETTER_D, LETTER_E, LETTER_F, LETTER_G, LETTER_H, LETTER_I, LETTER_J, LETTER_K,
    LETTER_L, LETTER_M, LETTER_N, LETTER_O, LETTER_P, LETTER_Q, LETTER_R, LETTER_S, LETTER_T,
    LETTER_U, LETTER_V, LETTER_W, LETTER_X, LETTER_Y, LETTER_Z,
];

/// Look up the glyph at `index` in the catalog order `0..=9, A..=Z`.
///
/// Total for every `i32`: the index wraps modulo the catalog size, and
/// negative input normalizes to a non-negative remainder.
pub fn glyph(index: i32) -> &'static [Point] {
    GLYPHS[index.rem_euclid(GLYPH_COUNT as i32) as usize]
}
