//! Shape catalog tests.

use std::collections::HashSet;

use tui_brick::core::glyphs::{self, GLYPH_COUNT};

#[test]
fn test_lookup_is_total_over_all_integers() {
    for i in [-1000, -37, -36, -1, 0, 1, 35, 36, 72, i32::MAX, i32::MIN] {
        let shape = glyphs::glyph(i);
        assert!(!shape.is_empty());
    }
}

#[test]
fn test_lookup_wraps_modulo_catalog_size() {
    for i in -72..72 {
        assert_eq!(glyphs::glyph(i), glyphs::glyph(i + GLYPH_COUNT as i32));
    }
}

#[test]
fn test_catalog_orders_digits_before_letters() {
    assert_eq!(glyphs::glyph(0), glyphs::NUM_0);
    assert_eq!(glyphs::glyph(9), glyphs::NUM_9);
    assert_eq!(glyphs::glyph(10), glyphs::LETTER_A);
    assert_eq!(glyphs::glyph(35), glyphs::LETTER_Z);
}

#[test]
fn test_glyphs_are_distinct() {
    // Confusable pairs (0/O, 2/Z, 8/B...) were deliberately drawn apart;
    // at minimum no two catalog entries may be identical.
    let mut seen = HashSet::new();
    for i in 0..GLYPH_COUNT as i32 {
        let key: Vec<(i32, i32)> = glyphs::glyph(i).iter().map(|p| (p.x, p.y)).collect();
        assert!(seen.insert(key), "catalog index {i} duplicates another glyph");
    }
}

#[test]
fn test_templates_have_no_duplicate_cells() {
    for i in 0..GLYPH_COUNT as i32 {
        let shape = glyphs::glyph(i);
        let unique: HashSet<(i32, i32)> = shape.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(unique.len(), shape.len(), "glyph {i} repeats an offset");
    }
}

#[test]
fn test_sprites_are_centered_templates() {
    for sprite in [
        glyphs::FORMULA_ONE_CAR,
        glyphs::PLAYER_TANK,
        glyphs::ENEMY_TANK,
        glyphs::EXPLOSION,
    ] {
        assert!(!sprite.is_empty());
        // Every sprite stays within a few cells of its center.
        for p in sprite {
            assert!(p.x.abs() <= 2 && p.y.abs() <= 3);
        }
    }
}
