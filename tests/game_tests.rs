//! Plugin-interface tests: factories, lifecycle, and button handling.

use tui_brick::core::surface::PixelBuffer;
use tui_brick::core::{builtin_games, Game, GlyphMarquee};
use tui_brick::types::{GameButton, DEFAULT_SPEED_LEVEL, SPEED_LEVEL_MAX};

#[test]
fn test_builtin_catalog_contains_the_marquee() {
    let games = builtin_games();
    assert!(!games.is_empty());

    let factory = games.iter().find(|f| f.id == "marquee").unwrap();
    let game = factory.create();
    assert_eq!(game.id(), "marquee");
    assert_eq!(game.display_name(), "Glyph Marquee");
    assert_eq!(game.score(), 0);
    assert!(game.outcome().is_none());
}

#[test]
fn test_lifecycle_gates_updates() {
    let mut game = GlyphMarquee::new();
    let mut buf = PixelBuffer::new(10, 20);

    // Not started: updates are ignored.
    game.update(&mut buf, 1_000.0);
    assert_eq!(buf.lit_count(), 0);

    game.start();
    game.update(&mut buf, 250.0);
    assert!(buf.lit_count() > 0);

    // Stopped: the picture freezes and time stops accumulating.
    game.stop();
    let frozen = buf.lit_cells();
    game.update(&mut buf, 1_000.0);
    assert_eq!(buf.lit_cells(), frozen);
}

#[test]
fn test_buttons_adjust_speed_and_bad_levels_are_rejected() {
    let mut game = GlyphMarquee::new();
    assert_eq!(game.speed_level(), DEFAULT_SPEED_LEVEL);

    game.on_button_down(GameButton::Up);
    assert_eq!(game.speed_level(), DEFAULT_SPEED_LEVEL + 1);

    game.on_button_down(GameButton::Down);
    game.on_button_down(GameButton::Down);
    assert_eq!(game.speed_level(), DEFAULT_SPEED_LEVEL - 1);

    // Pushing past the bounds keeps the last valid level.
    for _ in 0..50 {
        game.on_button_down(GameButton::Up);
    }
    assert_eq!(game.speed_level(), SPEED_LEVEL_MAX);

    // Unmapped buttons are accepted and ignored.
    game.on_button_down(GameButton::Function);
    game.on_button_up(GameButton::Up);
    assert_eq!(game.speed_level(), SPEED_LEVEL_MAX);
}

#[test]
fn test_score_counts_cycled_glyphs() {
    let mut game = GlyphMarquee::new();
    let mut buf = PixelBuffer::new(10, 20);
    game.start();

    // 24 steps at the default level drop one glyph through the display.
    game.update(&mut buf, 24.0 * 50.0);
    assert_eq!(game.score(), 1);
}
