//! Frame-driver tests: accumulator behavior and glyph cycling.
//!
//! All scenarios feed synthetic elapsed times; no real clock is
//! involved.

use tui_brick::core::glyphs;
use tui_brick::core::surface::PixelBuffer;
use tui_brick::core::FrameDriver;
use tui_brick::types::{Point, GLYPH_SPAWN_CENTER};

#[test]
fn test_level_10_frame_of_120ms_runs_two_steps() {
    let mut driver = FrameDriver::new();
    let mut buf = PixelBuffer::new(10, 20);
    assert!(driver.set_speed_level(10)); // 50 ms per step

    driver.on_frame(120.0, &mut buf);

    assert_eq!(driver.glyph_shape().center, Point::new(4, -2));
    assert!((driver.accumulator_ms() - 20.0).abs() < 1e-9);
}

#[test]
fn test_speed_level_change_applies_on_the_next_drain() {
    let mut driver = FrameDriver::new();
    let mut buf = PixelBuffer::new(10, 20);
    driver.set_speed_level(10);

    driver.on_frame(40.0, &mut buf); // no step yet
    driver.set_speed_level(1); // 500 ms per step from now on
    driver.on_frame(40.0, &mut buf);
    assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);

    driver.on_frame(420.0, &mut buf); // 500 ms accumulated in total
    assert_eq!(driver.glyph_shape().center.y, -3);
}

#[test]
fn test_glyph_marquee_cycle_end_to_end() {
    let mut driver = FrameDriver::new();
    let mut buf = PixelBuffer::new(10, 20);
    driver.set_speed_level(10);

    // Four steps: the glyph's center enters the display at (4, 0) and
    // its top-left cells appear.
    driver.on_frame(200.0, &mut buf);
    assert_eq!(driver.glyph_shape().center, Point::new(4, 0));
    assert!(buf.is_on(4, 0), "NUM_0 top cell drawn at the center");
    assert_eq!(driver.glyph_index(), 0);

    // Twenty more steps: center reaches y = 20, so even the topmost
    // glyph row sits below the last visible row and the driver respawns
    // with the next catalog template.
    driver.on_frame(1000.0, &mut buf);
    assert_eq!(driver.glyph_index(), 1);
    assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);
    assert_eq!(driver.glyph_shape().offsets, glyphs::glyph(1));
    assert_eq!(driver.glyphs_cycled(), 1);
}

#[test]
fn test_catalog_wraps_after_the_last_glyph() {
    let mut driver = FrameDriver::new();
    let mut buf = PixelBuffer::new(10, 20);
    driver.set_speed_level(15);

    // Run long enough to cycle the full catalog once.
    for _ in 0..40 {
        driver.on_frame(24.0 * 500.0 / 15.0 + 1.0, &mut buf);
    }
    assert!(driver.glyphs_cycled() >= 36);
    assert_eq!(
        driver.glyph_shape().offsets,
        glyphs::glyph(driver.glyph_index())
    );
}

#[test]
fn test_custom_spawn_point_is_used_for_respawns() {
    let mut driver = FrameDriver::with_spawn(Point::new(2, -6));
    let mut buf = PixelBuffer::new(10, 20);
    driver.set_speed_level(10);

    // 26 steps: from y = -6 the glyph's top row passes y = 19 at y = 20.
    driver.on_frame(26.0 * 50.0, &mut buf);
    assert_eq!(driver.glyph_index(), 1);
    assert_eq!(driver.glyph_shape().center, Point::new(2, -6));
}

#[test]
fn test_detach_suppresses_steps_and_reattach_starts_fresh() {
    let mut driver = FrameDriver::new();
    let mut buf = PixelBuffer::new(10, 20);
    driver.set_speed_level(10);

    driver.on_frame(49.0, &mut buf);
    driver.detach();
    assert!(!driver.is_attached());

    // Elapsed time while detached is discarded entirely.
    driver.on_frame(5_000.0, &mut buf);
    assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);

    driver.attach();
    driver.on_frame(49.0, &mut buf);
    // The 49 ms from before the detach were not replayed.
    assert_eq!(driver.glyph_shape().center, GLYPH_SPAWN_CENTER);
    driver.on_frame(1.0, &mut buf);
    assert_eq!(driver.glyph_shape().center.y, -3);
}

#[test]
fn test_surface_state_is_rebuilt_every_step() {
    let mut driver = FrameDriver::new();
    let mut buf = PixelBuffer::new(10, 20);
    driver.set_speed_level(10);

    driver.on_frame(50.0, &mut buf);
    let first = buf.lit_cells();
    driver.on_frame(50.0, &mut buf);
    let second = buf.lit_cells();

    // The glyph moved down one row; nothing from the previous frame
    // lingers.
    for p in &first {
        assert!(
            second.contains(&Point::new(p.x, p.y + 1)) || p.y + 1 >= 20,
            "cell {p:?} should have moved down"
        );
    }
}
