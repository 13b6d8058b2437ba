//! Display core - pure, deterministic, and testable.
//!
//! This crate simulates the guts of a monochrome brick-game LCD: shapes
//! made of pixel offsets move across a fixed dot matrix, are redrawn
//! from scratch every logical step, and cycle through a glyph catalog.
//! It has **zero dependencies** on UI, networking, or I/O:
//!
//! - **Deterministic**: time enters only as plain elapsed-millisecond
//!   arguments, so any sequence of frames can be replayed exactly
//! - **Testable**: every module is exercised against an in-memory surface
//! - **Portable**: the host renderer can be a terminal, a GUI, or a test
//!
//! # Module structure
//!
//! - [`surface`]: the pixel-grid contract and an in-memory buffer
//! - [`glyphs`]: the static shape catalog (digits, letters, sprites)
//! - [`shape`]: the moving entity and its stepping rule
//! - [`screen`]: the shape collection and the clear/advance/draw protocol
//! - [`effects`]: row and spiral sweep transition effects
//! - [`driver`]: the fixed-timestep accumulator loop
//! - [`game`] / [`marquee`]: the plugin game surface and the built-in
//!   glyph marquee
//!
//! # Example
//!
//! ```
//! use tui_brick_core::{FrameDriver, PixelBuffer, PixelSurface};
//!
//! let mut driver = FrameDriver::new();
//! let mut panel = PixelBuffer::new(10, 20);
//!
//! // Feed rendered frames; logical steps happen at the configured rate.
//! driver.on_frame(120.0, &mut panel);
//! assert!(panel.width() == 10);
//! ```

pub mod driver;
pub mod effects;
pub mod game;
pub mod glyphs;
pub mod marquee;
pub mod screen;
pub mod shape;
pub mod surface;

pub use tui_brick_types as types;

// Re-export commonly used types for convenience
pub use driver::FrameDriver;
pub use effects::{spiral_order, RowSweep, SpiralSweep, TransitionEffect};
pub use game::{builtin_games, Game, GameFactory, GameOutcome};
pub use glyphs::glyph;
pub use marquee::GlyphMarquee;
pub use screen::{Screen, ShapeId};
pub use shape::MovingShape;
pub use surface::{PixelBuffer, PixelSurface};
