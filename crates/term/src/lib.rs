//! Terminal host for the LCD display core.
//!
//! Renders the simulated dot matrix into a framebuffer that is flushed
//! to the terminal with crossterm, and maps keyboard input onto the
//! logical handheld buttons.
//!
//! Goals:
//! - Keep the display core free of any I/O
//! - Imitate the look of a handheld LCD (ghost cells, pale backdrop)
//! - Flush only what changed since the previous frame

pub mod fb;
pub mod input;
pub mod panel;
pub mod renderer;
pub mod view;

pub use fb::{Cell, FrameBuffer, Rgb};
pub use input::{handle_key_event, should_quit};
pub use panel::LcdPanel;
pub use renderer::TerminalRenderer;
pub use view::{PanelStatus, PanelView, Viewport};
