//! The plugin surface a game exposes to the host.
//!
//! The host owns the render surface and the input devices; a game is
//! driven through this fixed method table: lifecycle calls, per-frame
//! updates with elapsed time, and logical button events. State the host
//! cares about (score, outcome) is exposed as plain queries the host
//! polls after updating; there is no event or observer machinery.

use tui_brick_types::GameButton;

use crate::surface::PixelSurface;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub win: bool,
    pub score: i32,
}

/// A single game running on the LCD display.
pub trait Game {
    /// Stable identifier, distinct per game variant.
    fn id(&self) -> &'static str;

    /// Short name shown in menus.
    fn display_name(&self) -> &'static str;

    /// The game became the active one and should begin running.
    fn start(&mut self);

    /// The game is no longer active; logic updates must cease.
    fn stop(&mut self);

    /// Called once per rendered frame with the elapsed real time. The
    /// game draws its frame onto the host surface.
    fn update(&mut self, host: &mut dyn PixelSurface, elapsed_ms: f64);

    /// A logical button was pressed.
    fn on_button_down(&mut self, _button: GameButton) {}

    /// A logical button was released.
    fn on_button_up(&mut self, _button: GameButton) {}

    /// Current display score.
    fn score(&self) -> i32 {
        0
    }

    /// Set once the game has ended; the host polls this after `update`.
    fn outcome(&self) -> Option<GameOutcome> {
        None
    }
}

/// Creates game instances on demand.
///
/// The host keeps a list of factories and instantiates a game only when
/// it is selected.
pub struct GameFactory {
    pub id: &'static str,
    pub display_name: &'static str,
    create: fn() -> Box<dyn Game>,
}

impl GameFactory {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        create: fn() -> Box<dyn Game>,
    ) -> Self {
        Self {
            id,
            display_name,
            create,
        }
    }

    pub fn create(&self) -> Box<dyn Game> {
        (self.create)()
    }
}

/// The built-in game catalog.
pub fn builtin_games() -> &'static [GameFactory] {
    static GAMES: [GameFactory; 1] = [GameFactory::new("marquee", "Glyph Marquee", || {
        Box::new(crate::marquee::GlyphMarquee::new())
    })];
    &GAMES
}
