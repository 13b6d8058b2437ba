//! Terminal LCD runner (default binary).
//!
//! Hosts the glyph marquee on a simulated 10x20 dot matrix. The host
//! owns the clock: each frame measures elapsed wall-clock time and feeds
//! it either to the active transition effect or to the game, then
//! repaints the panel.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_brick::core::effects::{RowSweep, SpiralSweep, TransitionEffect};
use tui_brick::core::{Game, GlyphMarquee};
use tui_brick::term::{
    handle_key_event, should_quit, FrameBuffer, LcdPanel, PanelStatus, PanelView,
    TerminalRenderer, Viewport,
};
use tui_brick::types::{PIXEL_HEIGHT, PIXEL_WIDTH};

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    env_logger::init();
    log::debug!("starting {PIXEL_WIDTH}x{PIXEL_HEIGHT} LCD host");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // The host constructs the concrete game and drives it through the
    // plugin surface.
    let mut game = GlyphMarquee::new();
    game.start();

    let mut panel = LcdPanel::new(PIXEL_WIDTH, PIXEL_HEIGHT);
    let view = PanelView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut effect: Option<Box<dyn TransitionEffect>> = None;

    let mut last_frame = Instant::now();
    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut last_status = (i32::MIN, 0u8);
    let mut needs_redraw = true;

    loop {
        let elapsed_ms = last_frame.elapsed().as_secs_f64() * 1000.0;
        last_frame = Instant::now();

        // A running transition effect owns the panel; the game resumes
        // once it finishes.
        let mut effect_finished = false;
        match &mut effect {
            Some(active) => effect_finished = !active.tick(&mut panel, elapsed_ms),
            None => game.update(&mut panel, elapsed_ms),
        }
        if effect_finished {
            effect = None;
        }

        let status = PanelStatus {
            game_name: game.display_name(),
            score: game.score(),
            speed_level: game.speed_level(),
        };
        let status_key = (status.score, status.speed_level);
        if panel.take_changed() || status_key != last_status {
            needs_redraw = true;
        }
        if needs_redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&panel, &status, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            last_status = status_key;
            needs_redraw = false;
        }

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        match key.code {
                            KeyCode::Char('1') => effect = Some(Box::new(RowSweep::slow())),
                            KeyCode::Char('2') => effect = Some(Box::new(RowSweep::fast())),
                            KeyCode::Char('3') => effect = Some(Box::new(SpiralSweep::new())),
                            _ => {
                                if let Some(button) = handle_key_event(key) {
                                    game.on_button_down(button);
                                }
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(button) = handle_key_event(key) {
                            game.on_button_up(button);
                        }
                    }
                    KeyEventKind::Repeat => {}
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    needs_redraw = true;
                }
                _ => {}
            }
        }
    }
}
