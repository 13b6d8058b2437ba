//! Key mapping from terminal events to logical handheld buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_brick_types::GameButton;

/// Map keyboard input to a logical button.
pub fn handle_key_event(key: KeyEvent) -> Option<GameButton> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameButton::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameButton::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameButton::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameButton::Right),
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameButton::Function),
        _ => None,
    }
}

/// Check if the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
