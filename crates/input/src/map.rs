//! Key mapping from terminal events to engine actions.

use corsi_types::{GameAction, MAX_BLOCKS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to engine actions.
///
/// Digits `1..=9` tap blocks `0..=8`, matching the labels drawn on the
/// board. Whether an action applies is the engine's decision; the map is
/// status-agnostic.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Block taps
        KeyCode::Char(c @ '1'..='9') => {
            let id = c as u8 - b'1';
            debug_assert!((id as usize) < MAX_BLOCKS);
            Some(GameAction::Tap(id))
        }

        // Trial control
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMode),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the application.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
