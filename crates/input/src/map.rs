//! Key mapping from terminal events to round actions.

use crate::types::RoundAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to round actions.
///
/// Only key presses count; repeats and releases are ignored so holding a key
/// cannot burn through the deck.
pub fn handle_key_event(key: KeyEvent) -> Option<RoundAction> {
    if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Enter
        | KeyCode::Right
        | KeyCode::Char('y')
        | KeyCode::Char('Y')
        | KeyCode::Char('c')
        | KeyCode::Char('C') => Some(RoundAction::MarkCorrect),

        KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Char('n')
        | KeyCode::Char('N')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(RoundAction::MarkSkipped),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(RoundAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
