//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right => Some(GameAction::Move(Direction::Right)),
        KeyCode::Up => Some(GameAction::Move(Direction::Up)),
        KeyCode::Down => Some(GameAction::Move(Direction::Down)),
        KeyCode::Char(c @ ('w' | 'a' | 's' | 'd' | 'W' | 'A' | 'S' | 'D')) => {
            Direction::try_from(c).ok().map(GameAction::Move)
        }

        // Undo
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => Some(GameAction::Undo),

        // New game
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(GameAction::NewGame)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
