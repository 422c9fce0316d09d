//! Key mapping from terminal events to shell commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Forward to the engine
    Play(GameAction),
    /// Stop/resume the gravity timer
    Pause,
    /// Reset the engine with a new seed
    Restart,
}

/// Map keyboard input to a command.
///
/// Arrows and vim/WASD keys: left/right move, down soft-drops, up rotates
/// clockwise, space hard-drops.
pub fn map_key(key: KeyEvent) -> Option<InputCommand> {
    let action = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => GameAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => GameAction::MoveRight,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => GameAction::SoftDrop,
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => GameAction::RotateCw,
        KeyCode::Char(' ') => GameAction::HardDrop,

        KeyCode::Char('p' | 'P') => return Some(InputCommand::Pause),
        KeyCode::Char('r' | 'R') => return Some(InputCommand::Restart),

        _ => return None,
    };
    Some(InputCommand::Play(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
