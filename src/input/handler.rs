use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a game action. The mapping depends on which side of
    /// the game-over screen we are on: while playing, only the arrow keys do
    /// anything; after a game over, Escape quits and any other key restarts.
    pub fn handle_key_event(&self, key: KeyEvent, game_over: bool) -> KeyAction {
        // Ctrl+C quits from any state
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if game_over {
            return match key.code {
                KeyCode::Esc => KeyAction::Quit,
                _ => KeyAction::Restart,
            };
        }

        match key.code {
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
