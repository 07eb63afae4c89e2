use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Command {
        // Only process key press events, not release or repeat
        if key.kind != KeyEventKind::Press {
            return Command::None;
        }

        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        match key.code {
            KeyCode::Up => Command::Turn(Direction::Up),
            KeyCode::Down => Command::Turn(Direction::Down),
            KeyCode::Left => Command::Turn(Direction::Left),
            KeyCode::Right => Command::Turn(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,

            _ => Command::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
