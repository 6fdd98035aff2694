use common::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    Start,
    TogglePause,
    Quit,
}

/// Translates a terminal key press. Arrow keys turn the snake; keys without a
/// binding return None.
pub fn action_for_key(key: KeyEvent) -> Option<InputAction> {
    // Some terminals report releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(InputAction::Turn(Direction::Up)),
        KeyCode::Down => Some(InputAction::Turn(Direction::Down)),
        KeyCode::Left => Some(InputAction::Turn(Direction::Left)),
        KeyCode::Right => Some(InputAction::Turn(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => Some(InputAction::Start),
        KeyCode::Char('p') => Some(InputAction::TogglePause),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}
