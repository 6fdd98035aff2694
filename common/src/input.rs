use crate::Direction;

/// Maps legacy DOM key codes for the arrow keys. Everything else is ignored.
pub fn direction_for_key_code(key_code: u32) -> Option<Direction> {
    match key_code {
        37 => Some(Direction::Left),
        38 => Some(Direction::Up),
        39 => Some(Direction::Right),
        40 => Some(Direction::Down),
        _ => None,
    }
}

/// Maps `KeyboardEvent.key` values for the arrow keys
pub fn direction_for_key_name(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "Up" => Some(Direction::Up),
        "ArrowDown" | "Down" => Some(Direction::Down),
        "ArrowLeft" | "Left" => Some(Direction::Left),
        "ArrowRight" | "Right" => Some(Direction::Right),
        _ => None,
    }
}
