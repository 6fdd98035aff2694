use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::{Direction, GameError, Position};

/// Session constants. Fixed for the lifetime of a GameState.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Pixels per cell when drawing to a canvas
    pub cell_size: u32,
    pub tick_interval_ms: u32,
    /// Head first
    pub snake_start: Vec<Position>,
    pub apple_start: Position,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: SCALE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            snake_start: SNAKE_START.to_vec(),
            apple_start: APPLE_START,
            initial_direction: INITIAL_DIRECTION,
        }
    }
}

impl GameConfig {
    /// Parses a JSON document, falling back to defaults for missing fields.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn cell_count(&self) -> u32 {
        self.grid_width as u32 * self.grid_height as u32
    }

    /// Canvas size in pixels. Saturates for configs that did not pass `validate()`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.grid_width as u32).saturating_mul(self.cell_size),
            (self.grid_height as u32).saturating_mul(self.cell_size),
        )
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.is_within(self.grid_width, self.grid_height)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.grid_width == 0 || self.grid_height == 0 {
            return invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }
        if self.grid_width > MAX_GRID_DIMENSION || self.grid_height > MAX_GRID_DIMENSION {
            return invalid(format!(
                "grid must be at most {}x{}, got {}x{}",
                MAX_GRID_DIMENSION, MAX_GRID_DIMENSION, self.grid_width, self.grid_height
            ));
        }
        if self.cell_size == 0 {
            return invalid("cell_size must be positive".to_string());
        }
        let largest_side = self.grid_width.max(self.grid_height) as u32;
        if largest_side.checked_mul(self.cell_size).is_none() {
            return invalid(format!(
                "cell_size {} overflows the canvas size",
                self.cell_size
            ));
        }
        if self.tick_interval_ms == 0 {
            return invalid("tick_interval_ms must be positive".to_string());
        }
        if self.snake_start.is_empty() {
            return invalid("snake_start must contain at least one segment".to_string());
        }

        let mut seen = HashSet::new();
        for segment in &self.snake_start {
            if !self.contains(segment) {
                return invalid(format!("snake segment {:?} is outside the grid", segment));
            }
            if !seen.insert(*segment) {
                return invalid(format!("snake segment {:?} appears twice", segment));
            }
        }

        if !self.contains(&self.apple_start) {
            return invalid(format!("apple {:?} is outside the grid", self.apple_start));
        }
        if seen.contains(&self.apple_start) {
            return invalid(format!("apple {:?} overlaps the snake", self.apple_start));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.canvas_size(), CANVAS_SIZE);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(
            config.snake_start,
            vec![Position::new(8, 7), Position::new(8, 8)]
        );
        assert_eq!(config.apple_start, Position::new(8, 3));
        assert_eq!(config.initial_direction, Direction::Up);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "tick_interval_ms": 250 }"#).unwrap();
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.grid_width, GRID_WIDTH);
        assert_eq!(config.apple_start, APPLE_START);
    }

    #[test]
    fn rejects_apple_on_snake() {
        let config = GameConfig {
            apple_start: Position::new(8, 8),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_duplicate_or_offgrid_segments() {
        let duplicate = GameConfig {
            snake_start: vec![Position::new(1, 1), Position::new(1, 1)],
            ..GameConfig::default()
        };
        assert!(duplicate.validate().is_err());

        let offgrid = GameConfig {
            snake_start: vec![Position::new(20, 1)],
            ..GameConfig::default()
        };
        assert!(offgrid.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_values() {
        let empty_grid = GameConfig {
            grid_width: 0,
            ..GameConfig::default()
        };
        assert!(empty_grid.validate().is_err());

        let no_snake = GameConfig {
            snake_start: vec![],
            ..GameConfig::default()
        };
        assert!(no_snake.validate().is_err());

        let frozen = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(frozen.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(GameError::Json(_))
        ));
    }

    #[test]
    fn well_formed_json_with_bad_values_is_a_config_error() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "grid_width": 0 }"#),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "snake_start": [] }"#),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_cell_size_that_overflows_canvas() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "cell_size": 4000000000 }"#),
            Err(GameError::InvalidConfig(_))
        ));

        let unchecked = GameConfig {
            cell_size: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(unchecked.canvas_size(), (u32::MAX, u32::MAX));

        let largest = GameConfig {
            cell_size: u32::MAX / 20,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_grid() {
        let config = GameConfig {
            grid_width: MAX_GRID_DIMENSION + 1,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let at_limit = GameConfig {
            grid_width: MAX_GRID_DIMENSION,
            grid_height: MAX_GRID_DIMENSION,
            ..GameConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }
}
