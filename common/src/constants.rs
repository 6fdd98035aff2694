use crate::{Direction, Position};

/// Canvas size in pixels (width, height)
pub const CANVAS_SIZE: (u32, u32) = (800, 800);

/// Size of one grid cell in pixels
pub const SCALE: u32 = 40;

/// Grid width in cells
pub const GRID_WIDTH: u16 = (CANVAS_SIZE.0 / SCALE) as u16;

/// Grid height in cells
pub const GRID_HEIGHT: u16 = (CANVAS_SIZE.1 / SCALE) as u16;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;

/// Starting snake, head first
pub const SNAKE_START: [Position; 2] = [Position { x: 8, y: 7 }, Position { x: 8, y: 8 }];

pub const APPLE_START: Position = Position { x: 8, y: 3 };

pub const INITIAL_DIRECTION: Direction = Direction::Up;

/// Rejection sampling attempts per grid cell before apple placement falls back
/// to picking from the free cells
pub const APPLE_SAMPLE_ATTEMPTS_PER_CELL: u32 = 4;

/// Largest grid side accepted by config validation
pub const MAX_GRID_DIMENSION: u16 = 1024;
