use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::APPLE_SAMPLE_ATTEMPTS_PER_CELL;
use crate::util::PseudoRandom;
use crate::{Direction, GameConfig, GameError, Position, Snake};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    /// The snake grew into the last free cell, so no apple can be placed
    BoardFilled,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver { cause: GameOverCause },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Moved { head: Position },
    AppleEaten { position: Position },
    AppleSpawned { position: Position },
    GameOver { cause: GameOverCause },
}

/// Complete state of one snake session.
///
/// Created idle. `start()` moves it to `Running`, `tick()` advances it and may
/// end it. Once over, nothing changes until `start()` is called again.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    tick: u32,
    snake: Snake,
    apple: Position,
    direction: Direction,
    pending_direction: Option<Direction>,
    status: GameStatus,
    score: u32,
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(config: GameConfig, rng_seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        Ok(GameState {
            tick: 0,
            snake: Snake::new(config.snake_start.iter().copied()),
            apple: config.apple_start,
            direction: config.initial_direction,
            pending_direction: None,
            status: GameStatus::Idle,
            score: 0,
            rng: PseudoRandom::new(rng_seed),
            config,
        })
    }

    /// Restores the initial snake, apple and direction and begins running.
    /// Calling it in any state yields the same result.
    pub fn start(&mut self) -> Vec<GameEvent> {
        self.snake = Snake::new(self.config.snake_start.iter().copied());
        self.apple = self.config.apple_start;
        self.direction = self.config.initial_direction;
        self.pending_direction = None;
        self.status = GameStatus::Running;
        self.tick = 0;
        self.score = 0;
        info!(
            "Game started on a {}x{} grid",
            self.config.grid_width, self.config.grid_height
        );
        vec![GameEvent::Started]
    }

    /// Queues a direction for the next tick. The last call before a tick wins.
    /// Reversing into the body is allowed and ends the game on the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    pub fn set_direction_vector(&mut self, dx: i32, dy: i32) -> Result<(), GameError> {
        let direction =
            Direction::from_vector(dx, dy).ok_or(GameError::InvalidDirection { dx, dy })?;
        self.set_direction(direction);
        Ok(())
    }

    /// Advances the snake by one cell. Does nothing unless the game is running.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut out = Vec::new();
        if !self.is_running() {
            return out;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.tick += 1;

        let new_head = self.snake.head().step(self.direction);

        // Checked against the body before the move, tail included
        if let Some(cause) = self.collision_at(&new_head) {
            self.end(cause, &mut out);
            return out;
        }

        self.snake.push_head(new_head);
        out.push(GameEvent::Moved { head: new_head });

        if new_head == self.apple {
            self.score += 1;
            out.push(GameEvent::AppleEaten { position: new_head });
            match self.spawn_apple() {
                Some(position) => {
                    debug!("Apple spawned at {:?}", position);
                    self.apple = position;
                    out.push(GameEvent::AppleSpawned { position });
                }
                None => self.end(GameOverCause::BoardFilled, &mut out),
            }
        } else {
            self.snake.pop_tail();
        }

        out
    }

    fn collision_at(&self, position: &Position) -> Option<GameOverCause> {
        if !self.config.contains(position) {
            Some(GameOverCause::Wall)
        } else if self.snake.contains(position) {
            Some(GameOverCause::SelfCollision)
        } else {
            None
        }
    }

    fn end(&mut self, cause: GameOverCause, out: &mut Vec<GameEvent>) {
        info!(
            "Game over after {} ticks ({:?}), score {}",
            self.tick, cause, self.score
        );
        self.status = GameStatus::GameOver { cause };
        out.push(GameEvent::GameOver { cause });
    }

    fn random_cell(&mut self) -> Position {
        Position {
            x: self.rng.next_below(self.config.grid_width as u32) as i16,
            y: self.rng.next_below(self.config.grid_height as u32) as i16,
        }
    }

    /// Picks a free cell uniformly. Rejection sampling is tried a bounded number
    /// of times; after that the free cells are enumerated and one is chosen
    /// directly. Returns None only when the snake covers the whole grid.
    fn spawn_apple(&mut self) -> Option<Position> {
        let cell_count = self.config.cell_count();
        if self.snake.len() as u32 >= cell_count {
            return None;
        }

        for _ in 0..cell_count.saturating_mul(APPLE_SAMPLE_ATTEMPTS_PER_CELL) {
            let candidate = self.random_cell();
            if !self.snake.contains(&candidate) {
                return Some(candidate);
            }
        }

        let width = self.config.grid_width as i16;
        let height = self.config.grid_height as i16;
        let free: Vec<Position> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Position { x, y }))
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        let index = self.rng.next_below(free.len() as u32) as usize;
        free.get(index).copied()
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        match self.status {
            GameStatus::GameOver { cause } => Some(cause),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Never on the snake while the game can continue. After `BoardFilled` it
    /// stays on the last eaten cell, which is then the head.
    pub fn apple(&self) -> Position {
        self.apple
    }

    /// Direction used by the last tick; a queued change is not reflected until the next tick
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}
