use super::View;
use crate::app::AppCommand;
use crate::input::{action_for_key, InputAction};
use crate::render::board::BoardRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::{CharDimensions, RenderConfig};
use common::{GameOverCause, GameState, GameStatus};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use tracing::{debug, info};

fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Plays one GameState in the terminal, ticking it at the configured interval.
pub struct GameView {
    game: GameState,
    tick_accumulator: Duration,
    is_paused: bool,
    char_dims: CharDimensions,
}

impl GameView {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            tick_accumulator: Duration::ZERO,
            is_paused: false,
            // Terminal cells are about twice as tall as wide
            char_dims: CharDimensions::new(2, 1),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.game.config().tick_interval_ms as u64)
    }

    fn start(&mut self) {
        self.game.start();
        self.tick_accumulator = Duration::ZERO;
        self.is_paused = false;
    }
}

impl View for GameView {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match action_for_key(key)? {
            InputAction::Turn(direction) => {
                self.game.set_direction(direction);
                None
            }
            InputAction::Start => {
                self.start();
                None
            }
            InputAction::TogglePause => {
                if self.game.is_running() {
                    self.is_paused = !self.is_paused;
                    debug!(paused = self.is_paused, "Toggled pause");
                }
                None
            }
            InputAction::Quit => Some(AppCommand::Quit),
        }
    }

    fn update(&mut self, dt: Duration) {
        if !self.game.is_running() || self.is_paused {
            return;
        }

        self.tick_accumulator += dt;
        let interval = self.tick_interval();
        if self.tick_accumulator < interval {
            return;
        }

        // One tick per frame. A stall carries over at most one more interval.
        self.tick_accumulator = (self.tick_accumulator - interval).min(interval);
        self.game.tick();

        if !self.game.is_running() {
            info!(
                score = self.game.score(),
                ticks = self.game.tick_count(),
                "Game over"
            );
            self.tick_accumulator = Duration::ZERO;
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(5),    // Board
                Constraint::Length(3), // Status
                Constraint::Length(3), // Controls help
            ])
            .split(frame.area());

        self.render_board(frame, chunks[0]);
        frame.render_widget(self.render_status(), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }
}

impl GameView {
    fn render_board(&self, frame: &mut Frame, area: Rect) {
        let config = self.game.config();
        let block = Block::default().title("Snake").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let board_renderer = BoardRenderer::new(StandardRenderer::new(self.char_dims));
        let render_config = RenderConfig {
            chars_per_point: self.char_dims,
        };
        let char_grid = board_renderer.render(&self.game, &render_config);

        // +2 for the walls on each side
        let board_width = char_grid.physical_width() + 2;
        let board_height = char_grid.physical_height() + 2;
        let x_offset = inner.width.saturating_sub(board_width as u16) / 2;
        let y_offset = inner.height.saturating_sub(board_height as u16) / 2;
        let padding = " ".repeat(x_offset as usize);
        let horizontal_wall = "─".repeat(config.grid_width as usize * self.char_dims.horizontal);

        let mut lines: Vec<Line> = Vec::new();
        for _ in 0..y_offset {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("{}┌{}┐", padding, horizontal_wall),
            border_style(),
        )));

        for (chars, styles) in char_grid.into_styled_lines() {
            let mut spans = Vec::with_capacity(chars.len() + 3);
            if x_offset > 0 {
                spans.push(Span::raw(padding.clone()));
            }
            spans.push(Span::styled("│", border_style()));
            for (ch, style) in chars.into_iter().zip(styles) {
                spans.push(Span::styled(ch.to_string(), style));
            }
            spans.push(Span::styled("│", border_style()));
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(Span::styled(
            format!("{}└{}┘", padding, horizontal_wall),
            border_style(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status(&self) -> Paragraph<'static> {
        let (text, color) = match self.game.status() {
            GameStatus::Idle => ("Press Enter to start".to_string(), Color::Cyan),
            GameStatus::Running if self.is_paused => ("Paused".to_string(), Color::Yellow),
            GameStatus::Running => ("Running".to_string(), Color::Green),
            GameStatus::GameOver { cause } => {
                let reason = match cause {
                    GameOverCause::Wall => "hit the wall",
                    GameOverCause::SelfCollision => "bit itself",
                    GameOverCause::BoardFilled => "filled the board",
                };
                (format!("GAME OVER! Snake {}", reason), Color::Red)
            }
        };

        let line = Line::from(vec![
            Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " | Score: {} | Length: {}",
                self.game.score(),
                self.game.snake().len()
            )),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_controls(&self) -> Paragraph<'static> {
        Paragraph::new("Arrows: Turn | Enter/Space: Start | p: Pause | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }
}
