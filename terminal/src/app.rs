use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Duration;

use common::GameState;

use crate::views::{GameView, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
}

pub struct App {
    pub view: GameView,
}

impl App {
    pub fn new(game: GameState) -> Self {
        Self {
            view: GameView::new(game),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        self.view.handle_input(key)
    }

    pub fn update(&mut self, dt: Duration) {
        self.view.update(dt);
    }

    pub fn render(&self, frame: &mut Frame) {
        self.view.render(frame);
    }
}
