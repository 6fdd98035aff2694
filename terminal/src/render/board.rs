use super::traits::GameObjectRenderer;
use super::types::{CharGrid, RenderConfig};
use common::GameState;

/// Lays out a game state on a `CharGrid` using a `GameObjectRenderer`.
pub struct BoardRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, state: &GameState, config: &RenderConfig) -> CharGrid {
        let game_config = state.config();
        let mut grid = CharGrid::new(
            game_config.grid_width as usize,
            game_config.grid_height as usize,
            config.chars_per_point,
        );

        // Apple first so the snake wins if they ever share a cell
        let apple = state.apple();
        if game_config.contains(&apple) {
            let pattern = self.renderer.render_apple();
            grid.set_logical_point(apple.x as usize, apple.y as usize, &pattern);
        }

        // Tail to head so the head is drawn last
        let snake = state.snake();
        for (i, pos) in snake.segments().enumerate().rev() {
            if game_config.contains(pos) {
                let is_head = i == 0;
                let direction = is_head.then(|| state.direction());
                let pattern = self.renderer.render_snake_segment(direction, is_head);
                grid.set_logical_point(pos.x as usize, pos.y as usize, &pattern);
            }
        }

        grid
    }
}
