use common::{Direction, GameConfig, GameState};
use terminal::render::{
    board::BoardRenderer,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn main() {
    // Play a few scripted moves on a small board
    let config = GameConfig {
        grid_width: 12,
        grid_height: 10,
        ..GameConfig::default()
    };
    let mut state = GameState::new(config, 2024).expect("demo config is valid");
    state.start();
    for direction in [Direction::Up, Direction::Up, Direction::Left, Direction::Left] {
        state.set_direction(direction);
        state.tick();
    }

    println!("=== 1x1 Rendering (Classic) ===");
    render_with_dimensions(&state, CharDimensions::new(1, 1));

    println!("\n=== 2x1 Rendering (Wide) ===");
    render_with_dimensions(&state, CharDimensions::new(2, 1));

    println!("\n=== 3x2 Rendering (Large) ===");
    render_with_dimensions(&state, CharDimensions::new(3, 2));
}

fn render_with_dimensions(state: &GameState, char_dims: CharDimensions) {
    let board_renderer = BoardRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_point: char_dims };

    let char_grid = board_renderer.render(state, &config);
    let width = char_grid.physical_width();

    println!("Dimensions: {}x{} chars per point", char_dims.horizontal, char_dims.vertical);
    println!("Physical size: {}x{} characters", width, char_grid.physical_height());

    println!("┌{}┐", "─".repeat(width));
    for line in char_grid.into_lines() {
        println!("│{}│", line.into_iter().collect::<String>());
    }
    println!("└{}┘", "─".repeat(width));
}
