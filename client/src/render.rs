use common::{GameConfig, GameState, Position};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND_COLOR: &str = "#ffffff";
const BORDER_COLOR: &str = "#000000";
const SNAKE_COLOR: &str = "green";
const APPLE_COLOR: &str = "lightblue";

/// Draws a game state onto a 2d canvas, one filled square per cell.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    cell_size: f64,
}

impl CanvasRenderer {
    /// Resizes the canvas to fit the grid at the configured cell size.
    pub fn new(canvas: HtmlCanvasElement, config: &GameConfig) -> Result<Self, JsValue> {
        let (width, height) = config.canvas_size();
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2d context"))?
            .ok_or_else(|| JsValue::from_str("2d context is null"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2d context"))?;

        Ok(Self {
            canvas,
            ctx,
            cell_size: config.cell_size as f64,
        })
    }

    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        self.ctx.set_fill_style(&JsValue::from_str(BACKGROUND_COLOR));
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.ctx.set_fill_style(&JsValue::from_str(SNAKE_COLOR));
        for segment in state.snake().segments() {
            self.fill_cell(segment);
        }

        // Only overlaps the snake once the board is full
        let apple = state.apple();
        if !state.snake().contains(&apple) {
            self.ctx.set_fill_style(&JsValue::from_str(APPLE_COLOR));
            self.fill_cell(&apple);
        }

        self.ctx.set_stroke_style(&JsValue::from_str(BORDER_COLOR));
        self.ctx.set_line_width(1.0);
        self.ctx.stroke_rect(0.5, 0.5, width - 1.0, height - 1.0);

        Ok(())
    }

    fn fill_cell(&self, position: &Position) {
        self.ctx.fill_rect(
            position.x as f64 * self.cell_size,
            position.y as f64 * self.cell_size,
            self.cell_size,
            self.cell_size,
        );
    }
}

/// Renders a serialized game state to a canvas element.
/// Takes the JSON produced by `SnakeGame::state_json`.
#[wasm_bindgen]
pub fn render_game(game_state_json: &str, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let game_state: GameState = serde_json::from_str(game_state_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse game state: {}", e)))?;

    game_state
        .config()
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let renderer = CanvasRenderer::new(canvas, game_state.config())?;
    renderer.render(&game_state)
}
