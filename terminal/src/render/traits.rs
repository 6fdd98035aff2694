use common::Direction;
use super::types::CharPattern;

pub trait GameObjectRenderer {
    /// `direction` is only set for the head
    fn render_snake_segment(&self, direction: Option<Direction>, is_head: bool) -> CharPattern;

    fn render_apple(&self) -> CharPattern;
}
