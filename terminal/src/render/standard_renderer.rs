use common::Direction;
use ratatui::style::{Color, Modifier, Style};
use super::traits::GameObjectRenderer;
use super::types::{CharPattern, CharDimensions};

fn head_style() -> Style {
    Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD)
}

fn body_style() -> Style {
    Style::default().fg(Color::Green)
}

fn apple_style() -> Style {
    Style::default().fg(Color::LightBlue)
}

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl GameObjectRenderer for StandardRenderer {
    fn render_snake_segment(&self, direction: Option<Direction>, is_head: bool) -> CharPattern {
        let style = if is_head { head_style() } else { body_style() };

        if self.char_dims.horizontal == 1 && self.char_dims.vertical == 1 {
            // 1x1 rendering (classic mode) - the head points where it is going
            let char = match (is_head, direction) {
                (true, Some(Direction::Up)) => '▲',
                (true, Some(Direction::Down)) => '▼',
                (true, Some(Direction::Left)) => '◀',
                (true, Some(Direction::Right)) => '▶',
                (true, None) => '█',
                (false, _) => '▓',
            };
            return CharPattern::new(vec![vec![char]]).with_style(style);
        }

        // Wider cells use shade to tell head from body
        let fill_char = if is_head { '█' } else { '▓' };
        CharPattern::single(fill_char, self.char_dims).with_style(style)
    }

    fn render_apple(&self) -> CharPattern {
        let chars = if self.char_dims.horizontal <= 2 && self.char_dims.vertical == 1 {
            vec![vec!['●'; self.char_dims.horizontal]]
        } else {
            // Checkerboard for larger cells
            let mut pattern = vec![vec![' '; self.char_dims.horizontal]; self.char_dims.vertical];
            for (y, row) in pattern.iter_mut().enumerate() {
                for (x, cell) in row.iter_mut().enumerate() {
                    if (x + y) % 2 == 0 {
                        *cell = '●';
                    }
                }
            }
            pattern
        };

        CharPattern::new(chars).with_style(apple_style())
    }
}
