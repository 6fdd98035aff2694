use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Position { x, y }
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.vector();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_within(&self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.x < width as i16 && self.y >= 0 && self.y < height as i16
    }
}

impl From<(i16, i16)> for Position {
    fn from((x, y): (i16, i16)) -> Self {
        Position { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Head is the first element
    pub body: VecDeque<Position>,
}

impl Snake {
    pub fn new(segments: impl IntoIterator<Item = Position>) -> Self {
        Snake {
            body: segments.into_iter().collect(),
        }
    }

    pub fn head(&self) -> &Position {
        self.body.front().expect("Snake body should not be empty")
    }

    pub fn tail(&self) -> &Position {
        self.body.back().expect("Snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.body.iter().any(|segment| segment == position)
    }

    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }

    pub fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    pub fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }
}
