use super::state::{EndReason, Point};

/// Read-only copy of a game state, handed to render sinks
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    /// Snake cells, head first
    pub snake: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub game_over: bool,
    pub end: Option<EndReason>,
}

impl Snapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}
