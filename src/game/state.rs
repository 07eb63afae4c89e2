use super::direction::Direction;
use super::snapshot::Snapshot;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move point one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Point>,
}

impl Snake {
    /// Create a snake whose segments trail behind `head`, opposite to `direction`
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];
        let back = direction.opposite();

        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_in_direction(back));
        }

        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    /// Put a new head at `new_head`, dropping the tail unless the snake grows
    pub fn push_head(&mut self, new_head: Point, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Snake ran into the border
    Wall,
    /// Snake ran into its own body
    SelfCollision,
    /// Snake covers every interior cell, so no food can be placed
    BoardFilled,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Current heading, applied on the next advance
    pub direction: Direction,
    pub food: Point,
    pub width: i32,
    pub height: i32,
    pub score: u32,
    /// `Some` once the game is over
    pub end: Option<EndReason>,
}

impl GameState {
    /// Create a running game state
    pub fn new(snake: Snake, direction: Direction, food: Point, width: i32, height: i32) -> Self {
        Self {
            snake,
            direction,
            food,
            width,
            height,
            score: 0,
            end: None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.end.is_some()
    }

    /// Check if a cell lies on or beyond the one-cell border
    pub fn is_wall(&self, pos: Point) -> bool {
        pos.x <= 0 || pos.x >= self.width - 1 || pos.y <= 0 || pos.y >= self.height - 1
    }

    /// Number of cells inside the border
    pub fn interior_cells(&self) -> usize {
        ((self.width - 2).max(0) * (self.height - 2).max(0)) as usize
    }

    /// Turn the snake, unless that would reverse it onto its own neck.
    ///
    /// Returns whether the new heading was accepted.
    pub fn change_direction(&mut self, new_direction: Direction) -> bool {
        if self.direction.is_opposite(new_direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            snake: self.snake.body.clone(),
            food: self.food,
            score: self.score,
            game_over: self.is_game_over(),
            end: self.end,
        }
    }
}
