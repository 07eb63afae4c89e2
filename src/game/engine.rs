use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use super::{
    config::GameConfig,
    direction::Direction,
    state::{EndReason, GameState, Point, Snake},
};

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the game is over after this step
    pub terminated: bool,
    /// Set only on the step that ended the game
    pub cause: Option<EndReason>,
}

impl StepResult {
    fn moved(ate_food: bool) -> Self {
        Self {
            ate_food,
            terminated: false,
            cause: None,
        }
    }

    fn ended(ate_food: bool, cause: EndReason) -> Self {
        Self {
            ate_food,
            terminated: true,
            cause: Some(cause),
        }
    }

    fn halted() -> Self {
        Self {
            ate_food: false,
            terminated: true,
            cause: None,
        }
    }
}

/// The game engine: applies the movement rules and owns the food RNG
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: one segment at the board centre, heading right
    pub fn reset(&mut self) -> GameState {
        let center = Point::new(self.config.width / 2, self.config.height / 2);
        let snake = Snake::new(center, Direction::Right, 1);

        let mut state = GameState::new(
            snake,
            Direction::Right,
            center,
            self.config.width,
            self.config.height,
        );
        self.place_food(&mut state);

        info!(
            width = state.width,
            height = state.height,
            food = ?state.food,
            "new game"
        );
        state
    }

    /// Execute one tick of the game
    pub fn advance(&mut self, state: &mut GameState) -> StepResult {
        if state.is_game_over() {
            return StepResult::halted();
        }

        let new_head = state.snake.head().moved_in_direction(state.direction);

        if let Some(cause) = self.check_collision(state, new_head) {
            return self.finish(state, cause, false);
        }

        let ate_food = new_head == state.food;
        state.snake.push_head(new_head, ate_food);

        if !ate_food {
            return StepResult::moved(false);
        }

        state.score += self.config.food_score;
        debug!(score = state.score, length = state.snake.len(), "ate food");

        if self.place_food(state) {
            StepResult::moved(true)
        } else {
            self.finish(state, EndReason::BoardFilled, true)
        }
    }

    /// Check if the new head position ends the game.
    ///
    /// The tail counts as occupied even though it would move away this tick.
    fn check_collision(&self, state: &GameState, pos: Point) -> Option<EndReason> {
        if state.is_wall(pos) {
            return Some(EndReason::Wall);
        }

        if state.snake.occupies(pos) {
            return Some(EndReason::SelfCollision);
        }

        None
    }

    fn finish(&self, state: &mut GameState, cause: EndReason, ate_food: bool) -> StepResult {
        state.end = Some(cause);
        info!(
            reason = ?cause,
            score = state.score,
            length = state.snake.len(),
            "game over"
        );
        StepResult::ended(ate_food, cause)
    }

    /// Move the food to a random free interior cell.
    ///
    /// Returns false when the snake covers the whole interior, in which case
    /// the food is left where it is.
    fn place_food(&mut self, state: &mut GameState) -> bool {
        if state.snake.len() >= state.interior_cells() {
            return false;
        }

        loop {
            let x = self.rng.gen_range(1..state.width - 1);
            let y = self.rng.gen_range(1..state.height - 1);
            let pos = Point::new(x, y);

            if !state.snake.occupies(pos) {
                state.food = pos;
                return true;
            }
        }
    }
}
