//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies. The loop drives it; tests drive it directly.

pub mod config;
pub mod direction;
pub mod engine;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepResult};
pub use snapshot::Snapshot;
pub use state::{EndReason, GameState, Point, Snake};
