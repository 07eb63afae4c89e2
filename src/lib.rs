//! tty_snake - classic snake in the terminal
//!
//! This library provides:
//! - Core game rules (game module)
//! - Key mapping (input module)
//! - Snapshot rendering and the raw-mode terminal (render module)
//! - The timer/input driven loop (game_loop module)

pub mod game;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod render;
