//! Turning snapshots into something on screen

pub mod board;
pub mod renderer;
pub mod sink;
pub mod terminal;

pub use board::{draw_board, status_lines};
pub use renderer::Renderer;
pub use sink::RenderSink;
pub use terminal::TerminalSink;
