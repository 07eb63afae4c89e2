//! Fixed-rate loop tying the game to input and rendering
//!
//! Timer ticks, key events and the interrupt signal are multiplexed onto a
//! single task with `tokio::select!`, so the game state is only ever
//! mutated from one place, one event at a time.

pub mod runner;

pub use runner::{ExitReason, GameLoop};
