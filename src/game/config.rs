use anyhow::{ensure, Result};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the board, border included
    pub width: i32,
    /// Height of the board, border included
    pub height: i32,
    /// Time between two snake moves
    pub tick_interval: Duration,
    /// Points awarded per food eaten
    pub food_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            tick_interval: Duration::from_millis(150),
            food_score: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Check the board can hold a snake and a piece of food
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= 3 && self.height >= 3,
            "board must be at least 3x3, got {}x{}",
            self.width,
            self.height
        );
        let interior = (self.width - 2) * (self.height - 2);
        ensure!(
            interior >= 2,
            "board interior has {interior} cell(s), need room for the snake and food"
        );
        ensure!(!self.tick_interval.is_zero(), "tick interval must be non-zero");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 20);
        assert_eq!(config.tick_interval, Duration::from_millis(150));
        assert_eq!(config.food_score, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12).with_tick_interval(Duration::from_millis(80));
        assert_eq!(config.width, 15);
        assert_eq!(config.height, 12);
        assert_eq!(config.tick_interval, Duration::from_millis(80));
    }

    #[test]
    fn test_rejects_tiny_boards() {
        assert!(GameConfig::new(2, 10).validate().is_err());
        assert!(GameConfig::new(10, 2).validate().is_err());
        // 3x3 has a single interior cell: no room for food
        assert!(GameConfig::new(3, 3).validate().is_err());
        assert!(GameConfig::new(4, 3).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_tick() {
        let config = GameConfig::default().with_tick_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
