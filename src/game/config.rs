use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    /// Side length of one grid cell in pixels
    pub block_size: i32,
    /// Tick delay at the start of a game, in milliseconds
    pub initial_delay_ms: u64,
    /// How much the tick delay shrinks on each ramp step, in milliseconds
    pub delay_step_ms: u64,
    /// Wall-clock interval between ramp steps, in seconds
    pub ramp_interval_secs: u64,
    /// Side length of a cloud in pixels
    pub cloud_size: i32,
    /// Number of clouds spawned at startup
    pub initial_cloud_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            block_size: 20,
            initial_delay_ms: 120,
            delay_step_ms: 5,
            ramp_interval_secs: 15,
            cloud_size: 50,
            initial_cloud_count: 5,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom playfield and block size
    pub fn new(width: i32, height: i32, block_size: i32) -> Self {
        Self {
            width,
            height,
            block_size,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing (10x10 cells)
    pub fn small() -> Self {
        Self::new(200, 200, 20)
    }

    /// Number of grid cells per row
    pub fn cells_x(&self) -> i32 {
        self.width / self.block_size
    }

    /// Number of grid cells per column
    pub fn cells_y(&self) -> i32 {
        self.height / self.block_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 800);
        assert_eq!(config.block_size, 20);
        assert_eq!(config.initial_delay_ms, 120);
        assert_eq!(config.cells_x(), 40);
        assert_eq!(config.cells_y(), 40);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(400, 600, 20);
        assert_eq!(config.cells_x(), 20);
        assert_eq!(config.cells_y(), 30);
    }
}
