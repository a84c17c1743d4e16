use std::ops::RangeInclusive;
use std::time::Duration;

use super::grid::Position;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the display surface in pixels
    pub screen_width: u32,
    /// Height of the display surface in pixels
    pub screen_height: u32,
    /// Edge length of one grid cell in pixels
    pub block_size: u32,
    /// Number of fruits kept on the board
    pub max_fruits: usize,
    /// Head cell of a freshly spawned snake
    pub start_position: Position,
    /// Time between simulation ticks
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 500,
            screen_height: 500,
            block_size: 5,
            max_fruits: 3,
            start_position: Position::new(50, 50),
            tick_interval: Duration::from_millis(25),
        }
    }
}

impl GameConfig {
    /// Default board with a custom tick rate
    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            ..Default::default()
        }
    }

    /// Number of cell columns
    pub fn grid_width(&self) -> i32 {
        (self.screen_width / self.block_size) as i32
    }

    /// Number of cell rows
    pub fn grid_height(&self) -> i32 {
        (self.screen_height / self.block_size) as i32
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width() && pos.y >= 0 && pos.y < self.grid_height()
    }

    /// Columns fruit may spawn in, one cell clear of the screen edge
    pub fn spawn_range_x(&self) -> RangeInclusive<i32> {
        1..=self.grid_width() - 2
    }

    /// Rows fruit may spawn in, one cell clear of the screen edge
    pub fn spawn_range_y(&self) -> RangeInclusive<i32> {
        1..=self.grid_height() - 2
    }
}
