use super::board::Board;
use super::fruits::Fruits;
use super::snake::Snake;

/// Complete game state, owned by the game loop
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub fruits: Fruits,
    pub board: Board,
    /// Simulation is frozen while set
    pub paused: bool,
    /// Ticks simulated since start
    pub ticks: u64,
    /// Times the snake has died and been reset
    pub deaths: u32,
}

impl GameState {
    /// Create a new, paused game state
    pub fn new(snake: Snake, fruits: Fruits, board: Board) -> Self {
        Self {
            snake,
            fruits,
            board,
            paused: true,
            ticks: 0,
            deaths: 0,
        }
    }
}
