use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    action::Action,
    board::Board,
    config::GameConfig,
    fruits::Fruits,
    grid::{Canvas, Color},
    snake::{DeathCause, Snake},
    state::GameState,
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game is paused; nothing moved
    Paused,
    /// Snake moved one cell
    Moved,
    /// Snake moved onto a fruit and grew
    AteFruit,
    /// Snake died and the game was reset and paused
    Died(DeathCause),
}

impl TickOutcome {
    /// Whether the frame changed and should be redrawn
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, TickOutcome::Paused)
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with deterministic fruit placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh, paused game
    pub fn reset(&mut self) -> GameState {
        let board = Board::new(&self.config);
        let snake = Snake::new(&self.config);
        let fruits = Fruits::new(&self.config, &snake, &board, &mut self.rng);

        GameState::new(snake, fruits, board)
    }

    /// Apply one player input
    pub fn handle_action(&self, state: &mut GameState, action: Action) {
        match action {
            Action::Move(direction) => {
                if !state.snake.set_direction(direction) {
                    debug!("ignored reversal to {direction:?}");
                }
                state.paused = false;
            }
            Action::TogglePause => {
                state.paused = !state.paused;
                debug!("paused: {}", state.paused);
            }
        }
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.paused {
            return TickOutcome::Paused;
        }

        state.ticks += 1;
        state.snake.move_forward();

        if let Some(cause) = state.snake.death_cause(&state.board, &self.config) {
            state.deaths += 1;
            info!(
                "snake died ({cause:?}) at length {} after {} ticks",
                state.snake.len(),
                state.ticks
            );
            self.respawn(state);
            return TickOutcome::Died(cause);
        }

        if state.fruits.found_fruit(state.snake.head_position()) {
            state.snake.grow();
            state
                .fruits
                .spawn_fruit(&self.config, &state.snake, &state.board, &mut self.rng);
            debug!("ate fruit, length {}", state.snake.len());
            return TickOutcome::AteFruit;
        }

        TickOutcome::Moved
    }

    /// Replace snake and fruits with fresh ones and wait for input
    fn respawn(&mut self, state: &mut GameState) {
        state.snake = Snake::new(&self.config);
        state.fruits = Fruits::new(&self.config, &state.snake, &state.board, &mut self.rng);
        state.paused = true;
    }

    /// Redraw the whole frame
    pub fn draw(&self, state: &GameState, canvas: &mut impl Canvas) {
        let bs = self.config.block_size;
        canvas.clear(Color::BLACK);
        state.snake.draw(canvas, bs);
        state.fruits.draw(canvas, bs);
        state.board.draw(canvas, bs);
    }
}
