//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O dependencies.
//! Entities draw themselves through the [`Canvas`] trait; what backs the
//! canvas is up to the caller.

pub mod action;
pub mod block;
pub mod board;
pub mod config;
pub mod engine;
pub mod fruits;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use block::Block;
pub use board::Board;
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use fruits::Fruits;
pub use grid::{Canvas, Color, PixelRect, Position};
pub use snake::{DeathCause, Snake};
pub use state::GameState;
