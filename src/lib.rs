//! Block Snake - a Snake game on a fixed 100x100 grid of 5-pixel blocks
//!
//! This library provides:
//! - Core game logic and entities (game module)
//! - Keyboard mapping (input module)
//! - Pixel framebuffer and terminal presentation (render module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
