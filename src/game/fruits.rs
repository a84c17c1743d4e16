use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;
use rand::seq::IteratorRandom;

use super::block::Block;
use super::board::Board;
use super::config::GameConfig;
use super::grid::{Canvas, Color, Position};
use super::snake::Snake;

/// Random rolls tried before falling back to scanning for free cells
const MAX_SPAWN_ROLLS: usize = 1000;

/// The fruits currently waiting to be eaten
#[derive(Debug, Clone, PartialEq)]
pub struct Fruits {
    fruits: Vec<Block>,
    capacity: usize,
}

impl Fruits {
    /// Fill a fresh set of fruits up to the configured count
    pub fn new(config: &GameConfig, snake: &Snake, board: &Board, rng: &mut impl Rng) -> Self {
        let mut fruits = Self::empty(config);
        fruits.spawn_fruit(config, snake, board, rng);
        fruits
    }

    /// No fruits yet
    pub fn empty(config: &GameConfig) -> Self {
        Self {
            fruits: Vec::with_capacity(config.max_fruits),
            capacity: config.max_fruits,
        }
    }

    /// Top the fruits back up to capacity.
    ///
    /// Each fruit lands on a cell not taken by the snake, another fruit or a
    /// wall. Stops early if no such cell is left.
    pub fn spawn_fruit(
        &mut self,
        config: &GameConfig,
        snake: &Snake,
        board: &Board,
        rng: &mut impl Rng,
    ) {
        while self.fruits.len() < self.capacity {
            let Some(pos) = self.pick_free_cell(config, snake, board, rng) else {
                warn!(
                    "no free cell left for fruit, {} of {} placed",
                    self.fruits.len(),
                    self.capacity
                );
                return;
            };

            debug!("spawned fruit at ({}, {})", pos.x, pos.y);
            self.fruits.push(Block::at(pos, Color::RED));
        }
    }

    fn pick_free_cell(
        &self,
        config: &GameConfig,
        snake: &Snake,
        board: &Board,
        rng: &mut impl Rng,
    ) -> Option<Position> {
        let is_free = |pos: Position| {
            !snake.location_on_snake(pos.x, pos.y)
                && !self.fruit_already_exists(pos.x, pos.y)
                && !board.location_on_wall(pos.x, pos.y)
        };

        for _ in 0..MAX_SPAWN_ROLLS {
            let pos = Position::new(
                rng.gen_range(config.spawn_range_x()),
                rng.gen_range(config.spawn_range_y()),
            );
            if is_free(pos) {
                return Some(pos);
            }
        }

        // Board is crowded; pick among whatever is left
        let occupied: HashSet<Position> = snake
            .segments()
            .chain(self.positions())
            .chain(board.walls().iter().map(Block::position))
            .collect();
        config
            .spawn_range_y()
            .flat_map(|y| config.spawn_range_x().map(move |x| Position::new(x, y)))
            .filter(|pos| !occupied.contains(pos))
            .choose(rng)
    }

    /// Eat the fruit under the snake's head, if there is one
    pub fn found_fruit(&mut self, head: Position) -> bool {
        match self.fruits.iter().position(|fruit| fruit.position() == head) {
            Some(index) => {
                self.fruits.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check if a fruit already occupies the given cell
    pub fn fruit_already_exists(&self, x: i32, y: i32) -> bool {
        let pos = Position::new(x, y);
        self.fruits.iter().any(|fruit| fruit.position() == pos)
    }

    pub fn draw(&self, canvas: &mut impl Canvas, block_size: u32) {
        for fruit in &self.fruits {
            fruit.draw(canvas, block_size);
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.fruits.iter().map(Block::position)
    }

    /// Place a fruit at an exact cell, ignoring capacity
    pub fn insert(&mut self, pos: Position) {
        self.fruits.push(Block::at(pos, Color::RED));
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }
}
