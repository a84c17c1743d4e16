use std::collections::HashSet;

use super::block::Block;
use super::config::GameConfig;
use super::grid::{Canvas, Color, Position};

/// Static wall layout of the playing field
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    walls: Vec<Block>,
}

impl Board {
    /// Board with the default rectangular border
    pub fn new(config: &GameConfig) -> Self {
        let mut board = Self { walls: Vec::new() };
        board.generate_default(config);
        board
    }

    /// Wall off the outermost ring of cells.
    ///
    /// The corners are produced twice by the row and column passes and are
    /// deduplicated afterwards.
    pub fn generate_default(&mut self, config: &GameConfig) {
        let (width, height) = (config.grid_width(), config.grid_height());
        self.walls.clear();

        for x in 0..width {
            self.walls.push(Block::new(x, 0, Color::BLUE));
            self.walls.push(Block::new(x, height - 1, Color::BLUE));
        }

        for y in 0..height {
            self.walls.push(Block::new(0, y, Color::BLUE));
            self.walls.push(Block::new(width - 1, y, Color::BLUE));
        }

        self.dedup();
    }

    fn dedup(&mut self) {
        let mut seen = HashSet::with_capacity(self.walls.len());
        self.walls.retain(|block| seen.insert(block.position()));
    }

    /// Check if a wall occupies the given cell
    pub fn location_on_wall(&self, x: i32, y: i32) -> bool {
        let pos = Position::new(x, y);
        self.walls.iter().any(|block| block.position() == pos)
    }

    pub fn walls(&self) -> &[Block] {
        &self.walls
    }

    pub fn draw(&self, canvas: &mut impl Canvas, block_size: u32) {
        for block in &self.walls {
            block.draw(canvas, block_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Framebuffer;

    #[test]
    fn test_default_board_is_perimeter() {
        let board = Board::new(&GameConfig::default());

        assert_eq!(board.walls().len(), 4 * 100 - 4);
        for block in board.walls() {
            let Position { x, y } = block.position();
            assert!(x == 0 || x == 99 || y == 0 || y == 99);
            assert_eq!(block.color(), Color::BLUE);
        }
    }

    #[test]
    fn test_walls_are_unique() {
        let board = Board::new(&GameConfig::default());
        let unique: HashSet<_> = board.walls().iter().map(Block::position).collect();
        assert_eq!(unique.len(), board.walls().len());
    }

    #[test]
    fn test_location_on_wall() {
        let board = Board::new(&GameConfig::default());

        assert!(board.location_on_wall(0, 0));
        assert!(board.location_on_wall(99, 42));
        assert!(board.location_on_wall(17, 99));
        assert!(!board.location_on_wall(1, 1));
        assert!(!board.location_on_wall(50, 50));
        assert!(!board.location_on_wall(-1, 0));
    }

    #[test]
    fn test_regenerate_does_not_accumulate() {
        let config = GameConfig::default();
        let mut board = Board::new(&config);
        board.generate_default(&config);
        assert_eq!(board.walls().len(), 396);
    }

    #[test]
    fn test_draw_paints_border() {
        let config = GameConfig::default();
        let board = Board::new(&config);
        let mut fb = Framebuffer::new(config.screen_width, config.screen_height);
        board.draw(&mut fb, config.block_size);

        assert_eq!(fb.pixel(0, 0), Some(Color::BLUE));
        assert_eq!(fb.pixel(499, 250), Some(Color::BLUE));
        assert_eq!(fb.pixel(250, 250), Some(Color::BLACK));
    }
}
