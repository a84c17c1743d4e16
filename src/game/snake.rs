use std::collections::VecDeque;

use super::action::Direction;
use super::block::Block;
use super::board::Board;
use super::config::GameConfig;
use super::grid::{Canvas, Color, Position};

/// What killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Head left the grid
    OutOfBounds,
    /// Head ran into the snake's own body
    SelfCollision,
    /// Head ran into a wall block
    Wall,
}

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front. Never empty.
    body: VecDeque<Block>,
    direction: Direction,
}

impl Snake {
    /// Two-segment snake at the configured start cell, heading left
    pub fn new(config: &GameConfig) -> Self {
        let head = config.start_position;
        Self::from_segments(
            [head, head.moved_in_direction(Direction::Right)],
            Direction::Left,
        )
    }

    /// Build a snake from explicit segment positions, head first.
    ///
    /// Returns a single-segment snake at the origin if `segments` is empty,
    /// so the non-empty invariant always holds.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Self {
        let mut body: VecDeque<Block> = segments
            .into_iter()
            .map(|pos| Block::at(pos, Color::GREEN))
            .collect();
        if body.is_empty() {
            body.push_back(Block::new(0, 0, Color::GREEN));
        }
        Self { body, direction }
    }

    pub fn draw(&self, canvas: &mut impl Canvas, block_size: u32) {
        for block in &self.body {
            block.draw(canvas, block_size);
        }
    }

    /// Add a new head one cell ahead in the current direction
    pub fn grow(&mut self) {
        let new_head = self.head_position().moved_in_direction(self.direction);
        self.body.push_front(Block::at(new_head, Color::GREEN));
    }

    /// Drop the tail segment. A single-segment snake is left untouched.
    pub fn shrink(&mut self) -> Option<Block> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_back()
    }

    /// Slide forward one cell, keeping the length
    pub fn move_forward(&mut self) {
        self.grow();
        self.shrink();
    }

    pub fn head_position(&self) -> Position {
        // `body` is never empty
        self.body[0].position()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Steer the snake. Reversing straight into the body is refused.
    ///
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn is_dead(&self, board: &Board, config: &GameConfig) -> bool {
        self.death_cause(board, config).is_some()
    }

    /// Why the snake is dead at its current position, if it is
    pub fn death_cause(&self, board: &Board, config: &GameConfig) -> Option<DeathCause> {
        let head = self.head_position();

        if !config.is_in_bounds(head) {
            return Some(DeathCause::OutOfBounds);
        }

        if self.body.iter().skip(1).any(|block| block.position() == head) {
            return Some(DeathCause::SelfCollision);
        }

        if board.location_on_wall(head.x, head.y) {
            return Some(DeathCause::Wall);
        }

        None
    }

    /// Check if any segment occupies the given cell
    pub fn location_on_snake(&self, x: i32, y: i32) -> bool {
        let pos = Position::new(x, y);
        self.body.iter().any(|block| block.position() == pos)
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().map(Block::position)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Framebuffer;

    fn open_board() -> Board {
        Board::new(&GameConfig::default())
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(&GameConfig::default());
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head_position(), Position::new(50, 50));
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![Position::new(50, 50), Position::new(51, 50)]
        );
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_empty_segments_fall_back_to_one_block() {
        let snake = Snake::from_segments([], Direction::Up);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_grow_adds_head_in_direction() {
        for (direction, expected) in [
            (Direction::Left, Position::new(9, 10)),
            (Direction::Down, Position::new(10, 11)),
            (Direction::Right, Position::new(11, 10)),
            (Direction::Up, Position::new(10, 9)),
        ] {
            let mut snake = Snake::from_segments([Position::new(10, 10)], direction);
            snake.grow();
            assert_eq!(snake.len(), 2);
            assert_eq!(snake.head_position(), expected);
        }
    }

    #[test]
    fn test_shrink_removes_tail() {
        let mut snake = Snake::new(&GameConfig::default());
        snake.grow();
        assert_eq!(snake.len(), 3);

        let tail = snake.shrink();
        assert_eq!(tail.map(|b| b.position()), Some(Position::new(51, 50)));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_shrink_is_guarded_at_one_segment() {
        let mut snake = Snake::from_segments([Position::new(3, 3)], Direction::Up);
        assert_eq!(snake.shrink(), None);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head_position(), Position::new(3, 3));
    }

    #[test]
    fn test_move_preserves_length() {
        let mut snake = Snake::new(&GameConfig::default());
        snake.grow();
        let before = snake.len();

        snake.move_forward();

        assert_eq!(snake.len(), before);
    }

    #[test]
    fn test_repeated_moves_left() {
        let mut snake = Snake::new(&GameConfig::default());
        let start = snake.head_position();

        for _ in 0..7 {
            snake.move_forward();
        }

        assert_eq!(snake.head_position(), Position::new(start.x - 7, start.y));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        for direction in Direction::ALL {
            let mut snake = Snake::from_segments([Position::new(5, 5)], direction);
            assert!(!snake.set_direction(direction.opposite()));
            assert_eq!(snake.direction(), direction);
        }
    }

    #[test]
    fn test_non_opposite_turns_are_accepted() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                if current.is_opposite(requested) {
                    continue;
                }
                let mut snake = Snake::from_segments([Position::new(5, 5)], current);
                assert!(snake.set_direction(requested));
                assert_eq!(snake.direction(), requested);
            }
        }
    }

    #[test]
    fn test_alive_in_open_space() {
        let snake = Snake::new(&GameConfig::default());
        assert!(!snake.is_dead(&open_board(), &GameConfig::default()));
    }

    #[test]
    fn test_dies_off_screen() {
        let config = GameConfig::default();
        let mut snake =
            Snake::from_segments([Position::new(0, 50), Position::new(1, 50)], Direction::Left);

        snake.move_forward();

        assert_eq!(snake.head_position(), Position::new(-1, 50));
        assert!(snake.is_dead(&open_board(), &config));
        assert_eq!(
            snake.death_cause(&open_board(), &config),
            Some(DeathCause::OutOfBounds)
        );
    }

    #[test]
    fn test_dies_on_wall() {
        let config = GameConfig::default();
        let mut snake =
            Snake::from_segments([Position::new(1, 50), Position::new(2, 50)], Direction::Left);

        snake.move_forward();

        assert_eq!(
            snake.death_cause(&open_board(), &config),
            Some(DeathCause::Wall)
        );
    }

    #[test]
    fn test_self_collision() {
        let config = GameConfig::default();
        // Body: (5,5) .. (1,5), heading right
        let mut snake = Snake::from_segments(
            (1..=5).rev().map(|x| Position::new(x, 5)),
            Direction::Right,
        );

        snake.move_forward();
        snake.set_direction(Direction::Down);
        snake.move_forward();
        snake.set_direction(Direction::Left);
        snake.move_forward();
        assert!(!snake.is_dead(&open_board(), &config));

        snake.set_direction(Direction::Up);
        snake.move_forward();

        assert_eq!(
            snake.death_cause(&open_board(), &config),
            Some(DeathCause::SelfCollision)
        );
    }

    #[test]
    fn test_location_on_snake() {
        let snake = Snake::new(&GameConfig::default());
        assert!(snake.location_on_snake(50, 50));
        assert!(snake.location_on_snake(51, 50));
        assert!(!snake.location_on_snake(52, 50));
    }

    #[test]
    fn test_draw_paints_segments() {
        let config = GameConfig::default();
        let snake = Snake::new(&config);
        let mut fb = Framebuffer::new(config.screen_width, config.screen_height);

        snake.draw(&mut fb, config.block_size);

        assert_eq!(fb.pixel(250, 250), Some(Color::GREEN));
        assert_eq!(fb.pixel(259, 254), Some(Color::GREEN));
        assert_eq!(fb.pixel(260, 250), Some(Color::BLACK));
    }
}
