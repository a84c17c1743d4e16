use super::grid::{Canvas, Color, Position};

/// A single colored cell: one snake segment, fruit or wall piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    position: Position,
    color: Color,
}

impl Block {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            position: Position::new(x, y),
            color,
        }
    }

    pub fn at(position: Position, color: Color) -> Self {
        Self { position, color }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Fill this block's cell on the canvas
    pub fn draw(&self, canvas: &mut impl Canvas, block_size: u32) {
        canvas.fill_rect(self.position.to_pixel_rect(block_size), self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Framebuffer;

    #[test]
    fn test_block_accessors() {
        let block = Block::new(4, 9, Color::RED);
        assert_eq!(block.position(), Position::new(4, 9));
        assert_eq!(block.color(), Color::RED);
        assert_eq!(Block::at(Position::new(4, 9), Color::RED), block);
    }

    #[test]
    fn test_draw_fills_cell() {
        let mut fb = Framebuffer::new(20, 20);
        Block::new(1, 2, Color::GREEN).draw(&mut fb, 5);

        assert_eq!(fb.pixel(5, 10), Some(Color::GREEN));
        assert_eq!(fb.pixel(9, 14), Some(Color::GREEN));
        assert_eq!(fb.pixel(10, 10), Some(Color::BLACK));
        assert_eq!(fb.pixel(4, 10), Some(Color::BLACK));
    }
}
