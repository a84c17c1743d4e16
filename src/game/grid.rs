use super::action::Direction;

/// A position on the game grid, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Pixel square covered by this cell
    pub fn to_pixel_rect(&self, block_size: u32) -> PixelRect {
        let size = block_size as i32;
        PixelRect {
            x: self.x * size,
            y: self.y * size,
            width: block_size,
            height: block_size,
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Surface the game entities draw onto.
///
/// Implementations clip rectangles that fall partly or wholly outside the
/// surface; drawing never fails.
pub trait Canvas {
    /// Fill the whole surface with one color
    fn clear(&mut self, color: Color);

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: PixelRect, color: Color);
}
