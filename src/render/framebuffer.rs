use crate::game::{Canvas, Color, PixelRect};

/// In-memory RGB pixel surface the game draws each frame into
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a black surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (x, y), or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        // Clip to the surface; anything left over is drawn
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = (rect.x as i64 + rect.width as i64).min(self.width as i64);
        let y1 = (rect.y as i64 + rect.height as i64).min(self.height as i64);

        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for y in y0 as usize..y1 as usize {
            let row = y * stride;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.pixel(3, 2), Some(Color::BLACK));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.pixel(0, 3), None);
    }

    #[test]
    fn test_fill_rect_clips_to_surface() {
        let mut fb = Framebuffer::new(10, 10);
        fb.fill_rect(
            PixelRect {
                x: -3,
                y: 8,
                width: 5,
                height: 5,
            },
            Color::BLUE,
        );

        assert_eq!(fb.pixel(0, 8), Some(Color::BLUE));
        assert_eq!(fb.pixel(1, 9), Some(Color::BLUE));
        assert_eq!(fb.pixel(2, 9), Some(Color::BLACK));
        assert_eq!(fb.pixel(0, 7), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_rect_fully_outside_is_ignored() {
        let mut fb = Framebuffer::new(10, 10);
        let before = fb.clone();
        fb.fill_rect(
            PixelRect {
                x: -5,
                y: 0,
                width: 5,
                height: 5,
            },
            Color::RED,
        );
        fb.fill_rect(
            PixelRect {
                x: 10,
                y: 10,
                width: 5,
                height: 5,
            },
            Color::RED,
        );
        assert_eq!(fb, before);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(5, 5);
        fb.clear(Color::GREEN);
        assert_eq!(fb.pixel(2, 2), Some(Color::GREEN));
        fb.clear(Color::BLACK);
        assert_eq!(fb.pixel(2, 2), Some(Color::BLACK));
    }
}
