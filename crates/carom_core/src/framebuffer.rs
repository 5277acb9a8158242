//! Row-major pixel grid produced by a render pass.

use crate::color::Color;

/// A width x height grid of colors, row-major, origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn row_start(&self, y: u32) -> usize {
        debug_assert!(y < self.height, "row {y} out of bounds");
        y as usize * self.width as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable view of one row, for writers that fill a row at a time.
    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let start = self.row_start(y);
        let width = self.width as usize;
        &mut self.pixels[start..start + width]
    }

    /// Pixels as a packed `RGBRGB...` byte stream.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
