//! Owned pixel grid with bounds-checked access.
//!
//! # Coordinate convention
//!
//! Pixels are addressed 0-based from the top-left corner: `x` runs
//! `0..width` left to right, `y` runs `0..height` top to bottom, and the
//! storage is row-major (`index = y * width + x`). Every coordinate outside
//! that range is a [`BufferError::OutOfBounds`]; nothing is clamped or
//! wrapped.
//!
//! Each pixel is one packed `u32` (see [`crate::colors`]).

use crate::colors::{Color, BLACK};
use crate::error::BufferError;

/// A grid of packed RGB pixels that owns its storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a `width` x `height` buffer with every pixel black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![BLACK.pack(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Replace the storage with a fresh black `width` x `height` grid.
    pub fn allocate(&mut self, width: u32, height: u32) {
        self.pixels = vec![BLACK.pack(); width as usize * height as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.pack());
    }

    /// Whether `(x, y)` addresses a pixel of this buffer.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Overwrite the pixel at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), BufferError> {
        let index = self.index(x, y)?;
        self.pixels[index] = color.pack();
        Ok(())
    }

    /// Read the pixel at `(x, y)`.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Color, BufferError> {
        let index = self.index(x, y)?;
        Ok(Color::unpack(self.pixels[index]))
    }

    /// Packed pixels in row-major order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Iterate over rows of packed pixels, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks() rejects 0; a zero-width buffer has no pixels either way.
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Pixels as tightly packed RGB bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &packed in &self.pixels {
            let (r, g, b) = Color::unpack(packed).channels();
            bytes.extend_from_slice(&[r, g, b]);
        }
        bytes
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize, BufferError> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    pub(crate) fn out_of_bounds(&self, x: i32, y: i32) -> BufferError {
        BufferError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
