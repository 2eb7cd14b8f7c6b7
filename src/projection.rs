//! Mapping from mesh space to pixel space.
//!
//! The mapping is a flat orthographic drop of `z`: a vertex's `x` and `y`
//! are treated as normalized coordinates in `[-1, 1]` and scaled to the
//! buffer extent. Results are truncated toward zero and never clamped, so
//! `x = 1.0` lands on `width`, one past the last column. Callers decide what
//! to do with positions that fall outside the buffer.

use crate::math::vec2::IVec2;
use crate::mesh::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMapping {
    width: u32,
    height: u32,
    flip_y: bool,
}

impl ScreenMapping {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            flip_y: false,
        }
    }

    /// Make +y point up in the image (row 0 is `y = 1.0`).
    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    /// Project `vertex` to a pixel position.
    pub fn to_screen(&self, vertex: &Vertex) -> IVec2 {
        let half_w = f64::from(self.width) / 2.0;
        let half_h = f64::from(self.height) / 2.0;

        let sx = (vertex.x + 1.0) * half_w;
        let sy = if self.flip_y {
            (1.0 - vertex.y) * half_h
        } else {
            (vertex.y + 1.0) * half_h
        };

        // `as` truncates toward zero and saturates on overflow/NaN.
        IVec2::new(sx as i32, sy as i32)
    }
}
