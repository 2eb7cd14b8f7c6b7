//! Integer line rasterization.
//!
//! Lines are traced with the all-octant form of Bresenham's algorithm: a
//! single error term `err` tracks how far the current pixel is from the
//! ideal line, and on each step both axes are tested independently. When
//! both tests pass the line steps diagonally, so the result is 8-connected.
//!
//! ```text
//! dx = |x1 - x0|     sx = sign(x1 - x0)
//! dy = -|y1 - y0|    sy = sign(y1 - y0)
//! err = dx + dy
//!
//! loop:
//!   plot (x0, y0)
//!   e2 = 2 * err
//!   if e2 >= dy: stop if x0 == x1, else err += dy, x0 += sx
//!   if e2 <= dx: stop if y0 == y1, else err += dx, y0 += sy
//! ```
//!
//! Both endpoints are plotted. No floating point is involved.

use super::framebuffer::FrameBuffer;
use crate::colors::Color;
use crate::error::BufferError;
use crate::math::vec2::IVec2;

/// Iterator over the pixels visited by a line from `p0` to `p1`, inclusive.
#[derive(Clone, Debug)]
pub struct LinePoints {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(p0: IVec2, p1: IVec2) -> Self {
        // Widened so `2 * err` cannot overflow for any pair of i32 endpoints.
        let (x0, y0) = (i64::from(p0.x), i64::from(p0.y));
        let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 <= x1 { 1 } else { -1 },
            sy: if y0 <= y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.done {
            return None;
        }

        // Coordinates always stay between the two i32 endpoints.
        let point = IVec2::new(self.x as i32, self.y as i32);
        let e2 = self.err * 2;

        if e2 >= self.dy {
            if self.x == self.x1 {
                self.done = true;
                return Some(point);
            }
            self.err += self.dy;
            self.x += self.sx;
        }

        if e2 <= self.dx {
            if self.y == self.y1 {
                self.done = true;
                return Some(point);
            }
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(point)
    }
}

/// Pixels visited by the line from `p0` to `p1`.
pub fn line_points(p0: IVec2, p1: IVec2) -> LinePoints {
    LinePoints::new(p0, p1)
}

/// Draw a line from `p0` to `p1` into `buffer`.
///
/// Both endpoints must lie inside the buffer. If either does not, nothing is
/// drawn and the offending endpoint is returned as
/// [`BufferError::OutOfBounds`]. Since the buffer is a rectangle, every
/// pixel between two in-range endpoints is in range too.
pub fn draw_line(
    buffer: &mut FrameBuffer,
    p0: IVec2,
    p1: IVec2,
    color: Color,
) -> Result<(), BufferError> {
    for endpoint in [p0, p1] {
        if !buffer.contains(endpoint.x, endpoint.y) {
            return Err(buffer.out_of_bounds(endpoint.x, endpoint.y));
        }
    }

    for point in line_points(p0, p1) {
        buffer.set_pixel(point.x, point.y, color)?;
    }
    Ok(())
}
