//! Wireframe rendering of a parsed mesh.
//!
//! Provides the [`Renderer`] which projects every face through a
//! [`ScreenMapping`] and draws its three edges with the line rasterizer.

use super::framebuffer::FrameBuffer;
use super::line::draw_line;
use crate::colors::Color;
use crate::config::{OutOfBounds, RenderConfig};
use crate::error::{BufferError, RenderError};
use crate::math::vec2::IVec2;
use crate::mesh::Mesh;
use crate::projection::ScreenMapping;

/// Counters from one [`Renderer::render_wireframe`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces: usize,
    pub edges_drawn: usize,
    pub edges_skipped: usize,
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// A buffer of the configured size filled with the background color.
    pub fn create_framebuffer(&self) -> FrameBuffer {
        let mut buffer = FrameBuffer::new(self.config.width, self.config.height);
        buffer.clear(self.config.background);
        buffer
    }

    /// Mapping for `buffer`'s extent with the configured orientation.
    pub fn mapping_for(&self, buffer: &FrameBuffer) -> ScreenMapping {
        ScreenMapping::new(buffer.width(), buffer.height()).with_flip_y(self.config.flip_y)
    }

    /// Draw the outline of a screen-space triangle: p0→p1, p1→p2, p2→p0.
    pub fn draw_triangle_wireframe(
        &self,
        buffer: &mut FrameBuffer,
        points: [IVec2; 3],
        color: Color,
    ) -> Result<(), BufferError> {
        let [p0, p1, p2] = points;
        draw_line(buffer, p0, p1, color)?;
        draw_line(buffer, p1, p2, color)?;
        draw_line(buffer, p2, p0, color)
    }

    /// Draw every face edge of `mesh` into `buffer` in the foreground color.
    ///
    /// With [`OutOfBounds::Fail`] the first edge that leaves the buffer
    /// aborts the pass (edges drawn before it stay drawn). With
    /// [`OutOfBounds::Skip`] such edges are left out and counted.
    pub fn render_wireframe(
        &self,
        mesh: &Mesh,
        buffer: &mut FrameBuffer,
    ) -> Result<RenderStats, RenderError> {
        let mapping = self.mapping_for(buffer);
        let mut stats = RenderStats::default();

        for (face_index, face) in mesh.faces().iter().enumerate() {
            for (a, b) in face.edges() {
                let p0 = mapping.to_screen(&a);
                let p1 = mapping.to_screen(&b);

                match draw_line(buffer, p0, p1, self.config.foreground) {
                    Ok(()) => stats.edges_drawn += 1,
                    Err(source) => match self.config.out_of_bounds {
                        OutOfBounds::Fail => {
                            return Err(RenderError::Boundary {
                                face: face_index,
                                source,
                            })
                        }
                        OutOfBounds::Skip => {
                            tracing::debug!(face = face_index, %p0, %p1, "skipping edge: {source}");
                            stats.edges_skipped += 1;
                        }
                    },
                }
            }
            stats.faces += 1;
        }

        tracing::info!(
            faces = stats.faces,
            drawn = stats.edges_drawn,
            skipped = stats.edges_skipped,
            "rendered wireframe"
        );
        Ok(stats)
    }

    /// Allocate a buffer and render `mesh` into it.
    pub fn render(&self, mesh: &Mesh) -> Result<(FrameBuffer, RenderStats), RenderError> {
        let mut buffer = self.create_framebuffer();
        let stats = self.render_wireframe(mesh, &mut buffer)?;
        Ok((buffer, stats))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
