//! Pixel buffer, line rasterizer and wireframe renderer.

pub mod framebuffer;
pub mod line;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use line::{draw_line, line_points, LinePoints};
pub use renderer::{RenderStats, Renderer};
